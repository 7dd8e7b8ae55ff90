//! Error types for store operations and path resolution.

use std::path::PathBuf;

use thiserror::Error;

/// User-facing failures of a store operation.
///
/// Every variant except [`StoreError::Io`] is a precondition failure: the
/// operation aborted before touching the filesystem.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unable to detect an account config at {}.", .0.display())]
    NoActiveConfig(PathBuf),

    #[error("No account name provided.")]
    MissingAlias { command: &'static str },

    #[error("\"{0}\" is not a valid account name.")]
    InvalidAlias(String),

    #[error("Account already exists!")]
    AliasExists(String),

    #[error("Current account is already saved as \"{0}\".")]
    AlreadySaved(String),

    #[error("Account \"{0}\" doesn't exist.")]
    NotFound(String),

    #[error("Unexpected I/O error, try again.")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Follow-up command to print under the error, if there is one.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NoActiveConfig(_) => {
                Some("Log in with your CLI first, then run `$ gam add <account-alias>`".into())
            }
            Self::MissingAlias { command } => Some(format!("Usage: gam {command} <account-alias>")),
            Self::InvalidAlias(_) => Some("Account names must be a single file name.".into()),
            Self::AlreadySaved(alias) => Some(format!("Run `$ gam use {alias}`")),
            Self::NotFound(_) => Some("Use `$ gam ls` to list available accounts.".into()),
            Self::AliasExists(_) | Self::Io(_) => None,
        }
    }
}

/// Failures resolving where the store and the active config live.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the home directory (is $HOME set?)")]
    NoHomeDirectory,

    #[error("Invalid app name {0:?}: must be non-empty and contain no path separators")]
    InvalidAppName(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_is_reported_generically() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: StoreError = io_err.into();
        assert_eq!(e.to_string(), "Unexpected I/O error, try again.");
        assert!(e.source().is_some());
        assert!(e.suggestion().is_none());
    }

    #[test]
    fn missing_alias_suggests_command_usage() {
        let e = StoreError::MissingAlias { command: "rm" };
        assert_eq!(e.suggestion().as_deref(), Some("Usage: gam rm <account-alias>"));
    }

    #[test]
    fn already_saved_suggests_use() {
        let e = StoreError::AlreadySaved("work".into());
        assert_eq!(e.to_string(), "Current account is already saved as \"work\".");
        assert_eq!(e.suggestion().as_deref(), Some("Run `$ gam use work`"));
    }

    #[test]
    fn not_found_names_the_alias() {
        let e = StoreError::NotFound("home".into());
        assert_eq!(e.to_string(), "Account \"home\" doesn't exist.");
        assert!(e.suggestion().unwrap().contains("gam ls"));
    }
}
