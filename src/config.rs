//! Locations of the alias store and the active config file.
//!
//! Resolved once at startup from the environment:
//! - `HOME` - home directory (falls back to the platform lookup from `dirs`)
//! - `GAM_APP` - name of the tool whose `~/.<app>rc` is managed (default: `graphcool`)

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory under the home directory that holds one file per alias.
pub const STORE_DIR_NAME: &str = ".gam";

/// App whose rc file is managed when `GAM_APP` is unset.
pub const DEFAULT_APP_NAME: &str = "graphcool";

/// Environment variable overriding [`DEFAULT_APP_NAME`].
pub const APP_NAME_ENV: &str = "GAM_APP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Flat directory of saved aliases.
    pub store_dir: PathBuf,
    /// The live config file that `use` overwrites.
    pub active_file: PathBuf,
}

impl StorePaths {
    pub fn new(store_dir: impl Into<PathBuf>, active_file: impl Into<PathBuf>) -> Self {
        Self {
            store_dir: store_dir.into(),
            active_file: active_file.into(),
        }
    }

    /// Standard layout: `<home>/.gam` and `<home>/.<app>rc`.
    pub fn for_home(home: &Path, app: &str) -> Self {
        Self::new(home.join(STORE_DIR_NAME), home.join(format!(".{app}rc")))
    }

    /// Build paths from already-looked-up values.
    pub fn resolve(home: Option<PathBuf>, app: Option<String>) -> Result<Self, ConfigError> {
        let home = home.ok_or(ConfigError::NoHomeDirectory)?;
        let app = app.unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        if app.is_empty() || app.contains(['/', '\\']) {
            return Err(ConfigError::InvalidAppName(app));
        }

        Ok(Self::for_home(&home, &app))
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(home_dir(), std::env::var(APP_NAME_ENV).ok())
    }
}

fn home_dir() -> Option<PathBuf> {
    // $HOME wins so that `HOME=/tmp/x gam ls` behaves like the shell expects.
    if let Ok(h) = std::env::var("HOME") {
        if !h.is_empty() {
            return Some(PathBuf::from(h));
        }
    }
    dirs::home_dir()
}
