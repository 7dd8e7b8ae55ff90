use std::fmt;

use crate::error::StoreError;

/// Name of a saved account. Doubles as the file name inside the store directory,
/// so it must be a single path component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AliasName(String);

impl AliasName {
    /// Validate a raw command-line argument.
    ///
    /// `command` is only used to build the usage hint when the argument is missing.
    pub fn parse(raw: Option<&str>, command: &'static str) -> Result<Self, StoreError> {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(StoreError::MissingAlias { command }),
        };

        if raw == "." || raw == ".." || raw.contains(['/', '\\', '\0']) {
            return Err(StoreError::InvalidAlias(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AliasName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AliasName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        let alias = AliasName::parse(Some("work-2"), "add").unwrap();
        assert_eq!(alias.as_str(), "work-2");
        assert_eq!(alias.to_string(), "work-2");
    }

    #[test]
    fn accepts_dotted_names() {
        assert!(AliasName::parse(Some(".hidden"), "add").is_ok());
        assert!(AliasName::parse(Some("a.b"), "add").is_ok());
    }

    #[test]
    fn missing_or_blank_is_missing_alias() {
        for raw in [None, Some(""), Some("   ")] {
            let err = AliasName::parse(raw, "use").unwrap_err();
            assert!(matches!(err, StoreError::MissingAlias { command: "use" }));
        }
    }

    #[test]
    fn rejects_path_like_names() {
        for raw in [".", "..", "a/b", "a\\b", "nul\0"] {
            let err = AliasName::parse(Some(raw), "add").unwrap_err();
            assert!(matches!(err, StoreError::InvalidAlias(_)), "{raw:?}");
        }
    }
}
