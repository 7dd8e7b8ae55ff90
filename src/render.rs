//! Terminal rendering for listings, notices and errors.

use std::io::IsTerminal;

use crate::error::StoreError;
use crate::models::Listing;

const SELECTED_PREFIX: &str = "->       ";
const UNSELECTED_PREFIX: &str = "         ";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Whether output may carry ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Colour only on an interactive stdout, and never when `NO_COLOR` is set.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            color: !no_color && std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Render one line per alias, marking the selected one.
///
/// Example output:
/// ```text
///          home
/// ->       work
/// ```
pub fn render_listing(listing: &Listing, style: Style) -> String {
    let mut output = String::new();
    for entry in &listing.entries {
        if entry.selected {
            output.push_str(&style.paint(GREEN, &format!("{SELECTED_PREFIX}{}", entry.name)));
        } else {
            output.push_str(UNSELECTED_PREFIX);
            output.push_str(&entry.name);
        }
        output.push('\n');
    }
    output
}

/// Red message, optional suggestion on the next line, then a blank line.
pub fn render_notice(message: &str, suggestion: Option<&str>, style: Style) -> String {
    let mut output = style.paint(RED, message);
    if let Some(suggestion) = suggestion {
        output.push('\n');
        output.push_str(suggestion);
    }
    output.push_str("\n\n");
    output
}

pub fn render_error(err: &StoreError, style: Style) -> String {
    render_notice(&err.to_string(), err.suggestion().as_deref(), style)
}

/// Shown by `gam ls` when the store holds nothing.
pub fn render_empty(style: Style) -> String {
    render_notice(
        "No accounts found.",
        Some("Try adding one with `$ gam add <account-name>`"),
        style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AliasEntry;

    fn listing(entries: &[(&str, bool)]) -> Listing {
        Listing {
            entries: entries
                .iter()
                .map(|(name, selected)| AliasEntry {
                    name: name.to_string(),
                    selected: *selected,
                })
                .collect(),
        }
    }

    #[test]
    fn test_marks_selected_alias() {
        let output = render_listing(&listing(&[("a", false), ("b", true)]), Style::plain());
        assert_eq!(output, "         a\n->       b\n");
    }

    #[test]
    fn test_colours_selected_alias_only() {
        let output = render_listing(&listing(&[("a", false), ("b", true)]), Style::colored());
        assert_eq!(output, "         a\n\x1b[32m->       b\x1b[0m\n");
    }

    #[test]
    fn test_empty_listing_renders_nothing() {
        assert_eq!(render_listing(&Listing::default(), Style::plain()), "");
    }

    #[test]
    fn test_error_with_suggestion() {
        let err = StoreError::NotFound("x".into());
        assert_eq!(
            render_error(&err, Style::plain()),
            "Account \"x\" doesn't exist.\nUse `$ gam ls` to list available accounts.\n\n"
        );
    }

    #[test]
    fn test_error_without_suggestion_is_red() {
        let err = StoreError::AliasExists("x".into());
        assert_eq!(
            render_error(&err, Style::colored()),
            "\x1b[31mAccount already exists!\x1b[0m\n\n"
        );
    }
}
