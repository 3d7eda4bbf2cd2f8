//! Centralized UI formatting and color utilities
//!
//! This module provides the colors and quiet-mode detection shared by the
//! `greet` CLI.

/// Check if quiet mode is enabled via the `GREET_QUIET` environment variable
pub fn is_quiet() -> bool {
    std::env::var("GREET_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (paths, keys)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}
