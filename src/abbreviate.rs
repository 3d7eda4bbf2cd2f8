//! Character-based abbreviation with an ellipsis marker.
//!
//! Widths are counted in Unicode scalar values, so a cut never lands inside
//! a multibyte character.

use std::borrow::Cow;
use std::fmt;

/// Default maximum display width of an abbreviated segment
pub const DEFAULT_MAX_WIDTH: usize = 10;

/// Default ellipsis marker appended to abbreviated text
pub const DEFAULT_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncationError {
    /// The width leaves no room for any kept character next to the ellipsis
    WidthTooSmall { max_width: usize, min_width: usize },
}

impl fmt::Display for TruncationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncationError::WidthTooSmall {
                max_width,
                min_width,
            } => write!(
                f,
                "max width must be at least {}, got {}",
                min_width, max_width
            ),
        }
    }
}

impl std::error::Error for TruncationError {}

/// How long text may get before it is abbreviated, and what marks the cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationPolicy {
    max_width: usize,
    ellipsis: String,
}

impl TruncationPolicy {
    /// Create a policy, rejecting widths that cannot hold the ellipsis plus
    /// at least one character of the original text.
    pub fn new(max_width: usize, ellipsis: impl Into<String>) -> Result<Self, TruncationError> {
        let ellipsis = ellipsis.into();
        let min_width = ellipsis.chars().count() + 1;
        if max_width < min_width {
            return Err(TruncationError::WidthTooSmall {
                max_width,
                min_width,
            });
        }

        Ok(Self {
            max_width,
            ellipsis,
        })
    }

    /// Policy with the default ellipsis and a custom width
    pub fn with_width(max_width: usize) -> Result<Self, TruncationError> {
        Self::new(max_width, DEFAULT_ELLIPSIS)
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    /// Number of characters of the original text kept when abbreviating
    pub fn keep_chars(&self) -> usize {
        self.max_width - self.ellipsis.chars().count()
    }

    /// Whether `text` is longer than the policy allows
    pub fn would_truncate(&self, text: &str) -> bool {
        // Stop counting once past the limit; names can be arbitrarily long.
        text.chars().nth(self.max_width).is_some()
    }
}

impl Default for TruncationPolicy {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

/// Abbreviate `text` to the policy's width.
///
/// Text that fits is returned borrowed and untouched. Longer text keeps its
/// first [`TruncationPolicy::keep_chars`] characters followed by the ellipsis,
/// so the result is exactly `max_width` characters long.
///
/// ```
/// use greeter::abbreviate::{abbreviate, TruncationPolicy};
///
/// let policy = TruncationPolicy::default();
/// assert_eq!(abbreviate("John", &policy), "John");
/// assert_eq!(abbreviate("John Williams Smith, Jr.", &policy), "John Wi...");
/// ```
pub fn abbreviate<'a>(text: &'a str, policy: &TruncationPolicy) -> Cow<'a, str> {
    if !policy.would_truncate(text) {
        return Cow::Borrowed(text);
    }

    let cut = text
        .char_indices()
        .nth(policy.keep_chars())
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    let mut out = String::with_capacity(cut + policy.ellipsis.len());
    out.push_str(&text[..cut]);
    out.push_str(&policy.ellipsis);
    Cow::Owned(out)
}
