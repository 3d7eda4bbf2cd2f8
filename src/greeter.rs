//! Greeting construction.
//!
//! A [`Greeter`] wraps a name between a prefix and a suffix, abbreviating the
//! name first when it is wider than the greeter's [`TruncationPolicy`].

use crate::abbreviate::{abbreviate, TruncationPolicy};

/// Default text placed before the name
pub const DEFAULT_PREFIX: &str = "Hello, ";
/// Default text placed after the name
pub const DEFAULT_SUFFIX: &str = "!";
/// Greeting used when there is nobody to name
pub const DEFAULT_BARE: &str = "Hello!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    prefix: String,
    suffix: String,
    bare: String,
    policy: TruncationPolicy,
}

impl Greeter {
    /// Greeter with the default wording and the given truncation policy
    pub fn new(policy: TruncationPolicy) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            bare: DEFAULT_BARE.to_string(),
            policy,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_bare(mut self, bare: impl Into<String>) -> Self {
        self.bare = bare.into();
        self
    }

    pub fn policy(&self) -> &TruncationPolicy {
        &self.policy
    }

    /// Greet `name`. Total over all inputs; the empty name yields
    /// `"Hello, !"` with the default wording.
    pub fn greet(&self, name: &str) -> String {
        let shown = abbreviate(name, &self.policy);
        let mut out = String::with_capacity(self.prefix.len() + shown.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&shown);
        out.push_str(&self.suffix);
        out
    }

    /// The greeting printed when no name was given
    pub fn greet_anonymous(&self) -> String {
        self.bare.clone()
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(TruncationPolicy::default())
    }
}

/// Greet `name` with the default wording and a 10-character name budget.
///
/// ```
/// assert_eq!(greeter::greet("John"), "Hello, John!");
/// assert_eq!(greeter::greet("John Williams Smith, Jr."), "Hello, John Wi...!");
/// ```
pub fn greet(name: &str) -> String {
    Greeter::default().greet(name)
}
