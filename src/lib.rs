//! # Greeter
//!
//! Builds greetings like `"Hello, John!"`, abbreviating names that are wider
//! than a fixed display budget.
//!
//! ## Modules
//!
//! - [`greeter`] - The [`Greeter`] type and the [`greet`] convenience function
//! - [`abbreviate`] - Character-based truncation with an ellipsis marker
//! - [`config`] - Optional global and project configuration files
//! - [`frontmatter`] - YAML frontmatter splitting for config files
//! - [`ui`] - Terminal colors and quiet-mode detection
//!
//! ## Example
//!
//! ```
//! use greeter::abbreviate::TruncationPolicy;
//! use greeter::Greeter;
//!
//! assert_eq!(greeter::greet("John"), "Hello, John!");
//! assert_eq!(greeter::greet("John Williams Smith, Jr."), "Hello, John Wi...!");
//!
//! let policy = TruncationPolicy::new(8, "…").expect("width holds the ellipsis");
//! let greeter = Greeter::new(policy).with_prefix("Hi ");
//! assert_eq!(greeter.greet("Maximilian"), "Hi Maximil…!");
//! ```

pub mod abbreviate;
pub mod config;
pub mod frontmatter;
pub mod greeter;
pub mod ui;

pub use greeter::{greet, Greeter};

/// Default path constants for greeter config files.
pub mod paths {
    /// Project config file, relative to the working directory: `.greet/config.md`
    pub const PROJECT_CONFIG: &str = ".greet/config.md";
    /// Global config file, relative to the platform config dir: `greet/config.md`
    pub const GLOBAL_CONFIG: &str = "greet/config.md";
}
