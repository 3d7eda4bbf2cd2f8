//! CLI-specific UI output modules

pub mod output;

pub use output::{Output, OutputMode};
