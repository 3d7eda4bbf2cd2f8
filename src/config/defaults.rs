//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::abbreviate::{DEFAULT_ELLIPSIS, DEFAULT_MAX_WIDTH};
use crate::greeter::{DEFAULT_BARE, DEFAULT_PREFIX, DEFAULT_SUFFIX};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_prefix, String, DEFAULT_PREFIX.to_string());
default_fn!(default_suffix, String, DEFAULT_SUFFIX.to_string());
default_fn!(default_bare, String, DEFAULT_BARE.to_string());
default_fn!(default_max_width, usize, DEFAULT_MAX_WIDTH);
default_fn!(default_ellipsis, String, DEFAULT_ELLIPSIS.to_string());

/// Wording of the greeting around the name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingConfig {
    /// Text before the name (default: "Hello, ")
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Text after the name (default: "!")
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Greeting printed when no name is given (default: "Hello!")
    #[serde(default = "default_bare")]
    pub bare: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            suffix: default_suffix(),
            bare: default_bare(),
        }
    }
}

/// Name abbreviation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TruncationConfig {
    /// Widest a name may be before it is abbreviated, ellipsis included (default: 10)
    #[serde(default = "default_max_width")]
    pub max_width: usize,
    /// Marker appended to abbreviated names (default: "...")
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            ellipsis: default_ellipsis(),
        }
    }
}
