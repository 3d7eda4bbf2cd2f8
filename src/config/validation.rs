//! Validation of configuration values.

use anyhow::{Context, Result};

use super::defaults::TruncationConfig;
use crate::abbreviate::TruncationPolicy;

impl TruncationConfig {
    /// Validate truncation configuration
    pub fn validate(&self) -> Result<()> {
        self.to_policy().map(|_| ())
    }

    /// Convert into a checked [`TruncationPolicy`]
    pub fn to_policy(&self) -> Result<TruncationPolicy> {
        TruncationPolicy::new(self.max_width, self.ellipsis.clone())
            .context("Invalid truncation.max_width")
    }
}
