//! Config resolution for every command, and the `config` command itself.

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use greeter::config::{Config, ConfigOverrides};
use greeter::ui::colors;

use crate::cmd::ui::{Output, OutputMode};

/// Resolve the effective config: defaults, then the global file, then the
/// project file (or `explicit` in its place), then command-line overrides.
pub fn load_config(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_with_project(path)?,
        None => Config::load()?,
    };

    config
        .apply_overrides(overrides)
        .context("Invalid command-line override")
}

/// Print the resolved config as a config file, preceded by its sources
pub fn cmd_config(config: &Config, out: &Output, diag: &Output) -> Result<()> {
    if out.mode() == OutputMode::Json {
        let sources: Vec<String> = config
            .sources
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        out.json(&json!({
            "sources": sources,
            "config": serde_json::to_value(config).context("Failed to serialize config")?,
        }));
        return Ok(());
    }

    diag.info(&colors::heading("Config sources").to_string());
    if config.sources.is_empty() {
        diag.detail(&colors::secondary("(built-in defaults)").to_string());
    }
    for source in &config.sources {
        diag.detail(&colors::identifier(&source.display().to_string()).to_string());
    }

    out.raw(&config.to_markdown()?);
    Ok(())
}
