//! Configuration management for the greeter.
//!
//! Config files are Markdown documents whose YAML frontmatter holds the
//! settings. Both the global and the project file are optional; when neither
//! exists the built-in defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter::{join_frontmatter, split_frontmatter};
use crate::greeter::Greeter;
use crate::paths;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub truncation: TruncationConfig,
    /// Files that contributed to this config, in merge order
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Global config (<config dir>/greet/config.md)
    /// 3. Project config (.greet/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Some(Path::new(paths::PROJECT_CONFIG)),
        )
    }

    /// Like [`Config::load`], but with `project_path` in place of
    /// `.greet/config.md`. The file must exist.
    pub fn load_with_project(project_path: &Path) -> Result<Self> {
        if !project_path.is_file() {
            anyhow::bail!("Config file not found: {}", project_path.display());
        }

        Self::load_merged_from(global_config_path().as_deref(), Some(project_path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;

        config.truncation.validate()?;

        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files are skipped; files that exist must parse.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        for path in [global_path, project_path].into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            let partial = PartialConfig::load_from(path)?;
            config = config.merge_with(partial);
            config.sources.push(path.to_path_buf());
        }

        config.truncation.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(max_width) = overrides.max_width {
            self.truncation.max_width = max_width;
        }
        if let Some(ellipsis) = &overrides.ellipsis {
            self.truncation.ellipsis = ellipsis.clone();
        }

        self.truncation.validate()?;
        Ok(self)
    }

    /// Build a greeter from this config
    pub fn greeter(&self) -> Result<Greeter> {
        let policy = self.truncation.to_policy()?;
        Ok(Greeter::new(policy)
            .with_prefix(self.greeting.prefix.clone())
            .with_suffix(self.greeting.suffix.clone())
            .with_bare(self.greeting.bare.clone()))
    }

    /// Render this config as a Markdown config file
    pub fn to_markdown(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        Ok(join_frontmatter(&yaml, "# Greeter Config"))
    }

    fn merge_with(mut self, partial: PartialConfig) -> Self {
        if let Some(greeting) = partial.greeting {
            if let Some(prefix) = greeting.prefix {
                self.greeting.prefix = prefix;
            }
            if let Some(suffix) = greeting.suffix {
                self.greeting.suffix = suffix;
            }
            if let Some(bare) = greeting.bare {
                self.greeting.bare = bare;
            }
        }

        if let Some(truncation) = partial.truncation {
            if let Some(max_width) = truncation.max_width {
                self.truncation.max_width = max_width;
            }
            if let Some(ellipsis) = truncation.ellipsis {
                self.truncation.ellipsis = ellipsis;
            }
        }

        self
    }
}

/// Values given on the command line that take precedence over config files
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_width: Option<usize>,
    pub ellipsis: Option<String>,
}

/// Returns the path to the global config file at <config dir>/greet/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(paths::GLOBAL_CONFIG))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub greeting: Option<PartialGreetingConfig>,
    pub truncation: Option<PartialTruncationConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialGreetingConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub bare: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialTruncationConfig {
    pub max_width: Option<usize>,
    pub ellipsis: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let (frontmatter, _body) = split_frontmatter(&content);
        let frontmatter = frontmatter
            .with_context(|| format!("Failed to extract frontmatter from {}", path.display()))?;

        serde_yaml::from_str(&frontmatter)
            .with_context(|| format!("Failed to parse config frontmatter in {}", path.display()))
    }
}
