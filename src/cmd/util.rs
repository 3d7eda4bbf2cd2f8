//! Utility commands (version, man page generation, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use serde_json::json;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::cmd::ui::{Output, OutputMode};

/// Show version information
pub fn cmd_version(verbose: bool, out: &Output) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    if out.mode() == OutputMode::Json {
        out.json(&json!({
            "version": VERSION,
            "commit": GIT_SHA,
            "built": BUILD_DATE,
        }));
        return Ok(());
    }

    out.raw(&format!("greet {}\n", VERSION));
    if verbose {
        out.info(&format!("commit: {}", GIT_SHA));
        out.info(&format!("built: {}", BUILD_DATE));
    }

    Ok(())
}

/// Generate man page
pub fn cmd_man(out_dir: Option<&Path>, out: &Output) -> Result<PathBuf> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let output_dir = out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let man_path = output_dir.join("greet.1");
    std::fs::write(&man_path, buffer)
        .with_context(|| format!("Failed to write {}", man_path.display()))?;

    out.success(&format!("Man page written to: {}", man_path.display()));
    Ok(man_path)
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "greet", &mut io::stdout());
    Ok(())
}
