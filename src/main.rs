//! CLI entry point for greet.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use greeter::config::ConfigOverrides;

use cli::{Cli, Commands};
use cmd::ui::{Output, OutputMode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_flags(cli.json, cli.quiet);
    let diag = Output::stderr(mode);

    match run(cli, mode, &diag) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diag.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mode: OutputMode, diag: &Output) -> Result<()> {
    let out = Output::new(mode);

    // These never read config, so a broken config file cannot block them
    match &cli.command {
        Some(Commands::Version { verbose }) => return cmd::util::cmd_version(*verbose, &out),
        Some(Commands::Completion { shell }) => return cmd::util::cmd_completion(*shell),
        Some(Commands::Man { out_dir }) => {
            return cmd::util::cmd_man(out_dir.as_deref(), &out).map(|_| ())
        }
        _ => {}
    }

    let overrides = ConfigOverrides {
        max_width: cli.max_width,
        ellipsis: cli.ellipsis.clone(),
    };
    let config = cmd::config::load_config(cli.config.as_deref(), &overrides)?;

    if let Some(Commands::Config) = cli.command {
        return cmd::config::cmd_config(&config, &out, diag);
    }

    let mut names = cli.names;
    if cli.stdin {
        let piped = cmd::greet::read_stdin_names()?;
        if piped.is_empty() {
            diag.warn("No names on stdin");
        }
        names.extend(piped);
    }

    let greeter = config.greeter()?;
    cmd::greet::cmd_greet(&greeter, &names, &out)
}
