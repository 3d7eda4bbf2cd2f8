//! CLI argument definitions for greet.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greet")]
#[command(version)]
#[command(about = "Greet people by name", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    greet                          Print the bare greeting\n    greet John                     Hello, John!\n    greet --max-width 12 \"Jane Q. Public\"\n    cat names.txt | greet --stdin  One greeting per line of input\n    greet -- config                Greet a name that is also a subcommand\n\nA subcommand is only recognized as the first argument; anywhere else the\nword is greeted as a name."
)]
pub struct Cli {
    /// Names to greet (prints the bare greeting when none are given)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Read additional names from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Widest a name may be before it is abbreviated, ellipsis included
    #[arg(long, short = 'w', global = true, value_name = "N")]
    pub max_width: Option<usize>,

    /// Marker appended to abbreviated names
    #[arg(long, global = true, value_name = "TEXT")]
    pub ellipsis: Option<String>,

    /// Project config file to use instead of .greet/config.md
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit JSON lines instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved configuration and the files it came from
    Config,
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    #[command(hide = true)]
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
