//! The default command: greet the given names.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

use greeter::Greeter;

use crate::cmd::ui::Output;

/// Greet each name on its own line, or print the bare greeting when there
/// are no names.
pub fn cmd_greet(greeter: &Greeter, names: &[String], out: &Output) -> Result<()> {
    if names.is_empty() {
        out.greeting(None, &greeter.greet_anonymous());
        return Ok(());
    }

    for name in names {
        out.greeting(Some(name), &greeter.greet(name));
    }
    Ok(())
}

/// Read names from piped stdin. Refuses to block on an interactive terminal.
pub fn read_stdin_names() -> Result<Vec<String>> {
    if atty::is(atty::Stream::Stdin) {
        anyhow::bail!("--stdin expects names piped on standard input");
    }

    read_names(io::stdin().lock())
}

/// One name per line. Line endings are stripped and blank lines skipped;
/// other whitespace is part of the name.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read names from stdin")?;
        let name = line.strip_suffix('\r').unwrap_or(&line);
        if !name.trim().is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
