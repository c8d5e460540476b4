// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C8: the control-plane CLI surface (§4.8, §4.8.1).

use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "reo")]
pub struct Cli {
    /// Run a command in the remote environment.
    #[arg(long = "shell", num_args = 1.., value_name = "ARGS")]
    pub shell: Option<Vec<String>>,

    /// With `--shell`, suppress interactive terminal prints and return
    /// structured output instead (programmatic use).
    #[arg(long = "return", requires = "shell")]
    pub return_structured: bool,

    /// Run `--shell` against a specific remote shell rather than the
    /// current one.
    #[arg(long = "session", requires = "shell", value_name = "ID")]
    pub session: Option<String>,

    #[arg(long = "create-remote-shell")]
    pub create_remote_shell: bool,

    #[arg(long = "list-remote-shell")]
    pub list_remote_shell: bool,

    #[arg(long = "checkout-remote-shell", value_name = "ID")]
    pub checkout_remote_shell: Option<String>,

    #[arg(long = "terminate-remote-shell", value_name = "ID")]
    pub terminate_remote_shell: Option<String>,

    /// Human table/text rendering vs. machine-readable JSON.
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Raise the logging level for this invocation only.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Override `REO_STATE_DIR` for a single invocation.
    #[arg(long = "state-dir", value_name = "PATH")]
    pub state_dir: Option<PathBuf>,
}

/// Build the underlying `clap::Command`, with the project's color palette
/// applied (mirrors `Cli::command()` but lets `main` apply styling without
/// an unverified derive attribute).
pub fn command() -> clap::Command {
    use clap::CommandFactory;
    Cli::command().styles(crate::color::styles())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
