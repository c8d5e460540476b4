// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C5 CLI glue: `--create-remote-shell`, `--list-remote-shell`,
//! `--checkout-remote-shell`, `--terminate-remote-shell` (§4.5, §4.8).

use std::io::Write;

use anyhow::{Context, Result};
use reo_core::{Clock, Shell, ShellId};
use reo_storage::SessionStore;

use crate::output::OutputFormat;
use crate::table::{Column, Table};

pub fn create(sessions: &SessionStore, clock: &impl Clock, format: OutputFormat) -> Result<()> {
    let now = clock.epoch_ms() as f64 / 1000.0;
    let id = sessions.create(now).context("failed to create remote shell")?;
    match format {
        OutputFormat::Text => println!("{}", id.as_str()),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id.as_str() }))
        }
    }
    Ok(())
}

pub fn list(sessions: &SessionStore, clock: &impl Clock, format: OutputFormat) -> Result<()> {
    let current = sessions.current().context("failed to read remote shells")?;
    let mut shells = sessions.list().context("failed to list remote shells")?;
    shells.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));

    match format {
        OutputFormat::Text => {
            if shells.is_empty() {
                println!("No remote shells");
            } else {
                let now = clock.epoch_ms() as f64 / 1000.0;
                format_shell_list(&mut std::io::stdout(), &shells, current.as_ref().map(|s| &s.id), now);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&shells)?);
        }
    }
    Ok(())
}

pub fn checkout(sessions: &SessionStore, id: &str, format: OutputFormat) -> Result<()> {
    let id = ShellId::new(id);
    sessions
        .checkout(&id)
        .with_context(|| format!("unknown remote shell: {}", id.as_str()))?;
    match format {
        OutputFormat::Text => println!("Switched to remote shell {}", id.as_str()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id.as_str(), "current": true })),
    }
    Ok(())
}

pub fn terminate(sessions: &SessionStore, id: &str, format: OutputFormat) -> Result<()> {
    let id = ShellId::new(id);
    sessions
        .terminate(&id)
        .with_context(|| format!("unknown remote shell: {}", id.as_str()))?;
    match format {
        OutputFormat::Text => println!("Terminated remote shell {}", id.as_str()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id.as_str(), "terminated": true })),
    }
    Ok(())
}

fn format_shell_list(w: &mut impl Write, shells: &[Shell], current: Option<&ShellId>, now: f64) {
    let mut table = Table::new(vec![
        Column::left("SHELL"),
        Column::left("CWD"),
        Column::left("VENV"),
        Column::left("LAST USED"),
    ]);
    for shell in shells {
        let marker = if current == Some(&shell.id) { "*" } else { " " };
        table.row(vec![
            format!("{marker}{}", shell.id.as_str()),
            shell.cwd.clone(),
            shell.active_venv.clone().unwrap_or_else(|| "-".to_string()),
            crate::output::format_time_ago(shell.last_used_at, now),
        ]);
    }
    table.render(w);
}

#[cfg(test)]
#[path = "session_commands_tests.rs"]
mod tests;
