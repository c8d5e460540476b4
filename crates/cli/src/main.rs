// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! reo - Remote Execution Orchestrator CLI

mod cli;
mod color;
mod config;
mod dispatcher;
mod exit_error;
mod heartbeat;
mod logging;
mod output;
mod result_exchange;
mod session_commands;
mod table;
mod window_manager;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::FromArgMatches;
use reo_adapters::ProcessWindowAdapter;
use reo_core::{PathResolver, ShellId, SystemClock};
use reo_storage::{SessionStore, WindowLock};

use crate::cli::Cli;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;
use crate::window_manager::WindowManager;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is redundant and skipped (common when `thiserror`
/// variants use `#[error("... {0}")]` with `#[from]`).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err.chain().skip(1).all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let matches = cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let format = cli.output;

    let config = Config::load(cli.state_dir.clone()).context("failed to resolve configuration")?;
    let _log_guard = logging::setup(&config.log_path(), cli.verbose).context("failed to set up logging")?;

    let sessions = Arc::new(SessionStore::new(&config.state_dir));
    let clock = SystemClock;

    if cli.create_remote_shell {
        return session_commands::create(&sessions, &clock, format);
    }
    if cli.list_remote_shell {
        return session_commands::list(&sessions, &clock, format);
    }
    if let Some(id) = &cli.checkout_remote_shell {
        return session_commands::checkout(&sessions, id, format);
    }
    if let Some(id) = &cli.terminate_remote_shell {
        return session_commands::terminate(&sessions, id, format);
    }

    let Some(tokens) = cli.shell else {
        anyhow::bail!(ExitError::new(1, "no command given; pass --shell <args...>"));
    };

    let home = dirs::home_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let path_resolver = PathResolver::new(config.mount_base.display().to_string(), home);

    let queue_dir = config.state_dir.clone();
    let queue = Arc::new(reo_storage::QueueStore::new(&queue_dir));
    let window_lock = Arc::new(WindowLock::new(&queue_dir));
    let adapter = ProcessWindowAdapter::new(config.window_binary_path(), config.state_dir.join("windows"));

    let orchestrator_pid = std::process::id();
    // Minted once per process so a reused PID from an unrelated process is
    // never mistaken for a live orchestrator holder (§9.1).
    let cookie: u64 = rand::random();
    let window_manager = Arc::new(WindowManager::new(
        queue,
        window_lock,
        adapter,
        clock.clone(),
        orchestrator_pid,
        cookie,
    ));

    let dispatcher = Dispatcher::new(
        path_resolver,
        sessions,
        window_manager,
        config.remote_result_dir.clone(),
        clock,
    );

    let session_id = cli.session.as_deref().map(ShellId::new);
    let user_line = tokens.join(" ");

    tokio::select! {
        outcome = dispatcher.run_remote(&user_line, session_id.as_ref()) => handle_outcome(outcome, &cli, format),
        () = shutdown_signal() => {
            // The window lock is a flock, released by the kernel the instant
            // this process exits; only the spawned reo-window children need
            // an explicit kill (§4.4 "Emergency cleanup", §9 redesign flag:
            // keep the handler minimal).
            tracing::warn!("shutdown signal received, force-killing tracked windows");
            reo_adapters::kill_tracked_windows();
            anyhow::bail!(ExitError::new(130, ""));
        }
    }
}

/// Waits for Ctrl-C or, on Unix, SIGTERM — whichever arrives first.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {}
            _ = term.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
}

fn handle_outcome(
    outcome: std::result::Result<crate::dispatcher::DispatchOutcome, reo_core::CoreError>,
    cli: &Cli,
    format: OutputFormat,
) -> Result<()> {
    match outcome {
        Ok(outcome) => {
            if cli.return_structured || matches!(format, OutputFormat::Json) {
                println!(
                    "{}",
                    serde_json::json!({
                        "exit_code": outcome.exit_code,
                        "stdout": outcome.stdout,
                        "stderr": outcome.stderr,
                        "truncated": outcome.truncated,
                    })
                );
            } else {
                print!("{}", outcome.stdout);
                eprint!("{}", outcome.stderr);
            }
            if outcome.exit_code != 0 {
                let message = if cli.return_structured || matches!(format, OutputFormat::Json) {
                    ""
                } else {
                    "remote command exited non-zero"
                };
                anyhow::bail!(ExitError::new(1, message));
            }
            Ok(())
        }
        Err(e) => {
            if cli.return_structured || matches!(format, OutputFormat::Json) {
                println!("{}", serde_json::json!({ "error": e.to_string(), "kind": e.kind_tag() }));
                anyhow::bail!(ExitError::new(1, ""));
            }
            anyhow::bail!(ExitError::new(1, e.to_string()));
        }
    }
}
