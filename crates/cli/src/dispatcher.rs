// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C6: the Command Dispatcher — the only component that knows the shape of
//! the user-facing command (§4.6).

use std::path::PathBuf;
use std::sync::Arc;

use reo_adapters::WindowAdapter;
use reo_core::{split_tokens, Clock, CoreError, PathResolver, RequestId, Shell, ShellId};
use reo_storage::SessionStore;
use uuid::Uuid;

use crate::result_exchange::{ResultExchange, ResultOutcome};
use crate::window_manager::{WindowManager, WindowOutcome};

/// Upper bound on how long a rendered remote command is allowed to hold the
/// window slot (§4.6 step 6 references C4's `timeout_seconds`).
const DEFAULT_WINDOW_TIMEOUT_SECS: u64 = 60;

/// The uniform structured object `run_remote` returns to every caller
/// (§4.6 step 9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub truncated: bool,
}

impl DispatchOutcome {
    fn local(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
            truncated: false,
        }
    }
}

pub struct Dispatcher<W, C> {
    path_resolver: PathResolver,
    sessions: Arc<SessionStore>,
    window_manager: Arc<WindowManager<W, C>>,
    result_exchange: ResultExchange<C>,
    clock: C,
}

impl<W, C> Dispatcher<W, C>
where
    W: WindowAdapter,
    C: Clock,
{
    pub fn new(
        path_resolver: PathResolver,
        sessions: Arc<SessionStore>,
        window_manager: Arc<WindowManager<W, C>>,
        remote_result_dir: PathBuf,
        clock: C,
    ) -> Self {
        let result_exchange = ResultExchange::new(remote_result_dir, clock.clone());
        Self {
            path_resolver,
            sessions,
            window_manager,
            result_exchange,
            clock,
        }
    }

    pub async fn run_remote(
        &self,
        user_line: &str,
        session_id: Option<&ShellId>,
    ) -> Result<DispatchOutcome, CoreError> {
        let tokens = split_tokens(user_line);
        if tokens.is_empty() {
            return Ok(DispatchOutcome::local(""));
        }
        let resolved: Vec<String> = tokens.iter().map(|t| self.path_resolver.to_remote(t)).collect();

        let now = self.clock.epoch_ms() as f64 / 1000.0;
        let shell = self.select_session(session_id, now)?;

        match resolved[0].as_str() {
            "cd" => return self.handle_cd(&shell, resolved.get(1).map(String::as_str), now),
            "pwd" => return Ok(DispatchOutcome::local(format!("{}\n", shell.cwd))),
            _ => {}
        }

        let id = RequestId::new(Uuid::new_v4().to_string());
        let result_path = self.result_exchange.result_path(&id);
        let command_text = render_remote_command(&shell, &resolved, &result_path);
        let title = resolved.join(" ");

        let outcome = self
            .window_manager
            .request_window(id.clone(), &title, &command_text, DEFAULT_WINDOW_TIMEOUT_SECS)
            .await;

        match outcome {
            WindowOutcome::Success => match self.result_exchange.collect(&id).await {
                ResultOutcome::Found(result) => Ok(DispatchOutcome {
                    exit_code: result.exit_code,
                    stdout: result.stdout,
                    stderr: result.stderr,
                    truncated: result.truncated,
                }),
                ResultOutcome::NoResult => Err(CoreError::NoResult),
                ResultOutcome::BadResult(message) => Err(CoreError::BadResult(message)),
            },
            WindowOutcome::DirectFeedback(message) => Ok(DispatchOutcome {
                exit_code: 0,
                stdout: String::new(),
                stderr: message.unwrap_or_default(),
                truncated: false,
            }),
            WindowOutcome::Timeout => Err(CoreError::Timeout),
            WindowOutcome::ParentKilled => {
                Err(CoreError::WindowError("orchestrator process was killed mid-interaction".into()))
            }
            WindowOutcome::SlotTimeout => Err(CoreError::SlotTimeout),
            WindowOutcome::Evicted => Err(CoreError::Evicted),
            WindowOutcome::WindowError(message) => Err(CoreError::WindowError(message)),
        }
    }

    fn select_session(&self, session_id: Option<&ShellId>, now: f64) -> Result<Shell, CoreError> {
        if let Some(id) = session_id {
            let shells = self
                .sessions
                .list()
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
            return shells
                .into_iter()
                .find(|s| &s.id == id)
                .ok_or_else(|| CoreError::UnknownSession(id.as_str().to_string()));
        }

        let current = self
            .sessions
            .current()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        match current {
            Some(shell) => Ok(shell),
            None => {
                self.sessions
                    .create(now)
                    .map_err(|e| CoreError::StorageError(e.to_string()))?;
                self.sessions
                    .current()
                    .map_err(|e| CoreError::StorageError(e.to_string()))?
                    .ok_or_else(|| CoreError::StorageError("session vanished immediately after creation".into()))
            }
        }
    }

    /// `cd` is handled entirely locally (§4.6 step 5) and guarded so the
    /// resulting path cannot escape above `~` (§4.5 semantic rules, §8 S5).
    fn handle_cd(
        &self,
        shell: &Shell,
        target: Option<&str>,
        now: f64,
    ) -> Result<DispatchOutcome, CoreError> {
        let target = target.unwrap_or("~");
        let new_cwd = resolve_cd(&shell.cwd, target)
            .ok_or_else(|| CoreError::ForbiddenPath(target.to_string()))?;
        self.sessions
            .update_cwd(&shell.id, &new_cwd, now)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(DispatchOutcome::local(""))
    }
}

/// Resolve `target` (absolute `~/...` or relative to `cwd`) into a new
/// `~`-rooted logical path, rejecting any attempt to climb above `~`.
fn resolve_cd(cwd: &str, target: &str) -> Option<String> {
    let mut stack: Vec<String> = if target.starts_with('~') {
        Vec::new()
    } else {
        cwd.trim_start_matches('~')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };

    let rest = target.trim_start_matches('~').trim_start_matches('/');
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.pop().is_none() {
                    return None;
                }
            }
            s => stack.push(s.to_string()),
        }
    }

    if stack.is_empty() {
        Some("~".to_string())
    } else {
        Some(format!("~/{}", stack.join("/")))
    }
}

/// Render the remote bash one-liner (§4.6 step 4): `cd` into the session's
/// cwd, activate its venv if any, run the user's command, and hand exit
/// code/stdout/stderr off to `reo-capture-result`, a small remote-side
/// helper responsible for writing the pre-agreed result file — the exact
/// scaffolding is an internal contract; its only external guarantee is that
/// the result file exists with parseable JSON after the window completes.
fn render_remote_command(shell: &Shell, tokens: &[String], result_path: &std::path::Path) -> String {
    let activate = match &shell.active_venv {
        Some(venv) => format!("source {venv}/bin/activate && "),
        None => String::new(),
    };
    let user_command = tokens.join(" ");
    format!(
        "cd {cwd} && {activate}( {cmd} ) >/tmp/.reo_stdout 2>/tmp/.reo_stderr; \
         ec=$?; reo-capture-result --exit-code \"$ec\" --stdout-file /tmp/.reo_stdout \
         --stderr-file /tmp/.reo_stderr --out {result}",
        cwd = shell.cwd,
        activate = activate,
        cmd = user_command,
        result = result_path.display(),
    )
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
