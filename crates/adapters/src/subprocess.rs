// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Default timeout for clipboard-write commands (`pbcopy`/`xclip`/`clip`).
pub const CLIPBOARD_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for spawning the `reo-window` child binary itself
/// (distinct from the caller-specified window interaction timeout).
pub const WINDOW_SPAWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for a single PID-liveness probe.
pub const PID_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Run a subprocess command with a timeout.
///
/// Wraps `Command::output()` with `tokio::time::timeout`, converting
/// timeout expiration into a descriptive error message. The child process
/// is killed automatically if the timeout elapses (via the tokio `Child`
/// drop implementation).
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, String> {
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(io_err)) => Err(format!("{} failed: {}", description, io_err)),
        Err(_elapsed) => Err(format!(
            "{} timed out after {}s",
            description,
            timeout.as_secs()
        )),
    }
}

/// Run a subprocess with a timeout, writing `input` to its stdin before
/// waiting on its output. Used by the clipboard adapter, whose platform
/// utilities (`pbcopy`/`xclip`/`clip`) read the text to copy from stdin.
///
/// The caller must configure `cmd`'s stdin as `Stdio::piped()`.
pub async fn run_with_timeout_with_stdin(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
    input: &[u8],
) -> Result<Output, String> {
    use tokio::io::AsyncWriteExt;

    let fut = async {
        let mut child = cmd
            .spawn()
            .map_err(|e| format!("{} failed to spawn: {}", description, e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| format!("{} has no stdin pipe", description))?;
        stdin
            .write_all(input)
            .await
            .map_err(|e| format!("{} failed writing stdin: {}", description, e))?;
        drop(stdin);

        child
            .wait_with_output()
            .await
            .map_err(|e| format!("{} failed: {}", description, e))
    };

    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_elapsed) => Err(format!(
            "{} timed out after {}s",
            description,
            timeout.as_secs()
        )),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
