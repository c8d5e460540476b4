//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolve a binary under the workspace's `target/debug`, falling back to
/// resolving relative to the test binary itself (so it still works when
/// `CARGO_MANIFEST_DIR` points at a worktree that no longer exists).
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }
    standard
}

fn reo_binary() -> PathBuf {
    binary_path("reo")
}

/// A scratch `REO_STATE_DIR` + `REO_MOUNT_BASE`, torn down on drop.
pub struct Scratch {
    pub dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create scratch dir");
        std::fs::create_dir_all(dir.path().join("state")).unwrap();
        std::fs::create_dir_all(dir.path().join("mount")).unwrap();
        Self { dir }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn mount_base(&self) -> PathBuf {
        self.dir.path().join("mount")
    }

    /// A `reo` command pre-wired with this scratch's state dir and mount base.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(reo_binary());
        cmd.env("REO_STATE_DIR", self.state_dir());
        cmd.env("REO_MOUNT_BASE", self.mount_base());
        cmd
    }
}
