// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C5 data model: persistent remote-shell session records (§3 `Shell`/`SessionRegistry`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifies a persistent remote-shell session.
    pub struct ShellId;
}

/// A named persistent remote-shell context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    pub id: ShellId,
    /// Always `~`-rooted (§I7); never contains the local-mount prefix.
    pub cwd: String,
    pub env: HashMap<String, String>,
    pub active_venv: Option<String>,
    pub created_at: f64,
    pub last_used_at: f64,
}

impl Shell {
    pub fn new(id: ShellId, now: f64) -> Self {
        Self {
            id,
            cwd: "~".to_string(),
            env: HashMap::new(),
            active_venv: None,
            created_at: now,
            last_used_at: now,
        }
    }
}

/// The full on-disk session registry (§6 session-registry file format).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRegistryState {
    pub current: Option<ShellId>,
    pub shells: HashMap<ShellId, Shell>,
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
