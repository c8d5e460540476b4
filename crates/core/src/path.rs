// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C1: translates between the local cloud-drive mount and the logical,
//! `~`-rooted remote path space, and tokenizes shell lines so each token can
//! be checked for a path-shaped rewrite.

/// Translates between a local mount point and the logical remote root (`~`).
///
/// Pure and infallible: every method returns its input unchanged when no
/// rewrite rule applies, per SPEC_FULL.md §4.1.
#[derive(Debug, Clone)]
pub struct PathResolver {
    mount_base: String,
    home: String,
}

impl PathResolver {
    pub fn new(mount_base: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            mount_base: mount_base.into(),
            home: home.into(),
        }
    }

    /// Rewrite a local path to its logical remote form.
    ///
    /// - A path under `mount_base` becomes `~/<relative>`.
    /// - A path equal to `home` becomes exactly `~`.
    /// - A path under `home` becomes `~/<relative>`.
    /// - Anything else passes through unchanged.
    pub fn to_remote(&self, local_path: &str) -> String {
        if let Some(rewritten) = rewrite_prefix(local_path, &self.mount_base, "~") {
            return rewritten;
        }
        if let Some(rewritten) = rewrite_prefix(local_path, &self.home, "~") {
            return rewritten;
        }
        local_path.to_string()
    }

    /// Inverse of [`to_remote`]: rewrite a logical remote path back to a local one.
    pub fn to_local(&self, remote_path: &str) -> String {
        if remote_path == "~" {
            return self.mount_base.clone();
        }
        if let Some(rest) = remote_path.strip_prefix("~/") {
            return format!("{}/{}", self.mount_base.trim_end_matches('/'), rest);
        }
        remote_path.to_string()
    }
}

/// Rewrite `text` to `replacement` (+ any trailing slash segment) if `text`
/// equals `prefix` exactly or begins with `prefix/`.
///
/// A token like `$HOMEextra` must NOT match `$HOME` (no trailing slash
/// boundary), so this function only rewrites at a `/`-delimited boundary or
/// an exact match.
fn rewrite_prefix(text: &str, prefix: &str, replacement: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    if text == prefix {
        return Some(replacement.to_string());
    }
    let with_slash = format!("{}/", prefix);
    text.strip_prefix(&with_slash)
        .map(|rest| format!("{}/{}", replacement, rest))
}

/// Split a shell line into whitespace-separated tokens, preserving quoted
/// segments (single or double quotes) as a single token with the quotes
/// stripped.
///
/// This is intentionally a small, quote-aware tokenizer, not a full shell
/// grammar — the Dispatcher only needs tokens to identify which ones look
/// like paths so [`PathResolver::to_remote`] can be applied to them.
pub fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => {
                quote = None;
            }
            Some(_) => {
                current.push(c);
            }
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_token = true;
            }
            None if c == '\\' => {
                if let Some(&next) = chars.peek() {
                    current.push(next);
                    chars.next();
                    in_token = true;
                }
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token || quote.is_some() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
