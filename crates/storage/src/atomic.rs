// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic write-temp-then-rename helper (§4.2).
//!
//! Adapted from the teacher's checkpoint writer (write .tmp, fsync the file,
//! rename, fsync the parent directory) minus the zstd compression step —
//! queue and session state files are small enough not to need it.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::StorageError;

/// Write `data` to `path` atomically: write to a sibling `.tmp` file, fsync
/// it, rename over `path`, then fsync the parent directory so the rename is
/// itself durable against a crash.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "state".to_string())
    ));

    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        tmp_file.write_all(data)?;
        tmp_file.sync_all()?;
    }

    fs::rename(&tmp_path, path)?;

    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
