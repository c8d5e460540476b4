// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn parses_minimal_result() {
    let json = br#"{"success": true, "stdout": "hi", "stderr": "", "exit_code": 0}"#;
    let result = RemoteResult::parse(json).unwrap();
    assert!(result.success);
    assert_eq!(result.stdout, "hi");
    assert_eq!(result.exit_code, 0);
    assert!(!result.truncated);
}

#[test]
fn defaults_missing_optional_fields() {
    let json = br#"{"success": false, "exit_code": 1}"#;
    let result = RemoteResult::parse(json).unwrap();
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "");
    assert!(!result.truncated);
}

#[test]
fn preserves_truncated_flag() {
    let json = br#"{"success": true, "stdout": "partial", "exit_code": 0, "truncated": true}"#;
    let result = RemoteResult::parse(json).unwrap();
    assert!(result.truncated);
}

#[test]
fn rejects_malformed_json() {
    let err = RemoteResult::parse(b"not json").unwrap_err();
    let _ = err.to_string();
}
