// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn resolver() -> PathResolver {
    PathResolver::new("/Users/alice/GDrive", "/Users/alice")
}

#[test]
fn to_remote_rewrites_mount_base_prefix() {
    let r = resolver();
    assert_eq!(r.to_remote("/Users/alice/GDrive/proj"), "~/proj");
}

#[test]
fn to_remote_rewrites_home_exact_match() {
    let r = resolver();
    assert_eq!(r.to_remote("/Users/alice"), "~");
}

#[test]
fn to_remote_rewrites_home_prefix() {
    let r = resolver();
    assert_eq!(r.to_remote("/Users/alice/notes"), "~/notes");
}

#[test]
fn to_remote_does_not_rewrite_false_prefix_match() {
    let r = resolver();
    // "/Users/aliceX" is not under "/Users/alice" (no separator boundary).
    assert_eq!(r.to_remote("/Users/aliceX/file"), "/Users/aliceX/file");
}

#[test]
fn to_remote_passes_through_unrelated_paths() {
    let r = resolver();
    assert_eq!(r.to_remote("/etc/hosts"), "/etc/hosts");
    assert_eq!(r.to_remote("relative/path"), "relative/path");
}

#[test]
fn to_local_is_inverse_of_to_remote_for_mount_paths() {
    let r = resolver();
    let local = "/Users/alice/GDrive/proj/file.txt";
    let remote = r.to_remote(local);
    assert_eq!(remote, "~/proj/file.txt");
    assert_eq!(r.to_local(&remote), local);
}

#[test]
fn to_local_resolves_bare_tilde() {
    let r = resolver();
    assert_eq!(r.to_local("~"), "/Users/alice/GDrive");
}

#[test]
fn to_local_passes_through_non_tilde_paths() {
    let r = resolver();
    assert_eq!(r.to_local("/already/local"), "/already/local");
}

#[test]
fn split_tokens_handles_plain_whitespace() {
    assert_eq!(
        split_tokens("echo hello world"),
        vec!["echo", "hello", "world"]
    );
}

#[test]
fn split_tokens_preserves_double_quoted_segment_with_spaces() {
    assert_eq!(
        split_tokens(r#"echo "hello world""#),
        vec!["echo", "hello world"]
    );
}

#[test]
fn split_tokens_preserves_single_quoted_segment() {
    assert_eq!(
        split_tokens("cat 'my file.txt'"),
        vec!["cat", "my file.txt"]
    );
}

#[test]
fn split_tokens_handles_escaped_space() {
    assert_eq!(split_tokens(r"cat my\ file.txt"), vec!["cat", "my file.txt"]);
}

#[test]
fn split_tokens_collapses_repeated_whitespace() {
    assert_eq!(split_tokens("a    b\t\tc"), vec!["a", "b", "c"]);
}

#[test]
fn split_tokens_empty_line_yields_no_tokens() {
    assert_eq!(split_tokens(""), Vec::<String>::new());
    assert_eq!(split_tokens("   "), Vec::<String>::new());
}

#[test]
fn split_tokens_unterminated_quote_keeps_contents() {
    assert_eq!(split_tokens(r#"echo "unterminated"#), vec!["echo", "unterminated"]);
}
