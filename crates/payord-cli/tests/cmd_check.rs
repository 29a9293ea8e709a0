//! Integration tests for `payord check`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `payord` binary.
fn payord_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("payord");
    path
}

fn check(args: &[&str]) -> Output {
    Command::new(payord_bin())
        .arg("check")
        .args(args)
        .output()
        .expect("run payord check")
}

#[test]
fn valid_inn_prints_normalized_value() {
    let out = check(&["inn", " 7707083893 "]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "7707083893\n");
}

#[test]
fn snils_separators_are_removed() {
    let out = check(&["snils", "112-233-445 95"]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "11223344595\n");
}

#[test]
fn blank_sentinel_prints_nothing() {
    let out = check(&["uin", "0"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_checksum_exits_1() {
    let out = check(&["inn", "7707083894"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[E] inn: control digit mismatch"), "stderr: {stderr}");
}

#[test]
fn json_success_object() {
    let out = check(&["--format", "json", "bic", "044525225"]);
    assert_eq!(out.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON object");
    assert_eq!(parsed["identifier"], "bic");
    assert_eq!(parsed["value"], "044525225");
    assert_eq!(parsed["valid"], true);
}

#[test]
fn json_failure_object_on_stderr() {
    let out = check(&["-f", "json", "account", "4070281093800000000"]);
    assert_eq!(out.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&out.stderr).expect("JSON object");
    assert_eq!(parsed["identifier"], "account");
    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["violation"]["kind"], "invalid_length");
    assert_eq!(parsed["violation"]["actual"], 19);
}

#[test]
fn unknown_kind_is_a_usage_error() {
    let out = check(&["iban", "DE89370400440532013000"]);
    assert_eq!(out.status.code(), Some(2));
}
