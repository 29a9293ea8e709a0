//! Integration tests for `payord rules`.
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

fn rules(args: &[&str]) -> Output {
    Command::new(payord_bin())
        .arg("rules")
        .args(args)
        .output()
        .expect("run payord rules")
}

#[test]
fn prints_both_schemas_by_default() {
    let out = rules(&[]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("budget_payment ("), "stdout: {stdout}");
    assert!(stdout.contains("commercial_payment ("), "stdout: {stdout}");
}

#[test]
fn budget_plan_starts_with_account_rules() {
    let out = rules(&["--schema", "budget", "-f", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let lines: Vec<serde_json::Value> = String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("NDJSON line"))
        .collect();
    assert_eq!(lines[0]["rule"], "payer-account-bic");
    assert_eq!(lines[0]["fields"][0], "payer_account");
    assert!(lines.iter().all(|l| l["schema"] == "budget_payment"));
    assert!(lines.iter().any(|l| l["rule"] == "document-date"));
}

#[test]
fn commercial_plan_omits_budget_rules() {
    let out = rules(&["--schema", "commercial", "-f", "json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    for code in ["\"cbc\"", "\"tax-period\"", "\"payer-kpp\"", "\"payer-status\""] {
        assert!(!stdout.contains(code), "{code} should not be wired; stdout: {stdout}");
    }
    assert!(stdout.contains("\"payee-inn\""), "stdout: {stdout}");
}
