//! Integration tests for `payord validate`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `payord` binary.
fn payord_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like …/deps/cmd_validate-<hash>
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("payord");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn validate(args: &[&str], name: &str) -> Output {
    let file = fixture(name);
    let mut cmd = Command::new(payord_bin());
    cmd.env_remove("PAYORD_LOG")
        .arg("validate")
        .args(args)
        .arg(file.to_str().expect("path"));
    cmd.output().expect("run payord validate")
}

fn json_lines(bytes: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("NDJSON line"))
        .collect()
}

// ---------------------------------------------------------------------------
// validate: valid orders (exit 0)
// ---------------------------------------------------------------------------

#[test]
fn valid_fixtures_exit_0() {
    for name in [
        "fns-unified-tax.json",
        "customs-advance.json",
        "state-fee.json",
        "supplier-invoice.json",
        "ip-invoice.json",
        "salary.json",
    ] {
        let out = validate(&[], name);
        assert_eq!(
            out.status.code(),
            Some(0),
            "expected exit 0 for {name}; stderr: {}",
            String::from_utf8_lossy(&out.stderr)
        );
    }
}

#[test]
fn valid_order_prints_normalized_record_on_stdout() {
    let out = validate(&[], "fns-unified-tax.json");
    let record: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is one JSON object");
    assert_eq!(record["payment_type"], "fns");
    assert_eq!(record["priority"], 5);
    // "0" placeholders come back as null.
    assert!(record["uin"].is_null(), "uin: {}", record["uin"]);
}

#[test]
fn valid_order_summary_on_stderr() {
    let out = validate(&[], "supplier-invoice.json");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("0 violations"), "stderr: {stderr}");
}

#[test]
fn quiet_valid_order_has_empty_stderr() {
    let out = validate(&["--quiet"], "supplier-invoice.json");
    assert_eq!(out.status.code(), Some(0));
    assert!(
        out.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn verbose_reports_timing() {
    let out = validate(&["--verbose"], "supplier-invoice.json");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("validated in"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// validate: rejected orders (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn wrong_tax_account_exits_1_with_two_violations() {
    let out = validate(&["--format", "json"], "fns-wrong-account.json");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "rejected orders print nothing on stdout");

    let lines = json_lines(&out.stderr);
    let violations: Vec<_> = lines.iter().filter(|v| v.get("field").is_some()).collect();
    assert_eq!(violations.len(), 2, "stderr lines: {lines:?}");
    assert!(violations.iter().all(|v| v["field"] == "payee_account"));

    let summary = lines.last().expect("summary line");
    assert_eq!(summary["summary"]["violations"], 2);
}

#[test]
fn status_13_without_inn_requires_uin() {
    let out = validate(&["-f", "json"], "fns-status-13-no-uin.json");
    assert_eq!(out.status.code(), Some(1));
    let lines = json_lines(&out.stderr);
    assert!(
        lines
            .iter()
            .any(|v| v["field"] == "uin" && v["kind"] == "required" && v["rule"] == "uin"),
        "stderr lines: {lines:?}"
    );
}

#[test]
fn ip_payee_without_vat_mention_is_rejected() {
    let out = validate(&["-f", "json"], "ip-missing-vat.json");
    assert_eq!(out.status.code(), Some(1));
    let lines = json_lines(&out.stderr);
    let first = lines.first().expect("one violation");
    assert_eq!(first["field"], "purpose");
    assert_eq!(first["kind"], "missing_vat");
}

#[test]
fn human_violation_lines_are_tagged() {
    let out = validate(&["--no-color"], "ip-missing-vat.json");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[E] purpose purpose:"), "stderr: {stderr}");
    assert!(stderr.contains("1 violation"), "stderr: {stderr}");
    assert!(
        !stderr.contains("error:"),
        "violations are not repeated as an error line; stderr: {stderr}"
    );
}

#[test]
fn forced_budget_schema_accepts_commercial_order() {
    let out = validate(&["--schema", "budget", "-f", "json"], "supplier-invoice.json");
    assert_eq!(
        out.status.code(),
        Some(0),
        "commercial types accept blank budget fields; stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn forced_commercial_schema_rejects_budget_fields() {
    let out = validate(&["--schema", "commercial", "-f", "json"], "fns-unified-tax.json");
    assert_eq!(out.status.code(), Some(1));
    let lines = json_lines(&out.stderr);
    assert!(
        lines
            .iter()
            .any(|v| v["field"] == "cbc" && v["kind"] == "undeclared"),
        "stderr lines: {lines:?}"
    );
}

// ---------------------------------------------------------------------------
// validate: stdin
// ---------------------------------------------------------------------------

#[test]
fn reads_order_from_stdin() {
    let content = std::fs::read(fixture("supplier-invoice.json")).expect("read fixture");
    let mut child = Command::new(payord_bin())
        .args(["validate", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn payord");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(&content)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

// ---------------------------------------------------------------------------
// validate: input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn missing_file_exits_2() {
    let out = Command::new(payord_bin())
        .args(["validate", "/no/such/order.json"])
        .output()
        .expect("run payord validate");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn malformed_json_exits_2() {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(b"{\"payment_type\": ").expect("write");
    let out = Command::new(payord_bin())
        .args(["validate", f.path().to_str().expect("path")])
        .output()
        .expect("run payord validate");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not a payment order"), "stderr: {stderr}");
    assert!(stderr.contains("line 1"), "stderr: {stderr}");
}

#[test]
fn unknown_field_exits_2() {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(br#"{"swift": "SABRRUMM"}"#).expect("write");
    let out = Command::new(payord_bin())
        .args(["validate", f.path().to_str().expect("path")])
        .output()
        .expect("run payord validate");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn oversized_file_exits_2() {
    let out = Command::new(payord_bin())
        .args([
            "validate",
            "--max-file-size",
            "16",
            fixture("supplier-invoice.json").to_str().expect("path"),
        ])
        .output()
        .expect("run payord validate");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}

#[test]
fn max_file_size_from_env() {
    let out = Command::new(payord_bin())
        .env("PAYORD_MAX_FILE_SIZE", "16")
        .args([
            "validate",
            fixture("supplier-invoice.json").to_str().expect("path"),
        ])
        .output()
        .expect("run payord validate");
    assert_eq!(out.status.code(), Some(2));
}
