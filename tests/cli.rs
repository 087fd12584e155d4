//! CLI Tests
//!
//! Runs the `msgpair` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use msgpair::protocol::ops::{QuoteRequest, QuoteResponse};
use msgpair::protocol::{Decode, Encode, Reply};

fn msgpair() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_msgpair"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    msgpair().args(args).output().unwrap()
}

#[test]
fn test_ops_lists_served_operations() {
    let output = run(&["ops"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "probe\nquote\n");
}

#[test]
fn test_send_order_uses_canned_response() {
    let output = run(&["send", "order", "many"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "price of the bill is 1.95");
}

#[test]
fn test_send_with_custom_canned_response() {
    let output = run(&["send", "--canned", "50", "order", "many"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "price of the bill is 50");
}

#[test]
fn test_send_with_malformed_canned_response_fails() {
    let output = run(&["send", "--canned", "free", "order", "many"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Decode error"), "{}", stderr);
}

#[test]
fn test_send_probe_over_loopback() {
    let output = run(&["send", "probe"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "probe response");
}

#[test]
fn test_send_quote_prints_readable_response() {
    let output = run(&["send", "quote", "many", "3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "3 x many at 50 comes to 150");
}

#[test]
fn test_serve_quote_from_stdin() {
    let request = QuoteRequest::new("many", 2);
    let mut child = msgpair()
        .args(["serve", "quote"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&request.encode()).unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(QuoteResponse::decode(&output.stdout).unwrap(), request.reply());
}

#[test]
fn test_serve_unknown_operation_fails() {
    let mut child = msgpair()
        .args(["serve", "order"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"many").unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("msgpair.toml");
    std::fs::write(&path, "[server]\nmax_request_bytes = 0\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap(), "ops"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error loading config"), "{}", stderr);
}
