//! Integration tests for netdiag CLI functionality

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("netdiag").expect("Failed to find netdiag binary");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Subnet calculator"))
        .stdout(predicate::str::contains("subnet"))
        .stdout(predicate::str::contains("trace"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_subnet_text_output() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["subnet", "192.168.1.1/24"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analysis for 192.168.1.1/24"))
        .stdout(predicate::str::contains("192.168.1.0"))
        .stdout(predicate::str::contains("192.168.1.255"))
        .stdout(predicate::str::contains("255.255.255.0"))
        .stdout(predicate::str::contains("192.168.1.254"));
}

#[test]
fn test_subnet_json_output() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["subnet", "--json", "10.0.0.0/31"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["cidr"], "10.0.0.0/31");
    assert_eq!(json["total_hosts"], 2);
    assert_eq!(json["usable_hosts"], 0);
    assert_eq!(json["first_usable_host"], "10.0.0.1");
    assert_eq!(json["last_usable_host"], "10.0.0.1");
    assert_eq!(json["broadcast"], "10.0.0.1");
}

#[test]
fn test_subnet_slash_zero_counts() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["subnet", "0.0.0.0/0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4,294,967,296"))
        .stdout(predicate::str::contains("4,294,967,294"));
}

#[test]
fn test_subnet_invalid_format() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["subnet", "192.168.1.1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid CIDR format"));
}

#[test]
fn test_subnet_invalid_prefix() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["subnet", "192.168.1.1/33"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid prefix: must be 0-32"));
}

#[test]
fn test_trace_no_hops_from_stdin() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.arg("trace").write_stdin("1 * * *\n2 * * *\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse any hops"));
}

#[test]
fn test_trace_without_enrichment() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["trace", "--no-enrich"])
        .write_stdin(" 1  192.168.1.1  0.5 ms\n 2  * * *\n 3  8.8.8.8  9.1 ms\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Private/Unknown ASN"))
        .stdout(predicate::str::contains("1: 1  192.168.1.1  0.5 ms"))
        .stdout(predicate::str::contains("2: 3  8.8.8.8  9.1 ms"));
}

#[test]
fn test_trace_json_without_enrichment() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["trace", "--no-enrich", "--json"])
        .write_stdin("1 10.0.0.1\n2 10.0.0.2\n");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = json.as_array().expect("groups array");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["asn"], "Private/Unknown ASN");
    assert_eq!(groups[0]["hops"][1]["ip"], "10.0.0.2");
    assert_eq!(groups[0]["hops"][1]["sequence_index"], 1);
}

#[test]
fn test_trace_reads_file() {
    let path = std::env::temp_dir().join(format!("netdiag-trace-{}.txt", std::process::id()));
    std::fs::write(&path, "1 10.0.0.1 1 ms\n2 * * *\n3 10.0.0.9 4 ms\n").unwrap();

    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["trace", "--no-enrich"]).arg(&path);
    let assert = cmd.assert();
    std::fs::remove_file(&path).ok();

    assert
        .success()
        .stdout(predicate::str::contains("1: 1 10.0.0.1 1 ms"))
        .stdout(predicate::str::contains("2: 3 10.0.0.9 4 ms"));
}

#[test]
fn test_trace_missing_file() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["trace", "--no-enrich", "/definitely/not/here.txt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not read"));
}

#[test]
fn test_invalid_provider() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["lookup", "8.8.8.8", "--provider", "whois"]);

    cmd.assert().failure();
}

#[test]
fn test_cymru_rejects_hostname() {
    let mut cmd = Command::cargo_bin("netdiag").unwrap();
    cmd.args(["lookup", "example.com", "--provider", "cymru"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not an IPv4 address"));
}
