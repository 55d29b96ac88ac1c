//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jsonconf() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jsonconf"));
    cmd.env_remove("JSONCONF_EXIT_CODE");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("json")
}

#[test]
fn test_cli_version() {
    let mut cmd = jsonconf();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("jsonconf"));
}

#[test]
fn test_cli_help() {
    let mut cmd = jsonconf();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("JSON config files"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_show_prints_compact_json() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("test.json");
    fs::write(&path, "{ \"Name\": \"Stuart\",\n  \"Value\": \"Davies\" }").expect("write");

    let mut cmd = jsonconf();
    cmd.args(["show", path.to_str().expect("utf8 path")]);
    cmd.assert().success().stdout("{\"Name\":\"Stuart\",\"Value\":\"Davies\"}\n");
}

#[test]
fn test_show_missing_file_exits_with_default_code() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("nonexistent.json");

    let mut cmd = jsonconf();
    cmd.args(["show", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File: ["))
        .stderr(predicate::str::contains("nonexistent.json"));
}

#[test]
fn test_malformed_file_exits_with_configured_code() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{Name":"Stuart"}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args(["--exit-code", "7", "show", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Json content could not be parsed for file"))
        .stderr(predicate::str::contains("line 1 column 2"));
}

#[test]
fn test_exit_code_from_environment() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("missing.json");

    let mut cmd = jsonconf();
    cmd.env("JSONCONF_EXIT_CODE", "3");
    cmd.args(["get", path.to_str().expect("utf8 path"), "name"]);
    cmd.assert().failure().code(3);
}

#[test]
fn test_get_prints_nested_values() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.json");
    fs::write(&path, r#"{"server":{"host":"db.internal","ports":[5432,5433]}}"#).expect("write");
    let file = path.to_str().expect("utf8 path");

    jsonconf().args(["get", file, "server.host"]).assert().success().stdout("db.internal\n");
    jsonconf().args(["get", file, "server.ports"]).assert().success().stdout("[5432,5433]\n");
}

#[test]
fn test_get_missing_key_fails() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.json");
    fs::write(&path, r#"{"server":{}}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args(["get", path.to_str().expect("utf8 path"), "server.port"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Key 'server.port' not found"));
}

#[test]
fn test_set_keeps_other_keys() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.json");
    fs::write(&path, r#"{"name":"api","server":{"host":"localhost","port":80}}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args(["set", path.to_str().expect("utf8 path"), "server.port", "8080"]);
    cmd.assert().success().stdout(predicate::str::contains("Updated"));

    assert_eq!(
        read_json(&path),
        json!({"name": "api", "server": {"host": "localhost", "port": 8080}})
    );
}

#[test]
fn test_set_create_starts_from_empty_object() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("new.json");

    let mut cmd = jsonconf();
    cmd.args(["set", "--create", "--pretty", path.to_str().expect("utf8 path"), "owner", "ops"]);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&path).expect("read"), "{\n  \"owner\": \"ops\"\n}\n");
}

#[test]
fn test_set_without_create_requires_file() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("new.json");

    let mut cmd = jsonconf();
    cmd.args(["set", path.to_str().expect("utf8 path"), "owner", "ops"]);
    cmd.assert().failure().stderr(predicate::str::contains("File: ["));
    assert!(!path.exists());
}

#[test]
fn test_merge_overlays_in_order() {
    let tmp = TempDir::new().expect("tmp");
    let base = tmp.path().join("base.json");
    let first = tmp.path().join("first.json");
    let second = tmp.path().join("second.json");
    let out = tmp.path().join("out.json");
    fs::write(&base, r#"{"log":{"level":"info","format":"text"},"workers":2}"#).expect("write");
    fs::write(&first, r#"{"log":{"level":"debug"},"workers":4}"#).expect("write");
    fs::write(&second, r#"{"workers":8,"extra":true}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args([
        "merge",
        base.to_str().expect("utf8 path"),
        first.to_str().expect("utf8 path"),
        second.to_str().expect("utf8 path"),
        "--output",
        out.to_str().expect("utf8 path"),
    ]);
    cmd.assert().success().stdout(predicate::str::contains("Merged 2 file(s)"));

    assert_eq!(
        read_json(&out),
        json!({"log": {"level": "debug", "format": "text"}, "workers": 8, "extra": true})
    );
    // Base file untouched when --output is given
    assert_eq!(read_json(&base)["workers"], json!(2));
}

#[test]
fn test_check_reports_absolute_path() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.json");
    fs::write(&path, r#"{"server":{"port":80}}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args(["check", path.to_str().expect("utf8 path"), "--require", "server.port"]);
    cmd.assert().success().stdout(predicate::str::starts_with("OK: /"));
}

#[test]
fn test_check_missing_required_key_fails() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.json");
    fs::write(&path, r#"{"server":{"port":80}}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args(["check", path.to_str().expect("utf8 path"), "-r", "server.host", "-r", "name"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required key(s): server.host, name"));
}

#[test]
fn test_check_rejects_non_object_document() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("list.json");
    fs::write(&path, "[1, 2, 3]").expect("write");

    let mut cmd = jsonconf();
    cmd.args(["--exit-code", "9", "check", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("top-level value must be a JSON object"));
}

#[test]
fn test_check_rejects_malformed_required_key() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.json");
    fs::write(&path, r#"{"a":{"b":1}}"#).expect("write");

    let mut cmd = jsonconf();
    cmd.args(["check", path.to_str().expect("utf8 path"), "--require", "a..b"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid key path 'a..b'"))
        .stderr(predicate::str::contains("missing required key").not());
}

#[test]
fn test_set_into_non_object_document_fails() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("list.json");
    fs::write(&path, "[1]").expect("write");

    let mut cmd = jsonconf();
    cmd.args(["set", path.to_str().expect("utf8 path"), "name", "x"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("top-level value is not an object"));
    assert_eq!(read_json(&path), json!([1]));
}
