use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("caporal-check").unwrap();
    cmd.env_remove("CAPORAL_LOG").env_remove("CAPORAL_PROGRAM");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn coerces_typed_values() {
    let output = cmd()
        .args(["--type", "int|array", "1,2,3", "-4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        json_lines(&output.stdout),
        vec![
            json!({ "input": "1,2,3", "value": [1, 2, 3] }),
            json!({ "input": "-4", "value": [-4] }),
        ]
    );
}

#[test]
fn rejected_value_exits_with_one() {
    let output = cmd()
        .args(["--type", "bool", "yes", "maybe"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let lines = json_lines(&output.stdout);
    assert_eq!(lines[0], json!({ "input": "yes", "value": true }));
    assert!(
        lines[1]["error"]
            .as_str()
            .unwrap()
            .contains("Type (BOOL) validation failed")
    );
}

#[test]
fn pattern_validator() {
    cmd()
        .args(["--pattern", "^[a-z]+$", "--program", "demo", "abc", "ABC"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""value":"abc""#))
        .stdout(predicate::str::contains("[demo] RegExp validation failed"));
}

#[test]
fn json_spec() {
    cmd()
        .args(["--spec", r#"{"type": ["float"]}"#, "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""value":2.5"#));
}

#[test]
fn infinite_floats_keep_their_value() {
    let output = cmd()
        .args(["--type", "float", "Infinity", "1e400", "-Infinity"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        json_lines(&output.stdout),
        vec![
            json!({ "input": "Infinity", "value": "Infinity" }),
            json!({ "input": "1e400", "value": "Infinity" }),
            json!({ "input": "-Infinity", "value": "-Infinity" }),
        ]
    );
}

#[test]
fn invalid_json_spec_is_a_config_error() {
    cmd()
        .args(["--spec", r#"{"regex": "x"}"#, "v"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid --spec validator config"));
}

#[test]
fn mask_without_known_flags_is_fatal() {
    cmd()
        .args(["--mask", "64", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid flag validator setup"));
}

#[test]
fn malformed_pattern_is_fatal() {
    cmd()
        .args(["--pattern", "(", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid validator setup"));
}

#[test]
fn unknown_flag_name_is_a_usage_error() {
    cmd()
        .args(["--type", "string", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown type flag 'string'"));
}

#[test]
fn exactly_one_validator_is_required() {
    cmd().args(["x"]).assert().code(2);
    cmd()
        .args(["--type", "int", "--pattern", "x", "1"])
        .assert()
        .code(2);
}
