#![cfg(feature = "cli")]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const LAPTOP_SCHEMA: &str = r#"{"brand":"string","year":"number","tags":"array"}"#;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "shapeguard-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn shapeguard() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_shapeguard"));
    command
        .env_remove("SHAPEGUARD_SCHEMA_DIR")
        .env_remove("RUST_LOG")
        .arg("--log-level")
        .arg("error");
    command
}

fn check_inline(schema_path: &Path, record: &str) -> Output {
    shapeguard()
        .arg("--format")
        .arg("json")
        .arg("check")
        .arg("--schema")
        .arg(schema_path)
        .arg("--json")
        .arg(record)
        .output()
        .expect("check should run")
}

#[test]
fn valid_record_exits_zero_with_json_verdict() {
    let dir = unique_temp_dir("valid");
    let schema_path = dir.join("laptop.json");
    std::fs::write(&schema_path, LAPTOP_SCHEMA).expect("schema should be writable");

    let output = check_inline(&schema_path, r#"{"brand":"Apple","year":2021,"tags":[]}"#);

    assert!(output.status.success());
    let verdict: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("verdict should be json");
    assert_eq!(verdict.get("valid"), Some(&serde_json::Value::Bool(true)));
    assert_eq!(verdict.get("fields").and_then(|v| v.as_u64()), Some(3));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_record_exits_60() {
    let dir = unique_temp_dir("invalid");
    let schema_path = dir.join("laptop.json");
    std::fs::write(&schema_path, LAPTOP_SCHEMA).expect("schema should be writable");

    for record in [
        r#"{"brand":"Apple","year":2021}"#,
        r#"{"brand":"Apple","year":2021,"tags":[],"model":"Air"}"#,
        r#"{"brand":"Apple","year":"2021","tags":[]}"#,
        r#"{"brand":"Apple","year":2021,"tags":{}}"#,
        r#"{"brand":null,"year":2021,"tags":[]}"#,
    ] {
        let output = check_inline(&schema_path, record);
        assert_eq!(output.status.code(), Some(60), "record {record}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\"valid\":false"), "record {record}");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn record_is_read_from_stdin() {
    let dir = unique_temp_dir("stdin");
    let schema_path = dir.join("laptop.json");
    std::fs::write(&schema_path, LAPTOP_SCHEMA).expect("schema should be writable");

    let mut child = shapeguard()
        .arg("--format")
        .arg("raw")
        .arg("check")
        .arg("--schema")
        .arg(&schema_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("check should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(br#"{"brand":"","year":0,"tags":["x"]}"#)
        .expect("stdin should be writable");
    let output = child.wait_with_output().expect("check should finish");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn named_schema_resolves_from_env_directory() {
    let dir = unique_temp_dir("named");
    std::fs::write(dir.join("laptop.schema.json"), LAPTOP_SCHEMA)
        .expect("schema should be writable");

    let output = shapeguard()
        .env("SHAPEGUARD_SCHEMA_DIR", &dir)
        .arg("--format")
        .arg("pretty")
        .arg("check")
        .arg("--name")
        .arg("laptop")
        .arg("--json")
        .arg(r#"{"brand":"HP","year":2020,"tags":["a",1]}"#)
        .output()
        .expect("check should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("schema=laptop"));
    assert!(stdout.contains("valid=true"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_kind_in_schema_is_reported() {
    let dir = unique_temp_dir("unknown-kind");
    let schema_path = dir.join("bad.json");
    std::fs::write(&schema_path, r#"{"id":"integer"}"#).expect("schema should be writable");

    let output = check_inline(&schema_path, r#"{"id":1}"#);

    assert_eq!(output.status.code(), Some(62));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown kind"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn broken_inputs_exit_apart_from_a_failed_verdict() {
    let dir = unique_temp_dir("exit-codes");
    let good_schema = dir.join("id.json");
    let bad_schema = dir.join("bad.json");
    std::fs::write(&good_schema, r#"{"id":"string"}"#).expect("schema should be writable");
    std::fs::write(&bad_schema, r#"{"id":"integer"}"#).expect("schema should be writable");

    let mismatch = check_inline(&good_schema, r#"{"id":1}"#).status.code();
    let broken_schema = check_inline(&bad_schema, r#"{"id":1}"#).status.code();
    let nested_record = check_inline(&good_schema, r#"{"id":[["a"]]}"#).status.code();
    let not_json = check_inline(&good_schema, "{id").status.code();

    assert_eq!(mismatch, Some(60));
    assert_eq!(broken_schema, Some(62));
    assert_eq!(nested_record, Some(61));
    assert_eq!(not_json, Some(61));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_sibling_schema_is_named_in_the_error() {
    let dir = unique_temp_dir("bad-sibling");
    std::fs::write(dir.join("laptop.schema.json"), LAPTOP_SCHEMA)
        .expect("schema should be writable");
    std::fs::write(dir.join("other.schema.json"), r#"{"id":"integer"}"#)
        .expect("schema should be writable");

    let output = shapeguard()
        .arg("check")
        .arg("--name")
        .arg("laptop")
        .arg("--schema-dir")
        .arg(&dir)
        .arg("--json")
        .arg(r#"{"brand":"HP","year":2020,"tags":[]}"#)
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("other.schema.json"), "{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_prints_json_schema() {
    let dir = unique_temp_dir("export");
    let schema_path = dir.join("laptop.json");
    std::fs::write(&schema_path, LAPTOP_SCHEMA).expect("schema should be writable");

    let output = shapeguard()
        .arg("--format")
        .arg("json")
        .arg("export")
        .arg("--schema")
        .arg(&schema_path)
        .output()
        .expect("export should run");

    assert!(output.status.success());
    let document: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("export should emit json");
    assert_eq!(
        document.get("additionalProperties"),
        Some(&serde_json::Value::Bool(false))
    );
    assert_eq!(
        document.get("required"),
        Some(&serde_json::json!(["brand", "tags", "year"]))
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn list_reports_directory_schemas() {
    let dir = unique_temp_dir("list");
    std::fs::write(dir.join("laptop.schema.json"), LAPTOP_SCHEMA)
        .expect("schema should be writable");
    std::fs::write(dir.join("flag.schema.json"), r#"{"enabled":"boolean"}"#)
        .expect("schema should be writable");
    std::fs::write(dir.join("notes.txt"), "ignored").expect("file should be writable");

    let output = shapeguard()
        .arg("--format")
        .arg("json")
        .arg("list")
        .arg("--schema-dir")
        .arg(&dir)
        .output()
        .expect("list should run");

    assert!(output.status.success());
    let listed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list should emit json");
    let names: Vec<&str> = listed
        .as_array()
        .expect("list should be an array")
        .iter()
        .filter_map(|entry| entry.get("name").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(names, vec!["flag", "laptop"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_reports_package_version() {
    let output = shapeguard()
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("shapeguard {}", env!("CARGO_PKG_VERSION"))
    );
}
