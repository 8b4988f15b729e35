//! Exit status and stream routing of the built `caxcli` binary.

use std::process::{Command, Output};

fn caxcli(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_caxcli"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn missing_config_file_exits_1_with_nothing_on_stdout() {
    let dir = tempfile::tempdir().unwrap();

    let output = caxcli(&dir, &["list", "--orders"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration file not found: .caxcli"));
}

#[test]
fn config_without_api_key_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".caxcli"), "[api]\n").unwrap();

    let output = caxcli(&dir, &["depth", "ntn-usd"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn usage_error_exits_2() {
    let dir = tempfile::tempdir().unwrap();

    let output = caxcli(&dir, &["depth"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
