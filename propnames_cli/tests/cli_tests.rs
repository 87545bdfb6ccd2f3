#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::fs;
use std::process::Command;

fn propnames() -> Command {
    Command::new(env!("CARGO_BIN_EXE_propnames"))
}

#[test]
fn test_no_arguments_aborts_with_usage() {
    let output = propnames().output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage:"));
    assert!(stderr.contains("property-name input-directory"));
}

#[test]
fn test_one_argument_aborts_with_usage() {
    let output = propnames().arg("sc").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
}

#[test]
fn test_three_arguments_abort_with_usage() {
    let output = propnames().args(["sc", "ucd", "extra"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
}

#[test]
fn test_missing_table_fails_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let output = propnames()
        .args(["sc", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PropertyValueAliases.txt"));
}

#[test]
fn test_generates_statements_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("PropertyValueAliases.txt"),
        "gc ; Lu ; Uppercase_Letter\nsc ; Latn ; Latin\nsc ; n/a ; Common\n",
    )
    .unwrap();

    let output = propnames()
        .args(["sc", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "names_[L\"Latn\"] = names_[L\"Latin\"] = LATIN;\n\
         names_[L\"Common\"] = COMMON;\n"
    );
}

#[test]
fn test_accepts_directory_with_trailing_separator() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("PropertyValueAliases.txt"),
        "sc ; Latn ; Latin\n",
    )
    .unwrap();

    let mut with_separator = dir.path().to_str().unwrap().to_string();
    with_separator.push('/');
    let output = propnames().args(["sc", &with_separator]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "names_[L\"Latn\"] = names_[L\"Latin\"] = LATIN;\n"
    );
}
