//! Integration tests for the gradesplit binary

use super::test_utils::{child_dirs, make_assignment, write_roster};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn gradesplit(cwd: &Path, args: &[&str]) -> Output {
    let isolated = cwd.join("xdg");
    fs::create_dir_all(&isolated).unwrap();
    Command::new(env!("CARGO_BIN_EXE_gradesplit"))
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", &isolated)
        .env_remove("GRADESPLIT_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_split_with_default_roster_csv() {
    let temp_dir = TempDir::new().unwrap();
    make_assignment(temp_dir.path(), "P6", &["amy-1", "bob-2", "cat-3", "dan-4"]);
    write_roster(
        &temp_dir.path().join("tas.csv"),
        &[("Ann", "ann01", "1"), ("Bo", "bo01", "1")],
    );

    let output = gradesplit(temp_dir.path(), &["--quiet", "split", "P6", "--files", "Main.java"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let dist = temp_dir.path().join("P6").join("dist");
    assert_eq!(child_dirs(&dist), vec!["Ann", "Bo"]);
    let report = fs::read_to_string(temp_dir.path().join("P6").join("dist.txt")).unwrap();
    assert_eq!(report.matches("======").count(), 4);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Report written to"));
}

#[test]
fn test_split_without_selection_fails() {
    let temp_dir = TempDir::new().unwrap();
    make_assignment(temp_dir.path(), "P6", &["amy-1"]);
    write_roster(&temp_dir.path().join("tas.csv"), &[("Ann", "ann01", "1")]);

    let output = gradesplit(temp_dir.path(), &["--quiet", "split", "P6"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing will happen"));
    assert!(!temp_dir.path().join("P6").join("dist").exists());
}

#[test]
fn test_plan_json_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    make_assignment(temp_dir.path(), "P6", &["amy-1", "bob-2", "cat-3"]);
    write_roster(
        &temp_dir.path().join("tas.csv"),
        &[("Ann", "ann01", "1"), ("Bo", "bo01", "1"), ("Cy", "cy01", "2")],
    );

    let first = gradesplit(temp_dir.path(), &["--quiet", "plan", "P6", "--format", "json"]);
    let second = gradesplit(temp_dir.path(), &["--quiet", "plan", "P6", "--format", "json"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let value: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(value["plan"]["identifier"], "P6");
    assert_eq!(value["plan"]["total"], 3);
    assert!(!temp_dir.path().join("P6").join("dist").exists());
}

#[test]
fn test_duplicate_grader_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    make_assignment(temp_dir.path(), "P6", &["amy-1"]);
    write_roster(
        &temp_dir.path().join("tas.csv"),
        &[("Ann", "ann01", "1"), ("Ann", "ann02", "2")],
    );

    let output = gradesplit(temp_dir.path(), &["--quiet", "plan", "P6"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate grader name: Ann"));
}

#[test]
fn test_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    make_assignment(temp_dir.path(), "P6", &["amy-1"]);
    write_roster(&temp_dir.path().join("tas.csv"), &[("Ann", "ann01", "1")]);

    let output = gradesplit(
        temp_dir.path(),
        &["--log-format", "json", "plan", "P6", "--format", "json"],
    );
    assert!(output.status.success());
    // stdout is the plan alone
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plan"]["total"], 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Assignment plan computed"));
}
