//! Integration tests for the split workflow on disk

use super::test_utils::{child_dirs, make_assignment, write_roster};
use gradesplit::config::SplitConfig;
use gradesplit::distribute::Selection;
use gradesplit::error::ApiError;
use gradesplit::roster::GraderEntry;
use gradesplit::split::{SplitCommandService, SplitRequest};
use std::fs;
use tempfile::TempDir;

fn inline_config(graders: &[(&str, f64)]) -> SplitConfig {
    let mut config = SplitConfig::default();
    config.roster.graders = graders
        .iter()
        .map(|(name, weight)| GraderEntry::new(*name, *weight))
        .collect();
    config
}

fn request_for(dir: &std::path::Path, identifier: &str) -> SplitRequest {
    let mut request = SplitRequest::new(dir.to_string_lossy().into_owned());
    request.identifier = identifier.to_string();
    request
}

/// Every submission lands in exactly one grader directory
#[test]
fn test_every_submission_delivered_once() {
    let temp_dir = TempDir::new().unwrap();
    let ids = ["amy-1", "bob-2", "cat-3", "dan-4", "eve-5", "fay-6", "gus-7"];
    let dir = make_assignment(temp_dir.path(), "P6", &ids);
    let config = inline_config(&[("Ann", 1.0), ("Bo", 1.0), ("Cy", 2.0)]);
    let mut request = request_for(&dir, "P6");
    request.selection = Selection::new(&["Main.java"], &[], &[], &[]);

    SplitCommandService::split(&request, &config).unwrap();

    let dist = dir.join("dist");
    assert_eq!(child_dirs(&dist), vec!["Ann", "Bo", "Cy"]);
    let mut delivered: Vec<String> = Vec::new();
    for grader in child_dirs(&dist) {
        for key in child_dirs(&dist.join(&grader)) {
            assert!(dist.join(&grader).join(&key).join("Main.java").is_file());
            delivered.push(key);
        }
    }
    delivered.sort();
    assert_eq!(delivered, vec!["amy", "bob", "cat", "dan", "eve", "fay", "gus"]);
}

/// Rerunning reproduces the same distribution and report
#[test]
fn test_rerun_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let ids = ["amy-1", "bob-2", "cat-3", "dan-4", "eve-5"];
    let dir = make_assignment(temp_dir.path(), "P6", &ids);
    let config = inline_config(&[("Ann", 1.0), ("Bo", 2.0)]);
    let mut request = request_for(&dir, "P6");
    request.selection = Selection::new(&[], &["src"], &[], &[".java"]);

    SplitCommandService::split(&request, &config).unwrap();
    let first = fs::read_to_string(dir.join("dist.txt")).unwrap();
    SplitCommandService::split(&request, &config).unwrap();
    let second = fs::read_to_string(dir.join("dist.txt")).unwrap();

    assert_eq!(first, second);
    // The extension filter keeps notes.txt out.
    for grader in child_dirs(&dir.join("dist")) {
        for key in child_dirs(&dir.join("dist").join(&grader)) {
            let copied = dir.join("dist").join(&grader).join(&key);
            assert!(copied.join("Main.java").is_file());
            assert!(!copied.join("notes.txt").exists());
        }
    }
}

/// CSV sids exclude the graders' own submissions
#[test]
fn test_csv_roster_excludes_grader_submissions() {
    let temp_dir = TempDir::new().unwrap();
    let dir = make_assignment(
        temp_dir.path(),
        "P7",
        &["amy-1", "ann01-2", "bob-3", "psadeghi-student-4"],
    );
    let csv = temp_dir.path().join("tas.csv");
    write_roster(&csv, &[("Ann", "ann01", "1"), ("Bo", "bo01", "1"), ("Zed", "zed01", "0")]);

    let mut request = request_for(&dir, "P7");
    request.csv = Some(csv);
    request.exclude_sids = vec!["psadeghi-student-4".to_string()];
    request.selection = Selection::new(&["Main.java"], &[], &[], &[]);

    let outcome = SplitCommandService::split(&request, &SplitConfig::default()).unwrap();
    assert_eq!(outcome.planned.plan.total(), 2);
    assert_eq!(outcome.planned.excluded.len(), 2);
    assert_eq!(child_dirs(&dir.join("dist")), vec!["Ann", "Bo"]);
}

/// Planning failures leave an existing dist/ untouched
#[test]
fn test_failed_plan_leaves_dist_alone() {
    let temp_dir = TempDir::new().unwrap();
    let dir = make_assignment(temp_dir.path(), "P8", &["amy-1"]);
    fs::create_dir_all(dir.join("dist").join("Previous")).unwrap();

    let mut request = request_for(&dir, "P8");
    request.selection = Selection::new(&["Main.java"], &[], &[], &[]);
    let config = inline_config(&[("Ann", 0.0)]);

    let err = SplitCommandService::split(&request, &config).unwrap_err();
    assert!(matches!(err, ApiError::Roster(_)));
    assert!(dir.join("dist").join("Previous").is_dir());
}
