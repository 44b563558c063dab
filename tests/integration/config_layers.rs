//! Integration tests for layered configuration

use super::test_utils::{make_assignment, with_xdg_env};
use gradesplit::config::{ConfigLoader, ASSIGNMENT_CONFIG_FILE};
use gradesplit::error::ApiError;
use gradesplit::plan::ZeroWeightPolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_global_roster_with_assignment_override() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let global = test_dir.path().join("config").join("gradesplit");
        fs::create_dir_all(&global).unwrap();
        fs::write(
            global.join("config.toml"),
            r#"
[[roster.graders]]
name = "Ann"
weight = 1

[[roster.graders]]
name = "Bo"
weight = 3

[grouping]
exceptions = ["-student", "^guest"]
"#,
        )
        .unwrap();

        let dir = make_assignment(test_dir.path(), "P6", &["amy-1"]);
        fs::write(
            dir.join(ASSIGNMENT_CONFIG_FILE),
            "[roster]\nzero_weight = \"eligible\"\n\n[layout]\ndist_dir = \"handout\"\n",
        )
        .unwrap();

        let config = ConfigLoader::resolve(&dir, None).unwrap();
        assert_eq!(config.roster.graders.len(), 2);
        assert_eq!(config.roster.zero_weight, ZeroWeightPolicy::Eligible);
        assert_eq!(config.layout.dist_dir, "handout");
        assert_eq!(config.grouping.exceptions.len(), 2);
    });
}

#[test]
fn test_explicit_config_skips_other_layers() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let dir = make_assignment(test_dir.path(), "P6", &["amy-1"]);
        fs::write(
            dir.join(ASSIGNMENT_CONFIG_FILE),
            "[layout]\ndist_dir = \"handout\"\n",
        )
        .unwrap();
        let explicit = test_dir.path().join("explicit.toml");
        fs::write(&explicit, "[layout]\nreport_file = \"who.txt\"\n").unwrap();

        let config = ConfigLoader::resolve(&dir, Some(&explicit)).unwrap();
        assert_eq!(config.layout.dist_dir, "dist");
        assert_eq!(config.layout.report_file, "who.txt");
    });
}

#[test]
fn test_invalid_config_is_rejected() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let dir = make_assignment(test_dir.path(), "P6", &[]);
        fs::write(
            dir.join(ASSIGNMENT_CONFIG_FILE),
            "[grouping]\ndelimiters = []\nexceptions = [\"(\"]\n",
        )
        .unwrap();

        let err = ConfigLoader::resolve(&dir, None).unwrap_err();
        match err {
            ApiError::ConfigError(msg) => {
                assert!(msg.contains("at least one delimiter"));
                assert!(msg.contains("invalid exception pattern"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    });
}
