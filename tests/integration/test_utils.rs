//! Shared test utilities for integration tests
//!
//! Scratch assignment directories and XDG isolation for config tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.xdg_config_home {
            std::env::set_var("XDG_CONFIG_HOME", orig);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}

/// Run `f` with XDG_CONFIG_HOME at `<test_dir>/config` and HOME at `<test_dir>/home`
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_home = test_dir.path().join("home");
    fs::create_dir_all(&test_config_home).unwrap();
    fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", &test_config_home);

    let result = f();

    env_state.restore();

    result
}

/// Create `<root>/<name>/raw/<id>/src/Main.java` for each id
pub fn make_assignment(root: &Path, name: &str, ids: &[&str]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(dir.join("raw")).unwrap();
    for id in ids {
        let src = dir.join("raw").join(id).join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("Main.java"), format!("// {}\nclass Main {{}}\n", id)).unwrap();
        fs::write(src.join("notes.txt"), "scratch").unwrap();
    }
    dir
}

/// Write a header-less roster CSV
pub fn write_roster(path: &Path, rows: &[(&str, &str, &str)]) {
    let body: String = rows
        .iter()
        .map(|(name, sid, weight)| format!("{}, {}, {}\n", name, sid, weight))
        .collect();
    fs::write(path, body).unwrap();
}

/// Names of the directories directly under `dir`, sorted
pub fn child_dirs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
