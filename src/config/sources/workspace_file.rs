//! Assignment config file source: <assignment>/gradesplit.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

pub const ASSIGNMENT_CONFIG_FILE: &str = "gradesplit.toml";

pub fn assignment_config_path(assignment_dir: &Path) -> PathBuf {
    assignment_dir.join(ASSIGNMENT_CONFIG_FILE)
}

/// Add the assignment's config file to builder; it overrides the global file.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    assignment_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = assignment_config_path(assignment_dir);
    if path.exists() {
        return Ok(builder.add_source(File::from(path.as_path()).required(false)));
    }
    Ok(builder)
}
