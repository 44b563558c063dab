//! Global config file source: $XDG_CONFIG_HOME/gradesplit/config.toml or ~/.config/gradesplit/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::BaseDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("gradesplit").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(xdg_config_path) = global_config_path() {
        if xdg_config_path.exists() {
            let canonical_xdg_path = xdg_config_path
                .canonicalize()
                .unwrap_or_else(|_| xdg_config_path.clone());
            builder = builder.add_source(File::from(canonical_xdg_path.as_path()).required(false));
        } else {
            debug!(
                config_path = %xdg_config_path.display(),
                "No global configuration file"
            );
        }
    }
    Ok(builder)
}
