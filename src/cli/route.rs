//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, SelectionArgs, TargetArgs};
use crate::cli::presentation::{
    format_plan_json, format_plan_text, format_split_json, format_split_text,
};
use crate::config::{ConfigLoader, SplitConfig};
use crate::distribute::Selection;
use crate::error::ApiError;
use crate::split::{SplitCommandService, SplitRequest};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: the optional explicit config path.
/// Configuration itself is resolved per command from the assignment directory.
pub struct RunContext {
    config_path: Option<PathBuf>,
}

impl RunContext {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, "Command started");
        let result = self.execute_inner(command);
        info!(
            command = name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Plan { target } => {
                let config = self.load_config(target)?;
                let request = build_request(target, None, false);
                let outcome = SplitCommandService::plan(&request, &config)?;
                match target.format.as_str() {
                    "json" => format_plan_json(&outcome),
                    _ => Ok(format_plan_text(&outcome)),
                }
            }
            Commands::Split {
                target,
                selection,
                dry_run,
            } => {
                let config = self.load_config(target)?;
                let request = build_request(target, Some(selection), *dry_run);
                let outcome = SplitCommandService::split(&request, &config)?;
                match target.format.as_str() {
                    "json" => format_split_json(&outcome),
                    _ => Ok(format_split_text(&outcome)),
                }
            }
        }
    }

    fn load_config(&self, target: &TargetArgs) -> Result<SplitConfig, ApiError> {
        if target.format != "text" && target.format != "json" {
            return Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                target.format
            )));
        }
        ConfigLoader::resolve(
            Path::new(&target.assignment_dir),
            self.config_path.as_deref(),
        )
    }
}

fn build_request(
    target: &TargetArgs,
    selection: Option<&SelectionArgs>,
    dry_run: bool,
) -> SplitRequest {
    let mut request = SplitRequest::new(target.assignment_dir.clone());
    request.csv = target.csv.clone();
    request.exclude_sids = target.exclude_sids.clone();
    request.legacy = target.legacy;
    request.dry_run = dry_run;
    if let Some(selection) = selection {
        request.selection = Selection::new(
            &selection.files,
            &selection.folders,
            &selection.folder_with,
            &selection.extensions,
        );
    }
    request
}
