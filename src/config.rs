//! Configuration System
//!
//! Layered TOML configuration: built-in defaults, then the global file, then
//! the assignment's own `gradesplit.toml`. An explicit file replaces the
//! global and assignment layers.

use crate::distribute::Selection;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::plan::{PlannerOptions, ZeroWeightPolicy};
use crate::roster::GraderEntry;
use crate::submission::GroupingRules;
use config::File;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use sources::workspace_file::ASSIGNMENT_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitConfig {
    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub grouping: GroupingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    /// Only read with `--legacy`
    #[serde(default)]
    pub legacy: LegacyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where graders come from and how standby graders are treated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Header-less `name, sid, weight` CSV; wins over inline graders
    #[serde(default)]
    pub csv: Option<PathBuf>,

    #[serde(default)]
    pub zero_weight: ZeroWeightPolicy,

    #[serde(default)]
    pub graders: Vec<GraderEntry>,
}

impl RosterConfig {
    pub fn planner_options(&self) -> PlannerOptions {
        PlannerOptions {
            zero_weight: self.zero_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Single-character delimiters
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<String>,

    /// Regexes; a matching identifier is its own group key
    #[serde(default = "default_exceptions")]
    pub exceptions: Vec<String>,
}

fn default_delimiters() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_exceptions() -> Vec<String> {
    vec!["-student".to_string()]
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            exceptions: default_exceptions(),
        }
    }
}

impl GroupingConfig {
    pub fn rules(&self) -> Result<GroupingRules, ApiError> {
        let mut delimiters = Vec::with_capacity(self.delimiters.len());
        for d in &self.delimiters {
            delimiters.push(single_char(d).ok_or_else(|| {
                ApiError::ConfigError(format!(
                    "Grouping delimiter '{}' must be a single character",
                    d
                ))
            })?);
        }
        GroupingRules::new(&delimiters, &self.exceptions)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Directory and file names inside an assignment directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_raw_dir")]
    pub raw_dir: String,

    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_raw_dir() -> String {
    "raw".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_report_file() -> String {
    "dist.txt".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            dist_dir: default_dist_dir(),
            report_file: default_report_file(),
        }
    }
}

impl LayoutConfig {
    pub fn raw_path(&self, assignment_dir: &Path) -> PathBuf {
        assignment_dir.join(&self.raw_dir)
    }

    pub fn dist_path(&self, assignment_dir: &Path) -> PathBuf {
        assignment_dir.join(&self.dist_dir)
    }

    pub fn report_path(&self, assignment_dir: &Path) -> PathBuf {
        assignment_dir.join(&self.report_file)
    }
}

/// Per-assignment settings for `--legacy` runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyConfig {
    /// Allowlist of grader names; empty keeps the whole roster
    #[serde(default)]
    pub graders: Vec<String>,

    #[serde(default)]
    pub files: Vec<String>,

    #[serde(default)]
    pub folders: Vec<String>,

    #[serde(default)]
    pub folder_with: Vec<String>,

    #[serde(default)]
    pub extensions: Vec<String>,
}

impl LegacyConfig {
    pub fn selection(&self) -> Selection {
        Selection::new(
            &self.files,
            &self.folders,
            &self.folder_with,
            &self.extensions,
        )
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Grader(String, String),
    Grouping(String),
    Layout(String),
    Legacy(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Grader(name, msg) => write!(f, "Grader '{}': {}", name, msg),
            ValidationError::Grouping(msg) => write!(f, "Grouping: {}", msg),
            ValidationError::Layout(msg) => write!(f, "Layout: {}", msg),
            ValidationError::Legacy(msg) => write!(f, "Legacy: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SplitConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for entry in &self.roster.graders {
            let name = entry.name.trim();
            if name.is_empty() {
                errors.push(ValidationError::Grader(
                    entry.name.clone(),
                    "name cannot be blank".to_string(),
                ));
            } else if !seen.insert(name) {
                errors.push(ValidationError::Grader(
                    name.to_string(),
                    "listed more than once".to_string(),
                ));
            }
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                errors.push(ValidationError::Grader(
                    entry.name.clone(),
                    format!("weight {} must be zero or positive", entry.weight),
                ));
            }
        }

        if self.grouping.delimiters.is_empty() {
            errors.push(ValidationError::Grouping(
                "at least one delimiter is required".to_string(),
            ));
        }
        for d in &self.grouping.delimiters {
            if single_char(d).is_none() {
                errors.push(ValidationError::Grouping(format!(
                    "delimiter '{}' must be a single character",
                    d
                )));
            }
        }
        for pattern in &self.grouping.exceptions {
            if let Err(e) = Regex::new(pattern) {
                errors.push(ValidationError::Grouping(format!(
                    "invalid exception pattern '{}': {}",
                    pattern, e
                )));
            }
        }

        for (key, value) in [
            ("raw_dir", &self.layout.raw_dir),
            ("dist_dir", &self.layout.dist_dir),
            ("report_file", &self.layout.report_file),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::Layout(format!("{} cannot be empty", key)));
            }
        }
        if self.layout.raw_dir == self.layout.dist_dir {
            errors.push(ValidationError::Layout(
                "raw_dir and dist_dir must differ".to_string(),
            ));
        }

        if self.legacy.graders.iter().any(|g| g.trim().is_empty()) {
            errors.push(ValidationError::Legacy(
                "grader allowlist contains a blank name".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one error
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}

/// Loads [`SplitConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then `<assignment>/gradesplit.toml`
    pub fn load(assignment_dir: &Path) -> Result<SplitConfig, config::ConfigError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, assignment_dir)?;
        builder.build()?.try_deserialize()
    }

    /// Defaults, then exactly `path`
    pub fn load_from_file(path: &Path) -> Result<SplitConfig, config::ConfigError> {
        merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Resolve the configuration a command should run with
    pub fn resolve(
        assignment_dir: &Path,
        explicit: Option<&Path>,
    ) -> Result<SplitConfig, ApiError> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load(assignment_dir)?,
        };
        config.validated()
    }

    pub fn xdg_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }
}
