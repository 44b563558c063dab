//! Error types for grader rosters, assignment planning and distribution.

use thiserror::Error;

/// Roster (grader registry) errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("Invalid weight for grader '{name}': {weight} (weights must be positive)")]
    InvalidWeight { name: String, weight: f64 },

    #[error("Duplicate grader name: {0}")]
    DuplicateName(String),

    #[error("Grader name cannot be empty")]
    EmptyName,

    #[error("Roster is empty or has zero total weight")]
    EmptyRegistry,
}

/// Planning errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("No graders available to receive {submissions} submission(s)")]
    NoGraders { submissions: usize },

    #[error("Quota mismatch: quotas sum to {assigned} but there are {expected} submissions")]
    QuotaMismatch { expected: usize, assigned: usize },

    #[error("Roster weights must be normalized before planning")]
    Unnormalized,

    #[error("Plan covers {planned} submission(s) but {actual} were supplied")]
    SubmissionCountMismatch { planned: usize, actual: usize },

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Path not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Top-level errors surfaced by the CLI and the distribution run
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("{0}")]
    Plan(#[from] PlanError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No files or folders specified; nothing will happen. Use --files, --folders or --folder-with.")]
    NothingSelected,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ConfigError(format!("Failed to read roster CSV: {}", err))
    }
}

impl From<regex::Error> for ApiError {
    fn from(err: regex::Error) -> Self {
        ApiError::ConfigError(format!("Invalid grouping exception pattern: {}", err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::StorageError(StorageError::IoError(err))
    }
}
