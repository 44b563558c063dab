//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, PlanError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::NothingSelected => format!("{}\nAborting now!", e),
        ApiError::Plan(PlanError::QuotaMismatch { .. }) => {
            format!("Internal error: {}", e)
        }
        _ => format!("Error: {}", e),
    }
}
