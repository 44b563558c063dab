//! Re-exports for consumers that depend on `crate::split` only.

pub use super::commands::{SplitCommandService, DEFAULT_ROSTER_CSV};
pub use super::types::{PlanOutcome, SplitOutcome, SplitRequest};
