//! Request and result types for the split workflows.

use crate::distribute::{DistributionSummary, Selection};
use crate::plan::{Assignment, AssignmentPlan};
use crate::submission::Submission;
use serde::Serialize;
use std::path::PathBuf;

/// Everything a `plan` or `split` invocation asks for
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub assignment_dir: PathBuf,
    /// Seeds the grader shuffle; the assignment directory argument as given
    pub identifier: String,
    pub csv: Option<PathBuf>,
    pub exclude_sids: Vec<String>,
    pub legacy: bool,
    pub selection: Selection,
    pub dry_run: bool,
}

impl SplitRequest {
    pub fn new(assignment_dir: impl Into<String>) -> Self {
        let identifier = assignment_dir.into();
        Self {
            assignment_dir: PathBuf::from(&identifier),
            identifier,
            csv: None,
            exclude_sids: Vec::new(),
            legacy: false,
            selection: Selection::default(),
            dry_run: false,
        }
    }
}

/// A computed plan bound to the assignment's submissions
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub roster_source: String,
    pub plan: AssignmentPlan,
    pub assignments: Vec<Assignment>,
    /// Submissions dropped because their group key is an excluded sid
    pub excluded: Vec<Submission>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitOutcome {
    #[serde(flatten)]
    pub planned: PlanOutcome,
    pub distribution: Option<DistributionSummary>,
    pub report: Option<PathBuf>,
}

impl SplitOutcome {
    pub fn is_dry_run(&self) -> bool {
        self.distribution.is_none()
    }
}
