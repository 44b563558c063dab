//! Assignment plan: seeded grader order, quotas and slice offsets.

use crate::error::PlanError;
use crate::roster::Grader;
use crate::seed::AssignmentSeed;
use crate::submission::{Submission, SubmissionList};
use serde::Serialize;
use std::ops::Range;

/// One grader's share of the sorted submission list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub grader: Grader,
    pub quota: usize,
    /// Index of the grader's first submission in the sorted list
    pub offset: usize,
}

impl Allocation {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.quota
    }
}

/// Result of planning one assignment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentPlan {
    identifier: String,
    seed: AssignmentSeed,
    total: usize,
    allocations: Vec<Allocation>,
}

impl AssignmentPlan {
    /// Build a plan from graders in shuffled order and their quotas.
    ///
    /// Offsets are the prefix sums of the quotas.
    pub(crate) fn from_quotas(
        identifier: &str,
        seed: AssignmentSeed,
        graders: Vec<Grader>,
        quotas: Vec<usize>,
    ) -> Self {
        let mut offset = 0;
        let allocations: Vec<Allocation> = graders
            .into_iter()
            .zip(quotas)
            .map(|(grader, quota)| {
                let allocation = Allocation {
                    grader,
                    quota,
                    offset,
                };
                offset += quota;
                allocation
            })
            .collect();
        Self {
            identifier: identifier.to_string(),
            seed,
            total: offset,
            allocations,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn seed(&self) -> &AssignmentSeed {
        &self.seed
    }

    /// Number of submissions the plan covers
    pub fn total(&self) -> usize {
        self.total
    }

    /// Allocations in shuffled grader order
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Grader names in shuffled order
    pub fn order(&self) -> Vec<&str> {
        self.allocations
            .iter()
            .map(|a| a.grader.name.as_str())
            .collect()
    }

    pub fn quotas(&self) -> Vec<usize> {
        self.allocations.iter().map(|a| a.quota).collect()
    }

    pub fn quota_of(&self, grader: &str) -> Option<usize> {
        self.allocations
            .iter()
            .find(|a| a.grader.name == grader)
            .map(|a| a.quota)
    }

    /// Bind each allocation to its slice of the sorted submission list
    pub fn bind(&self, submissions: &SubmissionList) -> Result<Vec<Assignment>, PlanError> {
        if submissions.len() != self.total {
            return Err(PlanError::SubmissionCountMismatch {
                planned: self.total,
                actual: submissions.len(),
            });
        }
        let all = submissions.as_slice();
        Ok(self
            .allocations
            .iter()
            .map(|allocation| Assignment {
                grader: allocation.grader.clone(),
                submissions: all[allocation.range()].to_vec(),
            })
            .collect())
    }
}

/// A grader together with the submissions they received
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub grader: Grader,
    pub submissions: Vec<Submission>,
}
