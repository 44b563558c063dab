//! Assignment planner: seed, shuffle, quotas, validation.

use crate::error::PlanError;
use crate::plan::assignment::AssignmentPlan;
use crate::plan::quota::compute_quotas;
use crate::roster::GraderRegistry;
use crate::seed::AssignmentSeed;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How graders listed with weight 0 take part in a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWeightPolicy {
    /// Dropped before the shuffle; no allocation at all
    #[default]
    Exclude,
    /// Shuffled with everyone else; base quota 0 but may take a remainder unit
    Eligible,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerOptions {
    #[serde(default)]
    pub zero_weight: ZeroWeightPolicy,
}

/// Computes assignment plans
#[derive(Debug, Clone, Default)]
pub struct AssignmentPlanner {
    options: PlannerOptions,
}

impl AssignmentPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Plan `submission_count` submissions across a normalized roster.
    ///
    /// The grader order is a permutation seeded by `identifier` alone, so the
    /// same identifier, roster and count always produce the same plan.
    pub fn plan(
        &self,
        identifier: &str,
        registry: GraderRegistry,
        submission_count: usize,
    ) -> Result<AssignmentPlan, PlanError> {
        if !registry.is_empty() && !registry.is_normalized() {
            return Err(PlanError::Unnormalized);
        }

        let seed = AssignmentSeed::derive(identifier);
        let mut registry = match self.options.zero_weight {
            ZeroWeightPolicy::Exclude => registry.filter(|g| !g.is_standby()),
            ZeroWeightPolicy::Eligible => registry,
        };
        if registry.is_empty() && submission_count > 0 {
            return Err(PlanError::NoGraders {
                submissions: submission_count,
            });
        }

        registry.shuffle(&seed);
        let graders = registry.into_graders();
        let weights: Vec<f64> = graders.iter().map(|g| g.weight).collect();
        let quotas = compute_quotas(&weights, submission_count)?;

        let plan = AssignmentPlan::from_quotas(identifier, seed, graders, quotas);
        for allocation in plan.allocations() {
            debug!(
                grader = %allocation.grader.name,
                weight = allocation.grader.weight,
                quota = allocation.quota,
                offset = allocation.offset,
                "Allocated submissions"
            );
        }
        info!(
            identifier,
            seed = %plan.seed(),
            graders = plan.allocations().len(),
            submissions = plan.total(),
            "Assignment plan computed"
        );
        Ok(plan)
    }
}
