//! Assignment planning
//!
//! Turns a normalized roster and a submission count into an
//! [`AssignmentPlan`]: the seeded grader order, one integer quota per grader
//! summing exactly to the submission count, and the contiguous slice of the
//! sorted submission list each grader owns.

pub mod assignment;
pub mod planner;
pub mod quota;

pub use assignment::{Allocation, Assignment, AssignmentPlan};
pub use planner::{AssignmentPlanner, PlannerOptions, ZeroWeightPolicy};
pub use quota::compute_quotas;
