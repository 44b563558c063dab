//! gradesplit: deterministic weighted distribution of student submissions among graders.
//!
//! A roster of weighted graders and the submissions under an assignment's
//! `raw/` directory are turned into a reproducible plan: the graders are
//! shuffled with a seed derived from the assignment identifier, each receives
//! a quota proportional to their weight, and quotas map to contiguous slices
//! of the sorted submission list.

pub mod cli;
pub mod config;
pub mod distribute;
pub mod error;
pub mod logging;
pub mod plan;
pub mod report;
pub mod roster;
pub mod seed;
pub mod split;
pub mod submission;
