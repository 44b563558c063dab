//! Submissions: identifiers, the sorted submission list, and group keys.

pub mod grouping;
pub mod list;

pub use grouping::GroupingRules;
pub use list::{scan_raw_dir, Submission, SubmissionList};
