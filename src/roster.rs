//! Grader roster
//!
//! Graders, the registry that validates and normalizes their weights, and the
//! sources a roster is loaded from (CSV file or config tables).

pub mod grader;
pub mod registry;
pub mod source;

pub use grader::Grader;
pub use registry::GraderRegistry;
pub use source::{load_csv, GraderEntry, RosterSource};
