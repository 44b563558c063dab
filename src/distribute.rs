//! Distribution: copying each assigned submission's selected content into
//! `<dist>/<grader>/<group-key>/`.

pub mod copier;
pub mod run;
pub mod selection;

pub use copier::{CopyStats, SelectiveCopier, SubmissionCopier};
pub use run::{DistributionSummary, Distributor, GraderDelivery};
pub use selection::{Instruction, Selection};
