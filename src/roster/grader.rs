//! Grader identity and weight.

use serde::{Deserialize, Serialize};

/// A grader receiving a weighted share of submissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grader {
    /// Unique display name; also the grader's output directory name
    pub name: String,
    /// Raw weight until the registry is normalized, then the share of the load
    pub weight: f64,
    /// Grader's own student id; only used to exclude their submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion_key: Option<String>,
}

impl Grader {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            exclusion_key: None,
        }
    }

    /// Standby graders were listed with weight 0
    pub fn is_standby(&self) -> bool {
        self.weight == 0.0
    }
}
