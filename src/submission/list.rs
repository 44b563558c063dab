//! Submission identifiers and the sorted submission list.

use crate::error::StorageError;
use crate::submission::grouping::GroupingRules;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// One student's or group's raw submission directory name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(String);

impl Submission {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn group_key<'a>(&'a self, rules: &GroupingRules) -> &'a str {
        rules.group_key(&self.0)
    }
}

/// Submissions in lexicographic order, without duplicates
///
/// Slice offsets in an assignment plan index into this order, so it is the
/// only way a submission list reaches the planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionList {
    submissions: Vec<Submission>,
}

impl SubmissionList {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut submissions: Vec<Submission> = ids.into_iter().map(|id| Submission::new(id)).collect();
        submissions.sort();
        submissions.dedup();
        Self { submissions }
    }

    /// Split off submissions whose group key is in `keys`
    ///
    /// Returns the kept list and the excluded submissions.
    pub fn exclude_group_keys(
        self,
        rules: &GroupingRules,
        keys: &HashSet<String>,
    ) -> (SubmissionList, Vec<Submission>) {
        let (excluded, kept): (Vec<Submission>, Vec<Submission>) = self
            .submissions
            .into_iter()
            .partition(|s| keys.contains(s.group_key(rules)));
        for s in &excluded {
            debug!(submission = s.id(), "Excluded submission");
        }
        (SubmissionList { submissions: kept }, excluded)
    }

    pub fn as_slice(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Submission> {
        self.submissions.iter()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

/// Names of the directories directly under `raw_root`, sorted
pub fn scan_raw_dir(raw_root: &Path) -> Result<SubmissionList, StorageError> {
    if !raw_root.is_dir() {
        return Err(StorageError::NotFound(raw_root.to_path_buf()));
    }

    let mut names = Vec::new();
    let walker = WalkDir::new(raw_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for entry in walker {
        let entry = entry.map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to read submissions in {:?}: {}", raw_root, e),
            ))
        })?;
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_str().ok_or_else(|| {
                StorageError::InvalidPath(format!(
                    "submission directory {:?} is not valid UTF-8",
                    entry.path()
                ))
            })?;
            names.push(name.to_string());
        }
    }

    let list = SubmissionList::new(names);
    info!(raw_root = %raw_root.display(), submissions = list.len(), "Scanned raw submissions");
    Ok(list)
}
