//! Distribution run: a fresh `<dist>/` tree with one directory per grader.

use crate::distribute::copier::{CopyStats, SubmissionCopier};
use crate::error::StorageError;
use crate::plan::Assignment;
use crate::submission::GroupingRules;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What one grader received on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraderDelivery {
    pub grader: String,
    pub directory: PathBuf,
    pub submissions: usize,
    pub files_copied: usize,
    /// Submissions for which the selection matched nothing
    pub empty: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistributionSummary {
    pub dist_root: PathBuf,
    pub deliveries: Vec<GraderDelivery>,
}

impl DistributionSummary {
    pub fn files_copied(&self) -> usize {
        self.deliveries.iter().map(|d| d.files_copied).sum()
    }

    pub fn submissions(&self) -> usize {
        self.deliveries.iter().map(|d| d.submissions).sum()
    }
}

/// Writes bound assignments to disk through a [`SubmissionCopier`]
pub struct Distributor<C: SubmissionCopier> {
    copier: C,
    rules: GroupingRules,
}

impl<C: SubmissionCopier> Distributor<C> {
    pub fn new(copier: C, rules: GroupingRules) -> Self {
        Self { copier, rules }
    }

    /// Replace `dist_root` with one directory per grader, each holding
    /// `<group-key>/` copies of that grader's submissions.
    ///
    /// Every destination name and source directory is checked before
    /// anything is deleted.
    pub fn distribute(
        &self,
        assignments: &[Assignment],
        raw_root: &Path,
        dist_root: &Path,
    ) -> Result<DistributionSummary, StorageError> {
        for assignment in assignments {
            ensure_component(&assignment.grader.name)?;
            for submission in &assignment.submissions {
                ensure_component(submission.id())?;
                ensure_component(submission.group_key(&self.rules))?;
                let source = raw_root.join(submission.id());
                if !source.is_dir() {
                    return Err(StorageError::NotFound(source));
                }
            }
        }

        if dist_root.exists() {
            info!(dist = %dist_root.display(), "Removing previous distribution");
            fs::remove_dir_all(dist_root)?;
        }
        fs::create_dir_all(dist_root)?;

        let mut deliveries = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            deliveries.push(self.deliver(assignment, raw_root, dist_root)?);
        }

        let summary = DistributionSummary {
            dist_root: dist_root.to_path_buf(),
            deliveries,
        };
        info!(
            dist = %dist_root.display(),
            graders = summary.deliveries.len(),
            submissions = summary.submissions(),
            files = summary.files_copied(),
            "Distribution complete"
        );
        Ok(summary)
    }

    fn deliver(
        &self,
        assignment: &Assignment,
        raw_root: &Path,
        dist_root: &Path,
    ) -> Result<GraderDelivery, StorageError> {
        let grader_dir = dist_root.join(&assignment.grader.name);
        fs::create_dir_all(&grader_dir)?;

        let mut seen_keys = HashSet::new();
        let mut totals = CopyStats::default();
        let mut empty = Vec::new();
        for submission in &assignment.submissions {
            let key = submission.group_key(&self.rules);
            if !seen_keys.insert(key) {
                warn!(
                    grader = %assignment.grader.name,
                    group_key = key,
                    submission = submission.id(),
                    "Group key shared by several submissions; contents are merged"
                );
            }
            let stats = self.copier.copy_submission(
                &raw_root.join(submission.id()),
                &grader_dir.join(key),
            )?;
            if stats.files_copied == 0 {
                warn!(submission = submission.id(), "Nothing matched the selection");
                empty.push(submission.id().to_string());
            }
            totals.files_copied += stats.files_copied;
            totals.matches += stats.matches;
        }

        debug!(
            grader = %assignment.grader.name,
            submissions = assignment.submissions.len(),
            files = totals.files_copied,
            "Delivered submissions"
        );
        Ok(GraderDelivery {
            grader: assignment.grader.name.clone(),
            directory: grader_dir,
            submissions: assignment.submissions.len(),
            files_copied: totals.files_copied,
            empty,
        })
    }
}

/// Reject names that would escape or alias their parent directory
fn ensure_component(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StorageError::InvalidPath(format!(
            "'{}' is not usable as a directory name",
            name
        )));
    }
    Ok(())
}
