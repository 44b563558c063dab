//! Copy primitive: materialize a submission's selected content into a
//! destination directory.

use crate::distribute::selection::{Instruction, Selection};
use crate::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Counters for one submission copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files_copied: usize,
    pub matches: usize,
}

impl CopyStats {
    fn absorb(&mut self, other: CopyStats) {
        self.files_copied += other.files_copied;
        self.matches += other.matches;
    }
}

/// Materializes one submission into its destination directory
pub trait SubmissionCopier {
    fn copy_submission(&self, source: &Path, dest: &Path) -> Result<CopyStats, StorageError>;
}

/// Copies what a [`Selection`] matches, walking the submission in sorted order
#[derive(Debug, Clone)]
pub struct SelectiveCopier {
    selection: Selection,
}

impl SelectiveCopier {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn apply(
        &self,
        instruction: &Instruction,
        directories: &[PathBuf],
        dest: &Path,
    ) -> Result<CopyStats, StorageError> {
        let mut stats = CopyStats::default();
        for dir in directories {
            match instruction {
                Instruction::File(name) => {
                    let candidate = dir.join(name);
                    if candidate.is_file() {
                        copy_file(&candidate, &dest.join(name))?;
                        stats.matches += 1;
                        stats.files_copied += 1;
                    }
                }
                Instruction::Folder(name) => {
                    if dir.file_name().map(|n| n == name.as_str()).unwrap_or(false) {
                        stats.absorb(self.copy_folder(dir, dest)?);
                    }
                }
                Instruction::FolderWith(name) => {
                    if dir.join(name).is_file() {
                        stats.absorb(self.copy_folder(dir, dest)?);
                    }
                }
            }
        }
        Ok(stats)
    }

    /// Copy a matched folder's contents into `dest`.
    ///
    /// With an extension filter the folder must directly hold at least one
    /// allowed file, and only allowed files are copied.
    fn copy_folder(&self, dir: &Path, dest: &Path) -> Result<CopyStats, StorageError> {
        let mut stats = CopyStats::default();
        if !self.selection.extensions().is_empty() && !self.holds_allowed_file(dir)? {
            trace!(dir = %dir.display(), "Folder skipped by extension filter");
            return Ok(stats);
        }
        stats.matches += 1;
        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if !entry.file_type().is_file() || !self.selection.allows(entry.path()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| StorageError::InvalidPath(e.to_string()))?;
            copy_file(entry.path(), &dest.join(relative))?;
            stats.files_copied += 1;
        }
        Ok(stats)
    }

    fn holds_allowed_file(&self, dir: &Path) -> Result<bool, StorageError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() && self.selection.allows(&entry.path()) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl SubmissionCopier for SelectiveCopier {
    fn copy_submission(&self, source: &Path, dest: &Path) -> Result<CopyStats, StorageError> {
        if !source.is_dir() {
            return Err(StorageError::NotFound(source.to_path_buf()));
        }
        fs::create_dir_all(dest)?;

        let directories = collect_directories(source)?;
        let mut stats = CopyStats::default();
        for instruction in self.selection.instructions() {
            stats.absorb(self.apply(instruction, &directories, dest)?);
        }
        trace!(
            source = %source.display(),
            files = stats.files_copied,
            matches = stats.matches,
            "Copied submission"
        );
        Ok(stats)
    }
}

/// Every directory under `root` (root included), sorted by path
fn collect_directories(root: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let mut directories = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_dir() {
            directories.push(entry.into_path());
        }
    }
    directories.sort();
    Ok(directories)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), StorageError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)?;
    Ok(())
}

fn walk_error(e: walkdir::Error) -> StorageError {
    StorageError::IoError(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to walk submission: {}", e),
    ))
}
