//! File selection instructions.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to pick out of a submission tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Instruction {
    /// Copy any file with this name to the destination root
    File(String),
    /// Copy the contents of any directory with this name
    Folder(String),
    /// Copy the contents of any directory containing a file with this name
    FolderWith(String),
}

/// Instructions plus the extension filter applied to folder copies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    instructions: Vec<Instruction>,
    extensions: Vec<String>,
}

impl Selection {
    pub fn new<S: AsRef<str>>(
        files: &[S],
        folders: &[S],
        folder_with: &[S],
        extensions: &[S],
    ) -> Self {
        let mut instructions = Vec::new();
        instructions.extend(files.iter().map(|s| Instruction::File(s.as_ref().to_string())));
        instructions.extend(folders.iter().map(|s| Instruction::Folder(s.as_ref().to_string())));
        instructions.extend(
            folder_with
                .iter()
                .map(|s| Instruction::FolderWith(s.as_ref().to_string())),
        );
        Self {
            instructions,
            extensions: extensions
                .iter()
                .map(|e| normalize_extension(e.as_ref()))
                .filter(|e| e.len() > 1)
                .collect(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Whether a file passes the extension filter (an empty filter passes all)
    pub fn allows(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match path.extension() {
            Some(ext) => {
                let ext = format!(".{}", ext.to_string_lossy());
                self.extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

/// `java` and `.java` both mean `.java`
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
