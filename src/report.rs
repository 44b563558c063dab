//! Plan report (`dist.txt`): which grader received which group keys.

use crate::error::StorageError;
use crate::plan::Assignment;
use crate::submission::GroupingRules;
use std::fs;
use std::path::Path;
use tracing::info;

/// Render one `====== <name> ======` block per grader, in plan order
pub fn render_report(assignments: &[Assignment], rules: &GroupingRules) -> String {
    let mut out = String::new();
    for assignment in assignments {
        out.push_str(&format!("====== {} ======\n", assignment.grader.name));
        let keys: Vec<&str> = assignment
            .submissions
            .iter()
            .map(|s| s.group_key(rules))
            .collect();
        out.push_str(&keys.join(", "));
        out.push('\n');
    }
    out
}

pub fn write_report(
    path: &Path,
    assignments: &[Assignment],
    rules: &GroupingRules,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_report(assignments, rules))?;
    info!(report = %path.display(), "Wrote plan report");
    Ok(())
}
