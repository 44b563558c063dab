//! Plan and split presentation: summary tables and json output.

use crate::error::ApiError;
use crate::split::{PlanOutcome, SplitOutcome};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_plan_text(outcome: &PlanOutcome) -> String {
    let plan = &outcome.plan;
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Assignment plan")));
    out.push_str(&format!("  Assignment: {}\n", plan.identifier()));
    out.push_str(&format!("  Seed: {}...\n", &plan.seed().to_hex()[..12]));
    out.push_str(&format!("  Roster: {}\n", outcome.roster_source));
    out.push_str(&format!("  Submissions: {}\n", plan.total()));
    if !outcome.excluded.is_empty() {
        let excluded: Vec<&str> = outcome.excluded.iter().map(|s| s.id()).collect();
        out.push_str(&format!(
            "  Excluded ({}): {}\n",
            excluded.len(),
            excluded.join(", ")
        ));
    }
    out.push('\n');

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Grader", "Weight", "Quota", "First", "Last"]);
    for (allocation, assignment) in plan.allocations().iter().zip(&outcome.assignments) {
        let first = assignment
            .submissions
            .first()
            .map(|s| s.id().to_string())
            .unwrap_or_else(|| "-".to_string());
        let last = assignment
            .submissions
            .last()
            .map(|s| s.id().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            allocation.grader.name.clone(),
            format!("{:.1}%", allocation.grader.weight * 100.0),
            allocation.quota.to_string(),
            first,
            last,
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_plan_json(outcome: &PlanOutcome) -> Result<String, ApiError> {
    serde_json::to_string_pretty(outcome).map_err(|e| ApiError::Serialization(e.to_string()))
}

pub fn format_split_text(outcome: &SplitOutcome) -> String {
    let mut out = format_plan_text(&outcome.planned);
    let distribution = match &outcome.distribution {
        Some(distribution) => distribution,
        None => {
            out.push_str("\nDry run: nothing was copied.\n");
            return out;
        }
    };

    out.push_str(&format!("\n{}\n\n", format_section_heading("Distribution")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Grader", "Submissions", "Files", "Directory"]);
    for delivery in &distribution.deliveries {
        table.add_row(vec![
            delivery.grader.clone(),
            delivery.submissions.to_string(),
            delivery.files_copied.to_string(),
            delivery.directory.display().to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));

    let empty: Vec<&str> = distribution
        .deliveries
        .iter()
        .flat_map(|d| d.empty.iter().map(String::as_str))
        .collect();
    if !empty.is_empty() {
        out.push_str(&format!(
            "\nNothing matched the selection in {} submission(s): {}\n",
            empty.len(),
            empty.join(", ")
        ));
    }
    if let Some(report) = &outcome.report {
        out.push_str(&format!("\nReport written to {}\n", report.display()));
    }
    out
}

pub fn format_split_json(outcome: &SplitOutcome) -> Result<String, ApiError> {
    serde_json::to_string_pretty(outcome).map_err(|e| ApiError::Serialization(e.to_string()))
}
