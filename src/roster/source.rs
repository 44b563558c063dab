//! Roster sources: header-less CSV files and inline config tables.
//!
//! CSV layout is `name, sid, weight` with any further columns ignored, so a
//! roster spreadsheet can keep notes next to each grader.

use crate::error::ApiError;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One roster row before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraderEntry {
    pub name: String,
    pub weight: f64,
    /// Grader's student id; their own submission is excluded from the split
    #[serde(default)]
    pub sid: Option<String>,
}

impl GraderEntry {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            sid: None,
        }
    }

    pub fn with_sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }
}

/// Where the roster comes from
#[derive(Debug, Clone)]
pub enum RosterSource {
    Csv(PathBuf),
    Inline(Vec<GraderEntry>),
}

impl RosterSource {
    pub fn load(&self) -> Result<Vec<GraderEntry>, ApiError> {
        match self {
            RosterSource::Csv(path) => load_csv(path),
            RosterSource::Inline(entries) => Ok(entries.clone()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RosterSource::Csv(path) => format!("csv:{}", path.display()),
            RosterSource::Inline(entries) => format!("config ({} graders)", entries.len()),
        }
    }
}

/// Load roster entries from a CSV file
pub fn load_csv(path: &Path) -> Result<Vec<GraderEntry>, ApiError> {
    let file = std::fs::File::open(path).map_err(|e| {
        ApiError::ConfigError(format!(
            "Failed to open roster CSV {}: {}",
            path.display(),
            e
        ))
    })?;
    let entries = parse_csv(file)?;
    debug!(path = %path.display(), graders = entries.len(), "Loaded roster CSV");
    Ok(entries)
}

/// Parse roster entries from CSV content
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<GraderEntry>, ApiError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut entries = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 1);
        if record.len() < 3 {
            return Err(ApiError::ConfigError(format!(
                "Roster CSV line {}: expected `name, sid, weight`, found {} column(s)",
                line,
                record.len()
            )));
        }
        let name = record[0].to_string();
        let sid = Some(record[1].to_string()).filter(|s| !s.is_empty());
        let weight: f64 = record[2].parse().map_err(|_| {
            ApiError::ConfigError(format!(
                "Roster CSV line {}: weight '{}' for '{}' is not a number",
                line, &record[2], name
            ))
        })?;
        entries.push(GraderEntry { name, weight, sid });
    }
    Ok(entries)
}
