//! Grader registry: ordered, validated set of graders for one run.

use crate::error::RosterError;
use crate::roster::grader::Grader;
use crate::roster::source::GraderEntry;
use crate::seed::AssignmentSeed;
use std::collections::HashSet;
use tracing::debug;

/// Tolerance used when checking that normalized weights sum to 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Registry of graders for a single planning run
///
/// Built once per invocation and handed to the planner by value; there is no
/// shared or process-wide roster.
#[derive(Debug, Clone, Default)]
pub struct GraderRegistry {
    graders: Vec<Grader>,
    normalized: bool,
}

impl GraderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from roster entries, in entry order.
    ///
    /// Entries with weight exactly 0 become standby graders; every other
    /// entry goes through [`GraderRegistry::add`].
    pub fn from_entries(entries: &[GraderEntry]) -> Result<Self, RosterError> {
        let mut registry = Self::new();
        for entry in entries {
            if entry.weight == 0.0 {
                registry.add_standby(&entry.name)?;
            } else {
                registry.add(&entry.name, entry.weight)?;
            }
            if let Some(sid) = entry.sid.as_deref().filter(|s| !s.trim().is_empty()) {
                if let Some(grader) = registry.graders.last_mut() {
                    grader.exclusion_key = Some(sid.trim().to_string());
                }
            }
        }
        Ok(registry)
    }

    /// Register a grader with a positive raw weight
    pub fn add(&mut self, name: &str, raw_weight: f64) -> Result<&mut Grader, RosterError> {
        if !raw_weight.is_finite() || raw_weight <= 0.0 {
            return Err(RosterError::InvalidWeight {
                name: name.to_string(),
                weight: raw_weight,
            });
        }
        self.insert(name, raw_weight)
    }

    /// Register a zero-weight grader
    pub fn add_standby(&mut self, name: &str) -> Result<&mut Grader, RosterError> {
        self.insert(name, 0.0)
    }

    fn insert(&mut self, name: &str, weight: f64) -> Result<&mut Grader, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        self.graders.push(Grader::new(name, weight));
        self.normalized = false;
        let idx = self.graders.len() - 1;
        Ok(&mut self.graders[idx])
    }

    /// Replace every weight with `weight / total`.
    ///
    /// Weights are divided once: calling this on an already-normalized
    /// registry leaves it untouched.
    pub fn normalize(&mut self) -> Result<(), RosterError> {
        if self.normalized {
            debug!(graders = self.graders.len(), "Roster already normalized; skipping");
            return Ok(());
        }
        if self.graders.is_empty() {
            return Err(RosterError::EmptyRegistry);
        }
        let total = self.total_weight();
        if total <= 0.0 || !total.is_finite() {
            return Err(RosterError::EmptyRegistry);
        }
        for grader in &mut self.graders {
            grader.weight /= total;
        }
        self.normalized = true;
        debug!(graders = self.graders.len(), total, "Normalized roster weights");
        Ok(())
    }

    /// New registry with only the graders matching `predicate`, order preserved
    pub fn filter<F>(&self, mut predicate: F) -> GraderRegistry
    where
        F: FnMut(&Grader) -> bool,
    {
        let graders: Vec<Grader> = self.graders.iter().filter(|g| predicate(*g)).cloned().collect();
        let lost_weight = self
            .graders
            .iter()
            .filter(|g| !g.is_standby())
            .count()
            != graders.iter().filter(|g| !g.is_standby()).count();
        GraderRegistry {
            normalized: self.normalized && !lost_weight && !graders.is_empty(),
            graders,
        }
    }

    /// Keep only graders named in `allowlist`
    pub fn retain_names<S: AsRef<str>>(&self, allowlist: &[S]) -> GraderRegistry {
        let allowed: HashSet<&str> = allowlist.iter().map(|s| s.as_ref().trim()).collect();
        self.filter(|g| allowed.contains(g.name.as_str()))
    }

    /// Canonical order (by name), then the seeded permutation.
    ///
    /// Input order never influences the result.
    pub fn shuffle(&mut self, seed: &AssignmentSeed) {
        self.graders.sort_by(|a, b| a.name.cmp(&b.name));
        seed.permute(&mut self.graders);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.graders.iter().any(|g| g.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Grader> {
        self.graders.iter().find(|g| g.name == name)
    }

    pub fn graders(&self) -> &[Grader] {
        &self.graders
    }

    pub fn into_graders(self) -> Vec<Grader> {
        self.graders
    }

    pub fn names(&self) -> Vec<&str> {
        self.graders.iter().map(|g| g.name.as_str()).collect()
    }

    /// Exclusion keys of every grader that has one
    pub fn exclusion_keys(&self) -> Vec<String> {
        self.graders
            .iter()
            .filter_map(|g| g.exclusion_key.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.graders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graders.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.graders.iter().map(|g| g.weight).sum()
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }
}
