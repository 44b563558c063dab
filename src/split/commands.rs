//! Split command service: single entry point per split CLI variant.
//!
//! Owns the plan and distribution workflow; the CLI parses, calls one method
//! per variant, and formats output.

use crate::config::SplitConfig;
use crate::distribute::{Distributor, SelectiveCopier};
use crate::error::ApiError;
use crate::plan::AssignmentPlanner;
use crate::report::write_report;
use crate::roster::{GraderRegistry, RosterSource};
use crate::split::types::{PlanOutcome, SplitOutcome, SplitRequest};
use crate::submission::{scan_raw_dir, GroupingRules};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Roster CSV looked up in the working directory when nothing else is configured
pub const DEFAULT_ROSTER_CSV: &str = "tas.csv";

/// Stateless split command service.
pub struct SplitCommandService;

impl SplitCommandService {
    /// Compute the plan and bind it to the current submissions. Touches nothing on disk.
    pub fn plan(request: &SplitRequest, config: &SplitConfig) -> Result<PlanOutcome, ApiError> {
        let rules = config.grouping.rules()?;
        Self::build_plan(request, config, &rules)
    }

    /// Plan, then replace `dist/` and write the report.
    ///
    /// Fails with `NothingSelected` before planning when no instruction was
    /// given, unless this is a dry run.
    pub fn split(request: &SplitRequest, config: &SplitConfig) -> Result<SplitOutcome, ApiError> {
        let selection = if request.legacy {
            config.legacy.selection()
        } else {
            request.selection.clone()
        };
        if selection.is_empty() && !request.dry_run {
            return Err(ApiError::NothingSelected);
        }

        let rules = config.grouping.rules()?;
        let planned = Self::build_plan(request, config, &rules)?;
        if request.dry_run {
            info!(identifier = %request.identifier, "Dry run; nothing copied");
            return Ok(SplitOutcome {
                planned,
                distribution: None,
                report: None,
            });
        }

        let layout = &config.layout;
        let distributor = Distributor::new(SelectiveCopier::new(selection), rules.clone());
        let distribution = distributor.distribute(
            &planned.assignments,
            &layout.raw_path(&request.assignment_dir),
            &layout.dist_path(&request.assignment_dir),
        )?;

        let report_path = layout.report_path(&request.assignment_dir);
        write_report(&report_path, &planned.assignments, &rules)?;

        Ok(SplitOutcome {
            planned,
            distribution: Some(distribution),
            report: Some(report_path),
        })
    }

    fn build_plan(
        request: &SplitRequest,
        config: &SplitConfig,
        rules: &GroupingRules,
    ) -> Result<PlanOutcome, ApiError> {
        let source = Self::roster_source(request, config);
        let entries = source.load()?;
        let mut registry = GraderRegistry::from_entries(&entries)?;
        debug!(source = %source.describe(), graders = registry.len(), "Loaded roster");

        // Every listed sid is excluded, whether or not its grader takes part.
        let mut excluded_keys: HashSet<String> = registry.exclusion_keys().into_iter().collect();
        excluded_keys.extend(
            request
                .exclude_sids
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        );

        if request.legacy && !config.legacy.graders.is_empty() {
            registry = registry.retain_names(&config.legacy.graders);
            for name in &config.legacy.graders {
                if !registry.contains(name.trim()) {
                    warn!(grader = %name, "Allowlisted grader is not on the roster");
                }
            }
        }
        if !registry.is_empty() {
            registry.normalize()?;
        }

        let raw_root = config.layout.raw_path(&request.assignment_dir);
        let (submissions, excluded) =
            scan_raw_dir(&raw_root)?.exclude_group_keys(rules, &excluded_keys);

        let planner = AssignmentPlanner::new(config.roster.planner_options());
        let plan = planner.plan(&request.identifier, registry, submissions.len())?;
        let assignments = plan.bind(&submissions)?;

        Ok(PlanOutcome {
            roster_source: source.describe(),
            plan,
            assignments,
            excluded,
        })
    }

    /// `--csv`, then `roster.csv`, then inline graders, then `tas.csv`
    fn roster_source(request: &SplitRequest, config: &SplitConfig) -> RosterSource {
        if let Some(csv) = &request.csv {
            return RosterSource::Csv(csv.clone());
        }
        if let Some(csv) = &config.roster.csv {
            return RosterSource::Csv(csv.clone());
        }
        if !config.roster.graders.is_empty() {
            return RosterSource::Inline(config.roster.graders.clone());
        }
        RosterSource::Csv(PathBuf::from(DEFAULT_ROSTER_CSV))
    }
}
