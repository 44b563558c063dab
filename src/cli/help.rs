//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "split", "plan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Split { dry_run: true, .. } => "split.dry_run",
        Commands::Split { .. } => "split",
        Commands::Plan { .. } => "plan",
    }
}
