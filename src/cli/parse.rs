//! CLI parse: clap types for gradesplit. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// gradesplit CLI - Deterministic weighted distribution of submissions among graders
#[derive(Parser, Debug)]
#[command(name = "gradesplit")]
#[command(version)]
#[command(
    about = "Distribute grading of student submissions among graders",
    long_about = "Distribute grading of student submissions among graders.\n\n\
                  Submissions are the directories under <ASSIGNMENT_DIR>/raw. Each grader \
                  receives a weighted share in <ASSIGNMENT_DIR>/dist/<grader>/, and \
                  <ASSIGNMENT_DIR>/dist.txt lists who received what. Rerunning with the \
                  same assignment directory argument and roster reproduces the same split.\n\n\
                  example usage:\n  gradesplit split P6 --files Utilities.java"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable logging
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split submissions among graders and copy the selected content into dist/
    Split {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Compute and print the plan without copying anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the plan for an assignment without touching dist/
    Plan {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Arguments shared by `split` and `plan`
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Assignment directory holding raw/; also the seed of the split
    pub assignment_dir: String,

    /// Roster CSV without headers: name, sid, weight (extra columns ignored)
    #[arg(long, short = 'c')]
    pub csv: Option<PathBuf>,

    /// Additional sids whose submissions are left out
    #[arg(long, short = 'e', value_name = "SID", num_args = 1..)]
    pub exclude_sids: Vec<String>,

    /// Take selection and grader allowlist from the [legacy] config table
    #[arg(long, short = 'l')]
    pub legacy: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// What to copy out of each submission
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Include files with these names
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub files: Vec<String>,

    /// Include the contents of folders with these names
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub folders: Vec<String>,

    /// Include the contents of folders containing these files
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub folder_with: Vec<String>,

    /// Only copy files with these extensions from folders (ignored by --files)
    #[arg(long, value_name = "EXT", num_args = 1..)]
    pub extensions: Vec<String>,
}

impl Commands {
    pub fn target(&self) -> &TargetArgs {
        match self {
            Commands::Split { target, .. } => target,
            Commands::Plan { target } => target,
        }
    }
}
