//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("roster.zero_weight", "exclude")?
        .set_default("grouping.delimiters", vec!["-", "_"])?
        .set_default("grouping.exceptions", vec!["-student"])?
        .set_default("layout.raw_dir", "raw")?
        .set_default("layout.dist_dir", "dist")?
        .set_default("layout.report_file", "dist.txt")
}
