//! CLI presentation: text and json formatters per command.

mod plan;

pub use plan::{format_plan_json, format_plan_text, format_split_json, format_split_text};
