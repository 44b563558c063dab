//! Split domain: the `plan` and `split` workflows over one assignment directory.

mod commands;
mod facade;
mod types;

pub use facade::*;
