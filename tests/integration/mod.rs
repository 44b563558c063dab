//! Integration tests for gradesplit

mod cli_split;
mod config_layers;
mod distribution;
mod test_utils;
