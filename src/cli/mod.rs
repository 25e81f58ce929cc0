//! CLI command handlers

pub mod commands;

pub use commands::{create_budget, RunOptions, RunSummary, DEFAULT_INPUT, DEFAULT_OUTPUT};
