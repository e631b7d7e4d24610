//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod catalog;
mod score;

pub use catalog::run_catalog;
pub use score::run_score;

// Re-export config types used by handlers
pub use crate::config::ScoreConfig;
