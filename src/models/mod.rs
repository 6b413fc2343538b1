//! Display models for CLI output
//!
//! Converts domain types into flat rows for table output and into
//! serializable summaries for JSON output.

pub mod display;

pub use display::{ApplicationDisplay, DeploymentSummary, NodeDisplay, TaskDisplay};
