//! Display model implementations for table and JSON output

mod application;
mod deployment;
mod node;
mod task;

pub use application::ApplicationDisplay;
pub use deployment::DeploymentSummary;
pub use node::NodeDisplay;
pub use task::TaskDisplay;

use crate::domain::{OptionValue, Options};

/// Placeholder for values that are not configured
pub const NOT_SET: &str = "(not set)";

/// Render one option value; strings are shown without quotes
pub fn format_option_value(value: &OptionValue) -> String {
    match value {
        OptionValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render options as sorted `key=value` pairs
pub fn format_options(options: &Options) -> String {
    let mut pairs: Vec<String> = options
        .iter()
        .map(|(key, value)| format!("{}={}", key, format_option_value(value)))
        .collect();
    pairs.sort();
    pairs.join(", ")
}
