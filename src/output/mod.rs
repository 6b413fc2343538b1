//! Output formatting for command results

pub mod json;
pub mod table;
