//! Node display model

use serde::Serialize;
use tabled::Tabled;

use super::format_options;
use crate::domain::Node;

/// Node row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NodeDisplay {
    #[tabled(rename = "NODE")]
    pub name: String,

    #[tabled(rename = "HOSTNAME")]
    pub hostname: String,

    #[tabled(rename = "OPTIONS")]
    pub options: String,
}

impl From<&Node> for NodeDisplay {
    fn from(node: &Node) -> Self {
        let mut options = node.options().clone();
        options.remove("hostname");

        Self {
            name: node.name().to_string(),
            hostname: node.hostname().to_string(),
            options: format_options(&options),
        }
    }
}
