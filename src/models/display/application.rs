//! Application display model

use serde::Serialize;
use tabled::Tabled;

use super::{NOT_SET, format_options};
use crate::domain::Application;

/// Application row for table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ApplicationDisplay {
    #[tabled(rename = "APPLICATION")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "DEPLOYMENT PATH")]
    pub deployment_path: String,

    #[tabled(rename = "NODES")]
    pub nodes: String,

    #[tabled(rename = "OPTIONS")]
    pub options: String,
}

impl From<&Application> for ApplicationDisplay {
    fn from(app: &Application) -> Self {
        Self {
            name: app.name().to_string(),
            kind: app.kind().to_string(),
            deployment_path: app
                .deployment_path()
                .map(str::to_string)
                .unwrap_or_else(|_| NOT_SET.to_string()),
            nodes: app.node_names().join(", "),
            options: format_options(app.options()),
        }
    }
}
