//! Deployment summary for JSON output

use serde::Serialize;

use super::{NodeDisplay, TaskDisplay};
use crate::domain::{Application, Deployment};

/// Everything `describe` knows about a deployment
#[derive(Debug, Serialize)]
pub struct DeploymentSummary<'a> {
    pub name: &'a str,
    pub release_identifier: &'a str,
    pub nodes: Vec<NodeDisplay>,
    pub applications: &'a [Application],
    pub tasks: Vec<TaskDisplay>,
}

impl<'a> From<&'a Deployment> for DeploymentSummary<'a> {
    fn from(deployment: &'a Deployment) -> Self {
        Self {
            name: deployment.name(),
            release_identifier: deployment.release_identifier(),
            nodes: deployment
                .nodes()
                .into_iter()
                .map(|n| NodeDisplay::from(&**n))
                .collect(),
            applications: deployment.applications(),
            tasks: TaskDisplay::from_workflow(&deployment.build_workflow()),
        }
    }
}
