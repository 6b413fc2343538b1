//! Deployment run context

use std::collections::HashMap;

use chrono::Local;

use super::application::Application;
use super::node::NodeRef;
use super::registrar::TaskRegistrar;
use super::workflow::Workflow;

/// Format of generated release identifiers
const RELEASE_IDENTIFIER_FORMAT: &str = "%Y%m%d%H%M%S";

/// One deployment run: the shared node registry and the applications
/// deployed to those nodes
#[derive(Debug, Clone)]
pub struct Deployment {
    name: String,
    release_identifier: String,
    nodes: HashMap<String, NodeRef>,
    applications: Vec<Application>,
}

impl Deployment {
    /// Create a deployment whose release identifier is the current local time
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release_identifier: Local::now().format(RELEASE_IDENTIFIER_FORMAT).to_string(),
            nodes: HashMap::new(),
            applications: Vec::new(),
        }
    }

    pub fn with_release_identifier(mut self, release_identifier: impl Into<String>) -> Self {
        self.release_identifier = release_identifier.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn release_identifier(&self) -> &str {
        &self.release_identifier
    }

    /// Add a node to the registry, replacing any node of the same name
    pub fn add_node(&mut self, node: NodeRef) -> &mut Self {
        self.nodes.insert(node.name().to_string(), node);
        self
    }

    pub fn node(&self, name: &str) -> Option<&NodeRef> {
        self.nodes.get(name)
    }

    /// Registered nodes sorted by name
    pub fn nodes(&self) -> Vec<&NodeRef> {
        let mut nodes: Vec<&NodeRef> = self.nodes.values().collect();
        nodes.sort_by(|a, b| a.name().cmp(b.name()));
        nodes
    }

    pub fn add_application(&mut self, application: Application) -> &mut Self {
        self.applications.push(application);
        self
    }

    /// Applications in the order they were added
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn application(&self, name: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.name() == name)
    }

    /// Collect the tasks of every application into a fresh workflow
    pub fn build_workflow(&self) -> Workflow {
        let mut workflow = Workflow::new();
        for application in &self.applications {
            application.register_tasks(&mut workflow, self);
        }

        log::debug!(
            "Built workflow for deployment {} with {} task registrations",
            self.name,
            workflow.registrations().len()
        );
        workflow
    }
}
