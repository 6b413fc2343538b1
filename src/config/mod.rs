//! Deployment definitions
//!
//! Each deployment is described by one YAML file in the deployments
//! directory (`~/.surf/deployments` unless overridden). The file name
//! without its extension is the deployment name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Application, ApplicationKind, Deployment, Node, NodeRef, Options};
use crate::error::{ConfigError, DUPLICATE_NODE, Error, Result, UNKNOWN_NODE};

/// Extension of deployment definition files
const DEFINITION_EXTENSION: &str = "yaml";

/// Parsed deployment definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Nodes available to the applications
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,

    /// Applications to deploy, in deployment order
    #[serde(default)]
    pub applications: Vec<ApplicationConfig>,
}

/// Node entry of a deployment definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,

    /// Hostname, defaults to the node name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default)]
    pub options: Options,
}

/// Application entry of a deployment definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: ApplicationKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_path: Option<String>,

    /// Names of the nodes this application runs on
    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub options: Options,
}

impl DeploymentConfig {
    /// Load a deployment definition from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        log::debug!(
            "Loaded {} nodes and {} applications from {}",
            config.nodes.len(),
            config.applications.len(),
            path.display()
        );

        Ok(config)
    }

    /// Parse a deployment definition from YAML
    pub fn parse(contents: &str) -> Result<Self> {
        let config = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Build the deployment model, resolving application nodes by name
    pub fn into_deployment(self, name: &str) -> Result<Deployment> {
        let mut deployment = Deployment::new(name);
        let mut seen = HashSet::new();

        for node_config in self.nodes {
            if !seen.insert(node_config.name.clone()) {
                return Err(ConfigError::invalid(
                    format!(
                        "Node {} is defined more than once in deployment {}.",
                        node_config.name, name
                    ),
                    DUPLICATE_NODE,
                )
                .into());
            }
            deployment.add_node(node_config.into_node());
        }

        for app_config in self.applications {
            let mut application = Application::new(app_config.name);
            application
                .set_kind(app_config.kind)
                .set_options(app_config.options);

            if let Some(path) = app_config.deployment_path {
                application.set_deployment_path(&path);
            }

            for node_name in &app_config.nodes {
                let node = deployment.node(node_name).cloned().ok_or_else(|| {
                    ConfigError::invalid(
                        format!(
                            "Application {} references undefined node {}.",
                            application.name(),
                            node_name
                        ),
                        UNKNOWN_NODE,
                    )
                })?;
                application.add_node(node);
            }

            deployment.add_application(application);
        }

        Ok(deployment)
    }
}

impl NodeConfig {
    fn into_node(self) -> NodeRef {
        let mut node = Node::new(self.name);
        for (key, value) in self.options {
            node.set_option(key, value);
        }
        if let Some(hostname) = self.hostname {
            node.set_option("hostname", hostname);
        }
        Arc::new(node)
    }
}

/// Directory of deployment definitions
#[derive(Debug, Clone)]
pub struct DeploymentsDir {
    path: PathBuf,
}

impl DeploymentsDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the default deployments directory
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Other("Could not determine home directory".to_string()))?;

        Ok(home.join(".surf").join("deployments"))
    }

    /// Use `path` if given, otherwise the default directory
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Definition file of a deployment
    pub fn definition_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{}.{}", name, DEFINITION_EXTENSION))
    }

    /// Names of all defined deployments, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.path.is_dir() {
            log::debug!("Deployments directory {} does not exist", self.path.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DEFINITION_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();

        Ok(names)
    }

    /// Load and build a deployment by name
    pub fn load(&self, name: &str) -> Result<Deployment> {
        DeploymentConfig::load_from(&self.definition_path(name))?.into_deployment(name)
    }
}
