//! The deployable application

use std::collections::HashMap;

use serde::Serialize;

use super::deployment::Deployment;
use super::node::{Node, NodeRef};
use super::options::{OptionValue, Options};
use super::registrar::{ApplicationKind, TaskRegistrar};
use super::workflow::Workflow;
use crate::error::{ConfigError, MISSING_DEPLOYMENT_PATH};

/// Application nodes keyed by node name
pub type Nodes = HashMap<String, NodeRef>;

/// A deployable unit: the nodes it runs on, where it is installed on them
/// and free-form options for the tasks that deploy it.
///
/// Setters return `&mut Self` so calls can be chained. There is no internal
/// locking; callers sharing an application across threads must serialize
/// mutation themselves.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    name: String,
    #[serde(rename = "type")]
    kind: ApplicationKind,
    #[serde(serialize_with = "serialize_nodes")]
    nodes: Nodes,
    deployment_path: Option<String>,
    options: Options,
}

impl Application {
    /// Create a generic application with no nodes, path or options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ApplicationKind::Generic,
            nodes: Nodes::new(),
            deployment_path: None,
            options: Options::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn kind(&self) -> ApplicationKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ApplicationKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Registered nodes. The map is borrowed; changes go through the setters.
    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// Registered node names, sorted
    pub fn node_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Replace all nodes
    pub fn set_nodes(&mut self, nodes: Nodes) -> &mut Self {
        self.nodes = nodes;
        self
    }

    /// Add a node under its own name, replacing any node of the same name
    pub fn add_node(&mut self, node: NodeRef) -> &mut Self {
        self.nodes.insert(node.name().to_string(), node);
        self
    }

    /// Whether a node with the same name is registered
    pub fn has_node(&self, node: &Node) -> bool {
        self.nodes.contains_key(node.name())
    }

    /// Base path of the application on its nodes.
    ///
    /// Reading the path before it was set is a configuration error.
    pub fn deployment_path(&self) -> Result<&str, ConfigError> {
        self.deployment_path.as_deref().ok_or_else(|| {
            ConfigError::invalid(
                format!(
                    "No deployment path has been defined for application {}.",
                    self.name
                ),
                MISSING_DEPLOYMENT_PATH,
            )
        })
    }

    /// Directory for data kept across releases
    pub fn shared_path(&self) -> Result<String, ConfigError> {
        Ok(format!("{}/shared", self.deployment_path()?))
    }

    /// Directory holding the individual releases
    pub fn releases_path(&self) -> Result<String, ConfigError> {
        Ok(format!("{}/releases", self.deployment_path()?))
    }

    /// Set the deployment path, dropping trailing slashes
    pub fn set_deployment_path(&mut self, path: &str) -> &mut Self {
        self.deployment_path = Some(path.trim_end_matches('/').to_string());
        self
    }

    /// All options. The map is borrowed; changes go through the setters.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace all options
    pub fn set_options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self
    }

    /// Value of an option. Unset keys are an error, check with
    /// [`has_option`](Self::has_option) when absence is expected.
    pub fn option(&self, key: &str) -> Result<&OptionValue, ConfigError> {
        self.options
            .get(key)
            .ok_or_else(|| ConfigError::MissingOption {
                application: self.name.clone(),
                key: key.to_string(),
            })
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn set_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl TaskRegistrar for Application {
    fn register_tasks(&self, workflow: &mut Workflow, deployment: &Deployment) {
        self.kind.register(&self.name, workflow, deployment);
    }
}

fn serialize_nodes<S>(nodes: &Nodes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let mut names: Vec<&String> = nodes.keys().collect();
    names.sort_unstable();
    serializer.collect_seq(names)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::domain::workflow::Stage;

    fn node(name: &str) -> NodeRef {
        Arc::new(Node::new(name))
    }

    #[test]
    fn test_new_application_is_empty() {
        let app = Application::new("web");

        assert_eq!(app.name(), "web");
        assert_eq!(app.kind(), ApplicationKind::Generic);
        assert!(app.nodes().is_empty());
        assert!(app.options().is_empty());
        assert!(app.deployment_path().is_err());
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let app = Application::new("");
        assert_eq!(app.name(), "");
    }

    #[test]
    fn test_add_node_replaces_by_name() {
        let mut app = Application::new("web");
        let first = node("host1");
        let mut replacement = Node::new("host1");
        replacement.set_option("hostname", "10.0.0.2");
        let replacement = Arc::new(replacement);

        app.add_node(first)
            .add_node(node("host2"))
            .add_node(Arc::clone(&replacement));

        assert_eq!(app.node_names(), vec!["host1", "host2"]);
        assert!(Arc::ptr_eq(&app.nodes()["host1"], &replacement));
    }

    #[test]
    fn test_has_node_compares_names() {
        let mut app = Application::new("web");
        app.add_node(node("host1"));

        assert!(app.has_node(&Node::new("host1")));
        assert!(!app.has_node(&Node::new("host2")));
    }

    #[test]
    fn test_set_nodes_replaces_all() {
        let mut app = Application::new("web");
        app.add_node(node("host1"));

        let mut nodes = Nodes::new();
        nodes.insert("host2".to_string(), node("host2"));
        app.set_nodes(nodes);

        assert_eq!(app.node_names(), vec!["host2"]);
        assert!(!app.has_node(&Node::new("host1")));
    }

    #[test]
    fn test_node_shared_between_applications() {
        let shared = node("host1");
        let mut web = Application::new("web");
        let mut api = Application::new("api");

        web.add_node(Arc::clone(&shared));
        api.add_node(Arc::clone(&shared));

        assert_eq!(Arc::strong_count(&shared), 3);
        assert!(web.has_node(&shared));
        assert!(api.has_node(&shared));
    }

    #[test]
    fn test_deployment_path_trims_trailing_slashes() {
        let mut app = Application::new("web");

        app.set_deployment_path("/var/www/");
        assert_eq!(app.deployment_path().unwrap(), "/var/www");

        app.set_deployment_path("/var/www///");
        assert_eq!(app.deployment_path().unwrap(), "/var/www");

        app.set_deployment_path("/var/www");
        assert_eq!(app.deployment_path().unwrap(), "/var/www");
    }

    #[test]
    fn test_derived_paths() {
        let mut app = Application::new("web");
        app.set_deployment_path("/srv/web/");

        assert_eq!(app.shared_path().unwrap(), "/srv/web/shared");
        assert_eq!(app.releases_path().unwrap(), "/srv/web/releases");
    }

    #[test]
    fn test_missing_deployment_path_is_configuration_error() {
        let app = Application::new("web");

        for err in [
            app.deployment_path().unwrap_err(),
            app.shared_path().unwrap_err(),
            app.releases_path().unwrap_err(),
        ] {
            assert_eq!(err.code(), Some(1312220645));
            assert!(err.to_string().contains("application web"));
        }
    }

    #[test]
    fn test_options() {
        let mut app = Application::new("web");
        assert!(!app.has_option("phpVersion"));

        app.set_option("phpVersion", "8.1");
        assert!(app.has_option("phpVersion"));
        assert_eq!(app.option("phpVersion").unwrap(), &json!("8.1"));

        app.set_option("phpVersion", "8.2");
        assert_eq!(app.option("phpVersion").unwrap(), &json!("8.2"));
    }

    #[test]
    fn test_missing_option_fails() {
        let app = Application::new("web");

        match app.option("missing") {
            Err(ConfigError::MissingOption { application, key }) => {
                assert_eq!(application, "web");
                assert_eq!(key, "missing");
            }
            other => panic!("Expected ConfigError::MissingOption, got {:?}", other),
        }
    }

    #[test]
    fn test_set_options_replaces_all() {
        let mut app = Application::new("web");
        app.set_option("old", true);

        let mut options = Options::new();
        options.insert("keepReleases".to_string(), json!(5));
        options.insert("composer".to_string(), json!({ "noDev": true }));
        app.set_options(options);

        assert!(!app.has_option("old"));
        assert!(app.has_option("keepReleases"));
        assert!(app.has_option("composer"));
        assert_eq!(app.option("keepReleases").unwrap(), &json!(5));
        assert_eq!(app.option("composer").unwrap()["noDev"], json!(true));
    }

    #[test]
    fn test_setters_return_same_instance() {
        let mut app = Application::new("web");
        let ptr: *const Application = &app;

        let returned: *const Application = app
            .set_name("api")
            .set_nodes(Nodes::new())
            .add_node(node("host1"))
            .set_deployment_path("/srv/api/")
            .set_options(Options::new())
            .set_option("branch", "main");

        assert!(std::ptr::eq(ptr, returned));
        assert_eq!(app.name(), "api");
        assert!(app.has_node(&Node::new("host1")));
        assert_eq!(app.deployment_path().unwrap(), "/srv/api");
        assert_eq!(app.option("branch").unwrap(), &json!("main"));
    }

    #[test]
    fn test_generic_register_tasks_is_noop() {
        let app = Application::new("web");
        let deployment = Deployment::new("production");
        let mut workflow = Workflow::new();

        app.register_tasks(&mut workflow, &deployment);

        assert!(workflow.is_empty());
    }

    #[test]
    fn test_web_register_tasks() {
        let mut app = Application::new("web");
        app.set_kind(ApplicationKind::Web);
        let deployment = Deployment::new("production");
        let mut workflow = Workflow::new();

        app.register_tasks(&mut workflow, &deployment);

        assert_eq!(workflow.tasks_for(Stage::Switch, Some("web")), vec!["symlink-release"]);
    }

    #[test]
    fn test_end_to_end() {
        let mut app = Application::new("web");
        app.add_node(node("host1"))
            .set_deployment_path("/srv/web/")
            .set_option("phpVersion", "8.1");

        assert_eq!(app.name(), "web");
        assert!(app.has_node(&Node::new("host1")));
        assert_eq!(app.deployment_path().unwrap(), "/srv/web");
        assert_eq!(app.shared_path().unwrap(), "/srv/web/shared");
        assert_eq!(app.option("phpVersion").unwrap(), &json!("8.1"));
        assert!(!app.has_option("missing"));
        assert!(app.option("missing").is_err());
    }

    #[test]
    fn test_serializes_sorted_node_names() {
        let mut app = Application::new("web");
        app.add_node(node("b")).add_node(node("a"));

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["nodes"], json!(["a", "b"]));
        assert_eq!(value["type"], json!("generic"));
        assert_eq!(value["deployment_path"], json!(null));
    }
}
