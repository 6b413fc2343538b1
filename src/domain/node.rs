//! Deployment target nodes

use std::sync::Arc;

use super::options::{OptionValue, Options};

/// Shared handle to a node.
///
/// The same node is referenced by the deployment and by every application
/// that runs on it.
pub type NodeRef = Arc<Node>;

/// A deployment target, usually a server reachable by hostname
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    options: Options,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
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

    /// Hostname to connect to, falling back to the node name
    pub fn hostname(&self) -> &str {
        self.options
            .get("hostname")
            .and_then(OptionValue::as_str)
            .unwrap_or(self.name.as_str())
    }

    pub fn is_localhost(&self) -> bool {
        self.hostname() == "localhost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_falls_back_to_name() {
        let node = Node::new("web1");
        assert_eq!(node.hostname(), "web1");
        assert!(!node.is_localhost());
    }

    #[test]
    fn test_hostname_from_option() {
        let mut node = Node::new("web1");
        node.set_option("hostname", "web1.example.com");

        assert_eq!(node.hostname(), "web1.example.com");
        assert!(node.has_option("hostname"));
    }

    #[test]
    fn test_non_string_hostname_is_ignored() {
        let mut node = Node::new("web1");
        node.set_option("hostname", 42);
        assert_eq!(node.hostname(), "web1");
    }

    #[test]
    fn test_localhost() {
        let mut node = Node::new("local");
        node.set_option("hostname", "localhost");
        assert!(node.is_localhost());
    }
}
