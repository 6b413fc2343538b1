//! Surf - deployment definitions for applications, nodes and release
//! workflows.
//!
//! The [`domain`] module holds the model. [`config`] loads it from YAML
//! deployment definitions and [`cli`] backs the `surf` binary.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logger;
pub mod models;
pub mod output;

pub use domain::{
    Application, ApplicationKind, Deployment, Node, NodeRef, Stage, TaskRegistrar, Workflow,
};
pub use error::{ConfigError, Error, Result};
