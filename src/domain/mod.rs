//! Deployment domain model
//!
//! An [`Application`] is the unit that gets deployed. It runs on a set of
//! shared [`Node`]s and contributes tasks to a [`Workflow`] when a
//! [`Deployment`] is assembled.

pub mod application;
pub mod deployment;
pub mod node;
pub mod options;
pub mod registrar;
pub mod workflow;

pub use application::{Application, Nodes};
pub use deployment::Deployment;
pub use node::{Node, NodeRef};
pub use options::{OptionValue, Options};
pub use registrar::{ApplicationKind, TaskRegistrar};
pub use workflow::{Stage, TaskRegistration, Workflow};
