//! Task registration display model

use serde::Serialize;
use tabled::Tabled;

use crate::domain::{TaskRegistration, Workflow};

/// Task row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TaskDisplay {
    #[tabled(rename = "STAGE")]
    pub stage: String,

    #[tabled(rename = "TASK")]
    pub task: String,

    #[tabled(rename = "APPLICATION")]
    pub application: String,
}

impl From<TaskRegistration> for TaskDisplay {
    fn from(registration: TaskRegistration) -> Self {
        Self {
            stage: registration.stage.to_string(),
            task: registration.task,
            application: registration.application.unwrap_or_default(),
        }
    }
}

impl TaskDisplay {
    /// Rows for every task of a workflow, in stage order
    pub fn from_workflow(workflow: &Workflow) -> Vec<Self> {
        workflow
            .stages()
            .flat_map(|(_, registrations)| registrations)
            .map(Self::from)
            .collect()
    }
}
