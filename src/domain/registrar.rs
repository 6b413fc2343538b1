//! Task registration variants

use std::fmt;

use serde::{Deserialize, Serialize};

use super::deployment::Deployment;
use super::workflow::{Stage, Workflow};

/// Something that contributes deployment tasks to a workflow
pub trait TaskRegistrar {
    /// Attach the tasks this registrar needs to `workflow`.
    ///
    /// Must not fail; a registrar with nothing to contribute leaves the
    /// workflow untouched.
    fn register_tasks(&self, workflow: &mut Workflow, deployment: &Deployment);
}

/// Kind of application, selected by the `type` key of a deployment definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationKind {
    /// No tasks at all
    #[default]
    Generic,
    /// Release based web application
    Web,
}

impl ApplicationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationKind::Generic => "generic",
            ApplicationKind::Web => "web",
        }
    }

    /// Tasks contributed by this kind, in registration order
    pub fn tasks(&self) -> &'static [(&'static str, Stage)] {
        match self {
            ApplicationKind::Generic => &[],
            ApplicationKind::Web => &[
                ("create-directories", Stage::Initialize),
                ("git-checkout", Stage::Update),
                ("symlink-release", Stage::Switch),
                ("cleanup-releases", Stage::Cleanup),
            ],
        }
    }

    pub(crate) fn register(
        &self,
        application: &str,
        workflow: &mut Workflow,
        deployment: &Deployment,
    ) {
        let tasks = self.tasks();
        if tasks.is_empty() {
            return;
        }

        log::debug!(
            "Registering {} {} tasks for application {} (release {})",
            tasks.len(),
            self,
            application,
            deployment.release_identifier()
        );
        for (task, stage) in tasks {
            workflow.add_task(task, *stage, Some(application));
        }
    }
}

impl fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
