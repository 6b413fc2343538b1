//! Task registration for deployment workflows
//!
//! A [`Workflow`] only records which tasks run in which [`Stage`] and for
//! which application. Running them is left to the executor that consumes it.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

/// Deployment stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Initialize,
    Update,
    Migrate,
    Finalize,
    Test,
    Switch,
    Cleanup,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Initialize,
        Stage::Update,
        Stage::Migrate,
        Stage::Finalize,
        Stage::Test,
        Stage::Switch,
        Stage::Cleanup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Initialize => "initialize",
            Stage::Update => "update",
            Stage::Migrate => "migrate",
            Stage::Finalize => "finalize",
            Stage::Test => "test",
            Stage::Switch => "switch",
            Stage::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task registered for a stage, optionally scoped to an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRegistration {
    pub task: String,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

/// Key of a chain: (application scope, anchor task)
type ChainKey = (Option<String>, String);

#[derive(Debug, Default, Clone)]
pub struct Workflow {
    registrations: Vec<TaskRegistration>,
    chains: HashMap<ChainKey, Vec<String>>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` for `stage`. Registering the same task twice for the
    /// same stage and application has no effect.
    pub fn add_task(&mut self, task: &str, stage: Stage, application: Option<&str>) -> &mut Self {
        let registration = TaskRegistration {
            task: task.to_string(),
            stage,
            application: application.map(str::to_string),
        };

        if self.registrations.contains(&registration) {
            log::debug!("Task {} already registered for stage {}", task, stage);
        } else {
            log::debug!(
                "Registered task {} for stage {} ({})",
                task,
                stage,
                application.unwrap_or("all applications")
            );
            self.registrations.push(registration);
        }

        self
    }

    /// Run `task` directly after `existing`, wherever `existing` is registered
    pub fn after_task(
        &mut self,
        existing: &str,
        task: &str,
        application: Option<&str>,
    ) -> &mut Self {
        let followers = self
            .chains
            .entry((application.map(str::to_string), existing.to_string()))
            .or_default();

        if !followers.iter().any(|t| t == task) {
            followers.push(task.to_string());
        }

        self
    }

    /// All direct registrations in the order they were made
    pub fn registrations(&self) -> &[TaskRegistration] {
        &self.registrations
    }

    /// Registrations of one stage with chained tasks resolved.
    ///
    /// Global tasks come first, then application-scoped ones, each in
    /// registration order. Chained tasks directly follow their anchor.
    pub fn registrations_in(&self, stage: Stage) -> Vec<TaskRegistration> {
        let (global, scoped): (Vec<_>, Vec<_>) = self
            .registrations
            .iter()
            .filter(|r| r.stage == stage)
            .partition(|r| r.application.is_none());

        let mut resolved = Vec::new();
        let mut seen = HashSet::new();
        for registration in global.into_iter().chain(scoped) {
            self.resolve(registration.clone(), &mut resolved, &mut seen);
        }
        resolved
    }

    /// Task names that run in `stage` for `application`.
    ///
    /// With no application only global tasks are returned.
    pub fn tasks_for(&self, stage: Stage, application: Option<&str>) -> Vec<String> {
        self.registrations_in(stage)
            .into_iter()
            .filter(|r| r.application.is_none() || r.application.as_deref() == application)
            .map(|r| r.task)
            .collect()
    }

    /// Every stage in execution order with its resolved registrations
    pub fn stages(&self) -> impl Iterator<Item = (Stage, Vec<TaskRegistration>)> + '_ {
        Stage::ALL
            .into_iter()
            .map(move |stage| (stage, self.registrations_in(stage)))
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    fn resolve(
        &self,
        registration: TaskRegistration,
        out: &mut Vec<TaskRegistration>,
        seen: &mut HashSet<ChainKey>,
    ) {
        let key = (registration.application.clone(), registration.task.clone());
        if !seen.insert(key) {
            return;
        }

        let task = &registration.task;
        let mut chains: Vec<(&Option<String>, &Vec<String>)> = Vec::new();
        if let Some(followers) = self.chains.get(&(None, task.clone())) {
            chains.push((&registration.application, followers));
        }
        if registration.application.is_some() {
            let key = (registration.application.clone(), task.clone());
            if let Some(followers) = self.chains.get(&key) {
                chains.push((&registration.application, followers));
            }
        } else {
            // Scoped chains on a global anchor run for their own application
            let mut scoped: Vec<(&Option<String>, &Vec<String>)> = self
                .chains
                .iter()
                .filter(|((scope, anchor), _)| scope.is_some() && anchor == task)
                .map(|((scope, _), followers)| (scope, followers))
                .collect();
            scoped.sort_by(|a, b| a.0.cmp(b.0));
            chains.extend(scoped);
        }

        let followers: Vec<TaskRegistration> = chains
            .into_iter()
            .flat_map(|(scope, followers)| {
                followers.iter().map(move |task| TaskRegistration {
                    task: task.clone(),
                    stage: registration.stage,
                    application: scope.clone(),
                })
            })
            .collect();

        out.push(registration);
        for follower in followers {
            self.resolve(follower, out, seen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_are_ordered() {
        let mut sorted = Stage::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Stage::ALL.to_vec());
        assert_eq!(Stage::Switch.to_string(), "switch");
    }

    #[test]
    fn test_add_task_ignores_duplicates() {
        let mut workflow = Workflow::new();
        workflow
            .add_task("git-checkout", Stage::Update, Some("web"))
            .add_task("git-checkout", Stage::Update, Some("web"));

        assert_eq!(workflow.registrations().len(), 1);
        assert_eq!(workflow.tasks_for(Stage::Update, Some("web")), vec!["git-checkout"]);
    }

    #[test]
    fn test_global_tasks_run_before_scoped_tasks() {
        let mut workflow = Workflow::new();
        workflow
            .add_task("git-checkout", Stage::Update, Some("web"))
            .add_task("lock", Stage::Update, None);

        assert_eq!(
            workflow.tasks_for(Stage::Update, Some("web")),
            vec!["lock", "git-checkout"]
        );
        assert_eq!(workflow.tasks_for(Stage::Update, None), vec!["lock"]);
        assert_eq!(workflow.tasks_for(Stage::Update, Some("api")), vec!["lock"]);
    }

    #[test]
    fn test_after_task_follows_anchor() {
        let mut workflow = Workflow::new();
        workflow
            .add_task("git-checkout", Stage::Update, Some("web"))
            .add_task("composer-install", Stage::Update, Some("web"))
            .after_task("git-checkout", "copy-config", Some("web"));

        assert_eq!(
            workflow.tasks_for(Stage::Update, Some("web")),
            vec!["git-checkout", "copy-config", "composer-install"]
        );
    }

    #[test]
    fn test_scoped_chain_follows_global_anchor() {
        let mut workflow = Workflow::new();
        workflow
            .add_task("lock", Stage::Initialize, None)
            .after_task("lock", "warm-cache", Some("web"));

        assert_eq!(
            workflow.tasks_for(Stage::Initialize, Some("web")),
            vec!["lock", "warm-cache"]
        );
        assert_eq!(workflow.tasks_for(Stage::Initialize, Some("api")), vec!["lock"]);
        assert_eq!(workflow.tasks_for(Stage::Initialize, None), vec!["lock"]);

        let registrations = workflow.registrations_in(Stage::Initialize);
        assert_eq!(registrations[1].application.as_deref(), Some("web"));
    }

    #[test]
    fn test_global_chain_applies_to_every_application() {
        let mut workflow = Workflow::new();
        workflow
            .add_task("symlink-release", Stage::Switch, Some("web"))
            .add_task("symlink-release", Stage::Switch, Some("api"))
            .after_task("symlink-release", "flush-cache", None);

        assert_eq!(
            workflow.tasks_for(Stage::Switch, Some("api")),
            vec!["symlink-release", "flush-cache"]
        );
        assert_eq!(workflow.registrations_in(Stage::Switch).len(), 4);
    }

    #[test]
    fn test_chain_cycles_terminate() {
        let mut workflow = Workflow::new();
        workflow
            .add_task("a", Stage::Test, None)
            .after_task("a", "b", None)
            .after_task("b", "a", None);

        assert_eq!(workflow.tasks_for(Stage::Test, None), vec!["a", "b"]);
    }

    #[test]
    fn test_stages_iterates_all() {
        let mut workflow = Workflow::new();
        assert!(workflow.is_empty());
        workflow.add_task("cleanup-releases", Stage::Cleanup, None);

        let stages: Vec<_> = workflow.stages().collect();
        assert_eq!(stages.len(), 7);
        assert_eq!(stages[6].0, Stage::Cleanup);
        assert_eq!(stages[6].1[0].task, "cleanup-releases");
        assert!(stages[0].1.is_empty());
    }
}
