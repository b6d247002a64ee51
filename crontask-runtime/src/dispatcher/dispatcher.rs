use super::builder::DispatcherBuilder;
use super::result::{ExecutionResult, Outcome};
use crate::registry::{RegisteredTask, TaskRegistry};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Runs one evaluation pass over a registry of tasks.
///
/// The dispatcher has no timer of its own. An external trigger (OS cron, a
/// systemd timer, a supervisor) calls [`run_due`](Dispatcher::run_due) once
/// per cadence tick with the timestamp to evaluate against; there is no
/// catch-up for ticks the trigger missed.
pub struct Dispatcher {
    registry: TaskRegistry,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(registry: TaskRegistry) -> Self {
        Self { registry }
    }

    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Run all tasks due at `at` and report one result per registered task.
    ///
    /// Tasks are evaluated and executed sequentially in registration order,
    /// which is also the order of the returned results. A task whose action
    /// errors or panics is recorded as [`Outcome::Failed`] and the pass
    /// moves on to the next task; nothing a task does can abort the pass
    /// or escape this method. Tasks not due get [`Outcome::NotDue`],
    /// schedule-less tasks get [`Outcome::Disabled`], so the result vector
    /// always has one entry per registered task.
    pub async fn run_due(&self, at: DateTime<Utc>) -> Vec<ExecutionResult> {
        debug!(tasks = self.registry.len(), at = %at, "starting dispatch pass");

        let mut results = Vec::with_capacity(self.registry.len());
        for entry in self.registry.all() {
            let outcome = if entry.schedule().is_disabled() {
                debug!(task = %entry.name(), "disabled, skipping");
                Outcome::Disabled
            } else if !entry.schedule().is_due(&at) {
                Outcome::NotDue
            } else {
                execute(entry).await
            };

            results.push(ExecutionResult {
                task: entry.name().to_owned(),
                outcome,
            });
        }

        debug!(
            executed = results.iter().filter(|r| r.was_due()).count(),
            failed = results.iter().filter(|r| r.failed()).count(),
            "dispatch pass finished"
        );
        results
    }
}

/// Execute one due task, containing errors and panics.
///
/// The action runs inside its own `tokio::spawn` so a panic surfaces as a
/// `JoinError` here instead of unwinding through the pass.
async fn execute(entry: &RegisteredTask) -> Outcome {
    info!(task = %entry.name(), "running");

    let task = Arc::clone(entry.task());
    let handle = tokio::spawn(async move { task.process().await });

    match handle.await {
        Ok(Ok(())) => {
            info!(task = %entry.name(), "completed");
            Outcome::Completed
        }
        Ok(Err(e)) => {
            let cause = format!("{e:#}");
            error!(task = %entry.name(), "failed: {cause}");
            Outcome::Failed { cause }
        }
        Err(join_err) => {
            let cause = panic_cause(join_err);
            error!(task = %entry.name(), "failed: {cause}");
            Outcome::Failed { cause }
        }
    }
}

fn panic_cause(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return "task was cancelled".to_string();
    }
    let payload = err.into_panic();
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
