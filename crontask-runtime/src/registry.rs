use crate::error::{RegistryError, Result};
use crate::schedule::Schedule;
use crate::task::CronTask;
use std::sync::Arc;
use tracing::info;

/// A task together with its parsed schedule, as held by the registry.
pub struct RegisteredTask {
    pub(crate) name: String,
    pub(crate) schedule: Schedule,
    pub(crate) task: Arc<dyn CronTask>,
}

impl RegisteredTask {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn task(&self) -> &Arc<dyn CronTask> {
        &self.task
    }
}

/// Ordered collection of registered tasks.
///
/// Registration order is preserved and defines dispatch order, so pass
/// results come out in a deterministic, reproducible sequence. Tasks are
/// registered at startup and the set is not mutated afterward; there is no
/// removal operation.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Vec<RegisteredTask>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task, parsing its schedule expression.
    ///
    /// Fails fast: a malformed expression or a name already taken by an
    /// earlier registration is an error here, not at dispatch time.
    pub fn register(&mut self, task: Arc<dyn CronTask>) -> Result<()> {
        let expression = task.schedule().to_owned();
        self.register_with_expression(task, &expression)
    }

    /// Register a task with an expression resolved elsewhere (e.g. after
    /// config placeholder substitution by the dispatcher builder).
    pub fn register_with_expression(
        &mut self,
        task: Arc<dyn CronTask>,
        expression: &str,
    ) -> Result<()> {
        let name = task.name().to_owned();

        if self.tasks.iter().any(|t| t.name == name) {
            return Err(RegistryError::DuplicateTask(name));
        }

        let schedule = Schedule::parse(expression).map_err(|source| {
            RegistryError::InvalidSchedule {
                task: name.clone(),
                source,
            }
        })?;

        if schedule.is_disabled() {
            info!(task = %name, "registered (disabled)");
        } else {
            info!(task = %name, expression = %expression, "registered");
        }

        self.tasks.push(RegisteredTask {
            name,
            schedule,
            task,
        });
        Ok(())
    }

    /// All registered tasks, in registration order.
    pub fn all(&self) -> &[RegisteredTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
