use serde::Serialize;

/// What happened to one task during one dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The task was due and its action completed.
    Completed,
    /// The task was due; its action returned an error or panicked.
    Failed { cause: String },
    /// The task has a schedule but it did not match the pass timestamp.
    NotDue,
    /// The task has no schedule and is never evaluated.
    Disabled,
}

/// Per-task record of a dispatch pass.
///
/// `run_due` emits exactly one of these per registered task, in
/// registration order. They are created during the pass, handed to the
/// caller for reporting, and not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub task: String,
    pub outcome: Outcome,
}

impl ExecutionResult {
    /// Whether the task's schedule matched the pass timestamp.
    pub fn was_due(&self) -> bool {
        matches!(self.outcome, Outcome::Completed | Outcome::Failed { .. })
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}
