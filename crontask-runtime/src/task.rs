use std::future::Future;
use std::pin::Pin;

/// Trait for schedulable tasks
///
/// Implement this trait on your struct to make it registrable with a
/// [`TaskRegistry`](crate::TaskRegistry). The dispatcher calls
/// [`process`](CronTask::process) once per due occurrence.
///
/// # Example
///
/// ```rust
/// use crontask_runtime::CronTask;
/// use std::pin::Pin;
/// use std::future::Future;
///
/// struct NightlyBackup {
///     target: String,
/// }
///
/// impl CronTask for NightlyBackup {
///     fn name(&self) -> &str {
///         "backup"
///     }
///
///     fn schedule(&self) -> &str {
///         "0 2 * * *"
///     }
///
///     fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>> {
///         Box::pin(async move {
///             println!("backing up {}", self.target);
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait CronTask: Send + Sync {
    /// Task identity. Must be unique within a registry.
    fn name(&self) -> &str;

    /// Cron expression describing when the task is due.
    ///
    /// Returning an empty string disables the task: it stays registered and
    /// shows up in pass results, but is never evaluated or executed. The
    /// string may be a config placeholder like `${backup.cron}` when the
    /// dispatcher is built with a config source.
    fn schedule(&self) -> &str;

    /// Execute one occurrence of the task.
    ///
    /// A returned error (or a panic) is captured in the task's
    /// [`ExecutionResult`](crate::ExecutionResult) and never affects
    /// sibling tasks in the same pass.
    fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>>;
}
