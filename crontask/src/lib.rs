//! # Crontask - Externally Triggered Cron Dispatch for Rust
//!
//! This library evaluates a registry of cron-scheduled tasks and runs the
//! due ones, one pass per call. It deliberately has no timer loop of its
//! own: an external trigger (OS cron, a systemd timer, a container
//! sidecar) calls [`Dispatcher::run_due`] on its own cadence,
//! conventionally once per minute.
//!
//! ## Features
//!
//! - **Cron expressions**: five-field syntax with lists, ranges, and steps
//! - **Disabled tasks**: an empty schedule string parks a task without
//!   unregistering it
//! - **Failure isolation**: a task that errors or panics is recorded as
//!   failed; the rest of the pass runs regardless
//! - **Deterministic reporting**: one [`ExecutionResult`] per registered
//!   task per pass, in registration order
//! - **Config support**: schedule strings like `${backup.cron}` resolve
//!   against a TOML/YAML config file
//!
//! ## Quick Start
//!
//! ```rust
//! use crontask::{CronTask, DispatcherBuilder};
//! use std::future::Future;
//! use std::pin::Pin;
//!
//! struct NightlyBackup;
//!
//! impl CronTask for NightlyBackup {
//!     fn name(&self) -> &str {
//!         "backup"
//!     }
//!
//!     fn schedule(&self) -> &str {
//!         "0 2 * * *"
//!     }
//!
//!     fn process(&self) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + '_>> {
//!         Box::pin(async move {
//!             // do the backup
//!             Ok(())
//!         })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dispatcher = DispatcherBuilder::new()
//!         .register(NightlyBackup)
//!         .build()?;
//!
//!     // The external trigger calls this once per minute.
//!     for result in dispatcher.run_due(chrono::Utc::now()).await {
//!         println!("{}: {:?}", result.task, result.outcome);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Create `application.toml`:
//!
//! ```toml
//! [backup]
//! cron = "0 2 * * *"
//! ```
//!
//! and build with `DispatcherBuilder::with_toml("application.toml")`; a
//! task whose `schedule()` returns `"${backup.cron}"` picks the expression
//! up from there. Environment variables with the `CRONTASK_` prefix
//! override file values, and `${key:default}` supplies a fallback. A
//! placeholder that resolves to an empty string disables the task.

// Re-export core types
pub use crontask_runtime::{
    CronExpr, CronTask, Dispatcher, DispatcherBuilder, ExecutionResult, Field, Outcome,
    RegisteredTask, RegistryError, Schedule, ScheduleParseError, TaskRegistry,
};

// Make the runtime available to hosts that want the config helpers
pub use crontask_runtime;
