//! Crontask Runtime - Core runtime for cron task dispatch
//!
//! This crate provides the schedule parser, task registry, and dispatcher
//! behind the `crontask` facade.

mod config;
mod dispatcher;
mod error;
mod registry;
mod schedule;
mod task;

// Re-export public API
pub use config::{load_toml_config, load_yaml_config, resolve_config_value};
pub use dispatcher::{Dispatcher, DispatcherBuilder, ExecutionResult, Outcome};
pub use error::{RegistryError, ScheduleParseError};
pub use registry::{RegisteredTask, TaskRegistry};
pub use schedule::{CronExpr, Field, Schedule};
pub use task::CronTask;
