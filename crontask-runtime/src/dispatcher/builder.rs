use super::dispatcher::Dispatcher;
use crate::config::{load_toml_config, load_yaml_config, resolve_config_value};
use crate::error::{RegistryError, Result};
use crate::registry::TaskRegistry;
use crate::task::CronTask;
use config::Config;
use std::sync::Arc;
use tracing::info;

/// Builder for the dispatcher
///
/// Collects tasks and an optional config source, then `build()` resolves
/// schedule placeholders, parses every expression, and fails fast on any
/// bad registration. Nothing runs until the host calls
/// [`Dispatcher::run_due`].
pub struct DispatcherBuilder {
    config: Arc<Config>,
    tasks: Vec<Arc<dyn CronTask>>,
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherBuilder {
    /// Create a new dispatcher builder with default config (empty)
    pub fn new() -> Self {
        Self {
            config: Arc::new(Config::default()),
            tasks: Vec::new(),
        }
    }

    /// Create with TOML config file
    ///
    /// # Panics
    ///
    /// Panics if the config file cannot be loaded or parsed.
    /// This is intentional as configuration errors should be caught early during setup.
    pub fn with_toml(path: &str) -> Self {
        let config = load_toml_config(path)
            .unwrap_or_else(|e| panic!("Failed to load TOML config from '{}': {}", path, e));
        Self {
            config: Arc::new(config),
            tasks: Vec::new(),
        }
    }

    /// Create with YAML config file
    ///
    /// # Panics
    ///
    /// Panics if the config file cannot be loaded or parsed.
    /// This is intentional as configuration errors should be caught early during setup.
    pub fn with_yaml(path: &str) -> Self {
        let config = load_yaml_config(path)
            .unwrap_or_else(|e| panic!("Failed to load YAML config from '{}': {}", path, e));
        Self {
            config: Arc::new(config),
            tasks: Vec::new(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tasks: Vec::new(),
        }
    }

    /// Add a task to be registered at build time.
    pub fn register<T>(mut self, task: T) -> Self
    where
        T: CronTask + 'static,
    {
        self.tasks.push(Arc::new(task));
        self
    }

    /// Add an already-shared task.
    pub fn register_arc(mut self, task: Arc<dyn CronTask>) -> Self {
        self.tasks.push(task);
        self
    }

    /// Build the dispatcher.
    ///
    /// For each task, the schedule string is resolved against the config
    /// (plain strings pass through) and registered; a placeholder that
    /// resolves to an empty string disables the task the same way a
    /// literal empty schedule does. Any resolution failure, malformed
    /// expression, or duplicate name aborts the build.
    pub fn build(self) -> Result<Dispatcher> {
        let mut registry = TaskRegistry::new();

        for task in self.tasks {
            let raw = task.schedule().to_owned();
            let expression = resolve_config_value(&raw, &self.config).map_err(|e| {
                RegistryError::ConfigResolution {
                    task: task.name().to_owned(),
                    placeholder: raw.clone(),
                    message: e.to_string(),
                }
            })?;
            registry.register_with_expression(task, &expression)?;
        }

        info!(tasks = registry.len(), "dispatcher built");
        Ok(Dispatcher::new(registry))
    }
}
