use thiserror::Error;

/// Errors raised while parsing a cron expression.
///
/// All of these are registration-time failures: a schedule that parses once
/// never errors during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParseError {
    #[error("expected 5 fields (minute hour day-of-month month day-of-week), found {found}")]
    FieldCount { found: usize },

    #[error("invalid token '{token}' in {field} field")]
    InvalidToken { field: &'static str, token: String },

    #[error("value {value} out of range [{min},{max}] for {field} field")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u8,
        max: u8,
    },

    #[error("inverted range {low}-{high} in {field} field")]
    InvertedRange {
        field: &'static str,
        low: u8,
        high: u8,
    },

    #[error("step of zero in {field} field")]
    ZeroStep { field: &'static str },
}

/// Errors raised while registering tasks or building a dispatcher.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate task name '{0}'")]
    DuplicateTask(String),

    #[error("invalid schedule for task '{task}': {source}")]
    InvalidSchedule {
        task: String,
        #[source]
        source: ScheduleParseError,
    },

    #[error("failed to resolve config placeholder '{placeholder}' for task '{task}': {message}")]
    ConfigResolution {
        task: String,
        placeholder: String,
        message: String,
    },
}

/// Result alias used across the registry and builder.
pub type Result<T> = std::result::Result<T, RegistryError>;
