//! Unified error hierarchy for TrainStats
//!
//! Invalid-input failures (unknown package codes, arity mismatches and
//! degenerate numeric values) live in [`InputError`]; everything the outer
//! surface can hit (batch files, configuration, serialization) is wrapped by
//! [`TrainStatsError`].

use thiserror::Error;

use crate::models::ActivityType;

/// Top-level error type for all TrainStats operations
#[derive(Debug, Error)]
pub enum TrainStatsError {
    /// Package data rejected by the factory or a workout constructor
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON export errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Invalid-input errors raised while building a workout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Package code outside of SWM / RUN / WLK
    #[error("Unknown workout code: {code:?}")]
    UnknownCode { code: String },

    /// Number of raw values does not match the constructor
    #[error("{activity} expects {expected} values, got {actual}")]
    ArityMismatch {
        activity: ActivityType,
        expected: usize,
        actual: usize,
    },

    /// A record without a workout code
    #[error("Missing workout code")]
    MissingCode,

    /// A raw field that does not parse as a number
    #[error("'{value}' is not a number: {reason}")]
    NotANumber { value: String, reason: String },

    /// A value that would make the formulas degenerate
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Result type alias for TrainStats operations
pub type Result<T> = std::result::Result<T, TrainStatsError>;

impl TrainStatsError {
    /// Whether this error belongs to the invalid-input kind
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TrainStatsError::InvalidInput(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainStatsError::InvalidInput(_) => ErrorSeverity::Warning,
            TrainStatsError::Configuration(_) => ErrorSeverity::Error,
            TrainStatsError::Serialization(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainStatsError::InvalidInput(InputError::UnknownCode { code }) => {
                format!(
                    "Unknown workout code '{}'. Use one of: SWM, RUN, WLK.",
                    code
                )
            }
            TrainStatsError::InvalidInput(InputError::ArityMismatch {
                activity,
                expected,
                ..
            }) => {
                format!(
                    "{} ({}) needs exactly {} values: {}.",
                    activity,
                    activity.code(),
                    expected,
                    activity.field_names().join(", ")
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
