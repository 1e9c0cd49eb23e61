//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing source)
//! - 3: Data error (unknown location, malformed graph file, graph not loaded)

mod macros;

use thiserror::Error;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("no source location selected")]
    SourceNotSet,

    // Data errors (exit code 3)
    #[error("location not found: {name}")]
    LocationNotFound { name: String },

    #[error("no locations loaded")]
    GraphNotLoaded,

    #[error("malformed edge on line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a location name that is not registered
    pub fn not_found(name: impl Into<String>) -> Self {
        WaypathError::LocationNotFound { name: name.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a rejected line of the edge-list input
    pub fn malformed_edge(line: usize, reason: impl Into<String>) -> Self {
        WaypathError::MalformedEdge {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WaypathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_)
            | WaypathError::InvalidValue { .. }
            | WaypathError::SourceNotSet => ExitCode::Usage,

            WaypathError::LocationNotFound { .. }
            | WaypathError::GraphNotLoaded
            | WaypathError::MalformedEdge { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::FailedOperationWithTarget { .. }
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::SourceNotSet => "source_not_set",
            WaypathError::LocationNotFound { .. } => "location_not_found",
            WaypathError::GraphNotLoaded => "graph_not_loaded",
            WaypathError::MalformedEdge { .. } => "malformed_edge",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
