//! Error types and exit codes for markbook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (duplicate id, missing student, corrupt roster)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the markbook binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - duplicate id, missing student, corrupt roster (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during markbook operations
#[derive(Error, Debug)]
pub enum MarkbookError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("student already exists: {id}")]
    DuplicateId { id: String },

    #[error("student not found: {id}")]
    StudentNotFound { id: String },

    #[error("unknown subject: {subject}")]
    UnknownSubject { subject: String },

    #[error("invalid roster file {path:?}: {reason}")]
    InvalidRoster { path: PathBuf, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MarkbookError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MarkbookError::UnknownFormat(_) | MarkbookError::UsageError(_) => ExitCode::Usage,

            // Data errors
            MarkbookError::DuplicateId { .. }
            | MarkbookError::StudentNotFound { .. }
            | MarkbookError::UnknownSubject { .. }
            | MarkbookError::InvalidRoster { .. }
            | MarkbookError::InvalidConfig { .. } => ExitCode::Data,

            // Generic failures
            MarkbookError::Io(_)
            | MarkbookError::Json(_)
            | MarkbookError::Toml(_)
            | MarkbookError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MarkbookError::UnknownFormat(_) => "unknown_format",
            MarkbookError::UsageError(_) => "usage_error",
            MarkbookError::DuplicateId { .. } => "duplicate_id",
            MarkbookError::StudentNotFound { .. } => "student_not_found",
            MarkbookError::UnknownSubject { .. } => "unknown_subject",
            MarkbookError::InvalidRoster { .. } => "invalid_roster",
            MarkbookError::InvalidConfig { .. } => "invalid_config",
            MarkbookError::Io(_) => "io_error",
            MarkbookError::Json(_) => "json_error",
            MarkbookError::Toml(_) => "toml_error",
            MarkbookError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for markbook operations
pub type Result<T> = std::result::Result<T, MarkbookError>;
