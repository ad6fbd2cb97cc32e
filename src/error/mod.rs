//! Error types for moneyfmt.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! Formatting itself never surfaces here: type mismatches and guard
//! mismatches degrade to the blank placeholder, invalid encodings and
//! empty invocations to an absent result. The variants below cover the
//! surrounding machinery only (database access, SQL execution, CLI
//! argument validation, output encoding).
//!
//! Each error has a stable code (e.g. `MFMT-D001`) for programmatic
//! handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration issues (invalid flags, bad argument combinations).
    Configuration,
    /// Database issues (missing files, SQL errors).
    Database,
    /// Internal errors (bugs, unexpected state, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Database => "Database error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Configuration => "C",
            Self::Database => "D",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Database file not found
    DatabaseNotFound = 2,
    /// SQL parse or execution error
    SqlError = 3,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        Self::from(u8::from(code))
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(u8::from(code))
    }
}

// =============================================================================
// Error Type
// =============================================================================

/// Main error type for moneyfmt operations.
#[derive(Error, Debug)]
pub enum MoneyfmtError {
    /// Database file not found at the supplied path.
    #[error("database file not found: {path}")]
    DatabaseNotFound { path: String },

    /// SQLite error (prepare, execute, or function registration).
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Invalid CLI argument combination.
    #[error("invalid argument for {flag}: {message}")]
    InvalidArgument { flag: String, message: String },

    /// JSON output encoding failure.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoneyfmtError {
    /// Returns the category for this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::DatabaseNotFound { .. } | Self::Sqlite(_) => ErrorCategory::Database,
            Self::InvalidArgument { .. } => ErrorCategory::Configuration,
            Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DatabaseNotFound { .. } => "MFMT-D001",
            Self::Sqlite(_) => "MFMT-D002",
            Self::InvalidArgument { .. } => "MFMT-C001",
            Self::Json(_) => "MFMT-X001",
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::DatabaseNotFound { .. } => ExitCode::DatabaseNotFound,
            Self::Sqlite(_) => ExitCode::SqlError,
            Self::InvalidArgument { .. } | Self::Json(_) => ExitCode::GeneralError,
        }
    }
}

/// Result alias using [`MoneyfmtError`].
pub type Result<T> = std::result::Result<T, MoneyfmtError>;
