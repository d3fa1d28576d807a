//! Error types for the khatma library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all plan store operations.
#[derive(Error, Debug)]
pub enum KhatmaError {
    /// Plan creation input rejected before anything was stored
    #[error("Invalid plan for field '{field}': {reason}")]
    InvalidPlanSpec { field: String, reason: String },
    /// Invalid input validation errors (references, confirmations)
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> KhatmaError {
        KhatmaError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for field-level validation errors.
pub struct FieldErrorBuilder {
    field: String,
    plan_spec: bool,
}

impl FieldErrorBuilder {
    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> KhatmaError {
        if self.plan_spec {
            KhatmaError::InvalidPlanSpec {
                field: self.field,
                reason: reason.into(),
            }
        } else {
            KhatmaError::InvalidInput {
                field: self.field,
                reason: reason.into(),
            }
        }
    }
}

impl KhatmaError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for rejected plan creation input.
    pub fn invalid_spec(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder {
            field: field.into(),
            plan_spec: true,
        }
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder {
            field: field.into(),
            plan_spec: false,
        }
    }

    /// Name of the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidPlanSpec { field, .. } | Self::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| KhatmaError::database(message).with_source(e))
    }
}

/// Result type alias for khatma operations
pub type Result<T> = std::result::Result<T, KhatmaError>;
