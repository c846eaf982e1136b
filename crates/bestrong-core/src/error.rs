//! Error types for the workout planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
///
/// Variants fall into two classes. Caller-correctable failures
/// ([`Configuration`](PlannerError::Configuration),
/// [`Validation`](PlannerError::Validation) and
/// [`InvalidInput`](PlannerError::InvalidInput)) map to a 400 status; all
/// others are unexpected and map to 500. See [`PlannerError::status_code`].
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Requested goal, fitness level or data file is not registered/usable
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Requested schedule cannot be built from the template
    #[error("Invalid workout schedule: {message}")]
    Validation { message: String },
    /// The catalog cannot supply enough distinct exercises
    #[error(
        "Cannot select {requested} distinct exercises: {reason} ({available} distinct exercises in catalog)"
    )]
    SelectionExhausted {
        requested: usize,
        available: usize,
        reason: String,
    },
    /// Plan composition produced nothing usable
    #[error("Generation error: {message}")]
    Generation { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Workout not found for the given ID
    #[error("Workout with ID {id} not found")]
    WorkoutNotFound { id: u64 },
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
    /// Background task failed to complete
    #[error("Task join error: {0}")]
    TaskJoin(String),
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
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::Validation { .. } | Self::InvalidInput { .. }
        )
    }

    /// HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::WorkoutNotFound { .. } => 404,
            e if e.is_client_error() => 400,
            _ => 500,
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
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
