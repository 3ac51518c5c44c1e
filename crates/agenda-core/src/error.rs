//! Error types for the agenda library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all agenda operations.
///
/// Zero-row outcomes are reported as typed variants (or as `Ok(None)` from
/// lookup methods) so callers can always tell "nothing matched" apart from
/// "the query itself failed".
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Appointment not found for the given ID
    #[error("Appointment with ID {id} not found")]
    AppointmentNotFound { id: u64 },
    /// Contact name could not be resolved to a contact row
    #[error("Contact named '{name}' not found")]
    ContactNotFound { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AgendaError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AgendaError::database_error(message, e))
    }
}

/// Result type alias for agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;
