//! Builder for creating and configuring Agenda instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Agenda;
use crate::{
    db::Database,
    error::{AgendaError, Result},
};

/// Builder for creating and configuring Agenda instances.
#[derive(Debug, Clone)]
pub struct AgendaBuilder {
    database_path: Option<PathBuf>,
}

impl AgendaBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/agenda/agenda.db` or `~/.local/share/agenda/agenda.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured agenda handle, initializing the schema once.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::FileSystem` if the database path is invalid
    /// Returns `AgendaError::Database` if database initialization fails
    pub async fn build(self) -> Result<Agenda> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AgendaError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), AgendaError>(())
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Agenda::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("agenda")
            .place_data_file("agenda.db")
            .map_err(|e| AgendaError::XdgDirectory(e.to_string()))
    }
}

impl Default for AgendaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
