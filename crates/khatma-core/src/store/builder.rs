//! Builder for opening a [`PlanStore`] over the SQLite database.

use std::path::{Path, PathBuf};

use log::debug;

use super::PlanStore;
use crate::{
    db::Database,
    error::{KhatmaError, Result},
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/khatma/khatma.db` or `~/.local/share/khatma/khatma.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database and loads the persisted plans.
    ///
    /// # Errors
    ///
    /// Returns `KhatmaError::Configuration` if the path is a directory,
    /// `KhatmaError::FileSystem` if the parent directory cannot be
    /// created, `KhatmaError::XdgDirectory` if no default location exists,
    /// and `KhatmaError::Database` if the database cannot be initialized.
    pub fn build(self) -> Result<PlanStore<Database>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if db_path.is_dir() {
            return Err(KhatmaError::Configuration {
                message: format!("Database path {} is a directory", db_path.display()),
            });
        }

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| KhatmaError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening plan database at {}", db_path.display());
        PlanStore::open(Database::new(&db_path)?)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("khatma")
            .place_data_file("khatma.db")
            .map_err(|e| KhatmaError::XdgDirectory(e.to_string()))
    }
}
