//! Whole-file JSON persistence for the ledger.
//!
//! The file is a single JSON object mapping item names to numbers, written with
//! 2-space indentation. Loads replace the ledger wholesale and never leave it
//! half-updated: the file is fully parsed before any state changes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ledger::Ledger;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("inventory file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access inventory file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed inventory file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Ledger {
    /// Replace the ledger with the contents of `path`.
    ///
    /// Returns `false` (and leaves the ledger untouched) if the file is
    /// missing, unreadable, or not a JSON object of numbers.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "error loading data");
                false
            }
        }
    }

    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
        let loaded: Ledger =
            serde_json::from_str(&contents).map_err(|e| PersistenceError::json(path, e))?;

        tracing::debug!(path = %path.display(), items = loaded.len(), "ledger loaded");
        *self = loaded;
        Ok(())
    }

    /// Write the whole ledger to `path`, overwriting any existing file.
    ///
    /// Returns `false` on any I/O failure.
    pub fn save(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_save(path) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "error saving data");
                false
            }
        }
    }

    pub fn try_save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(self).map_err(|e| PersistenceError::json(path, e))?;
        fs::write(path, json).map_err(|e| PersistenceError::io(path, e))?;

        tracing::debug!(path = %path.display(), items = self.len(), "ledger saved");
        Ok(())
    }
}
