//! Persistence errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing save files.
///
/// Gameplay never sees these: loads fall back to defaults and saves are
/// logged and dropped. They surface only through the fallible `JsonStore`
/// methods.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// File the error is about.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            StoreError::Io { path, .. } | StoreError::Json { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
