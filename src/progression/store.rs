//! JSON file store.
//!
//! One JSON object per file, all in one directory. Writes go to a
//! temporary file first and are renamed into place, so a crash mid-write
//! leaves the previous file intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{Result, StoreError};

/// Directory of JSON save files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Use `dir` for save files. The directory is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a save file.
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read and parse `name`. `Ok(None)` if the file does not exist.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let value = serde_json::from_str(&text).map_err(|source| StoreError::Json { path, source })?;
        Ok(Some(value))
    }

    /// Read `name`, falling back to `T::default()` when the file is missing
    /// or unreadable. A corrupt file is replaced with the default.
    pub fn load_or_default<T: DeserializeOwned + Serialize + Default>(&self, name: &str) -> T {
        match self.load(name) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(file = name, "no save file, using defaults");
                T::default()
            }
            Err(e) => {
                warn!(file = name, error = %e, "unreadable save file, resetting to defaults");
                let value = T::default();
                self.save_best_effort(name, &value);
                value
            }
        }
    }

    /// Write `value` to `name`.
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path(name);
        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        fs::write(&temp_path, json).map_err(|source| StoreError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "saved");
        Ok(())
    }

    /// Write `value` to `name`, logging failures instead of returning them.
    /// Returns whether the write succeeded.
    pub fn save_best_effort<T: Serialize>(&self, name: &str, value: &T) -> bool {
        match self.save(name, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "save failed, continuing without it");
                false
            }
        }
    }
}
