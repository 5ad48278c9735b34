//! Asset probing errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why an asset could not be used.
///
/// These are always recovered where they occur (placeholder face, silent
/// sound) and only logged.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    Missing(PathBuf),

    #[error("unsupported asset type: {0}")]
    Unsupported(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
