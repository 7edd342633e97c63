//! Error types for corpus loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering or reading source files.
///
/// None of these abort a build: the loader records them in its report and
/// continues with the remaining roots and files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A configured source root does not exist.
    #[error("Source root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A discovered file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of the configured source extensions.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// The path has no extension at all.
    #[error("No file extension: {}", .0.display())]
    NoExtension(PathBuf),
}

impl LoadError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
