//! Error types for modlink-core

use std::path::PathBuf;

/// Result type for modlink-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving modules or generating descriptors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No module manifest exists at the configured path.
    #[error("module manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// A module manifest exists but its contents are invalid.
    #[error("failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// A per-module config file exists but its contents are invalid.
    #[error("failed to parse module config {path}: {message}")]
    ModuleConfigParse { path: PathBuf, message: String },

    /// A generated descriptor could not be written to disk.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error reading module files.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn manifest_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn module_config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ModuleConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
