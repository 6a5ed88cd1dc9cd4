//! Error types shared across castedit crates.

use std::path::PathBuf;

/// Top-level error type for castedit operations that are not tied to a
/// specific stage (opening streams, loading config, argument checks).
#[derive(Debug, thiserror::Error)]
pub enum CasteditError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Input must not be a directory: {path}")]
    IsDirectory { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    PathIo {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias using CasteditError.
pub type CasteditResult<T> = Result<T, CasteditError>;

impl CasteditError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap an I/O error with the path it happened on.
    ///
    /// `NotFound` is promoted to [`CasteditError::FileNotFound`].
    pub fn path_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::PathIo { path, source }
        }
    }
}
