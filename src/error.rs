//! Error types for the media index.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media index.
#[derive(Error, Debug)]
pub enum Error {
    // Scan errors
    #[error(transparent)]
    Scan(#[from] ScanError),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// What went wrong while walking a library directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    NotFound,
    PermissionDenied,
    IoFailure,
    Canceled,
}

impl std::fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanErrorKind::NotFound => write!(f, "path not found"),
            ScanErrorKind::PermissionDenied => write!(f, "permission denied"),
            ScanErrorKind::IoFailure => write!(f, "I/O failure"),
            ScanErrorKind::Canceled => write!(f, "scan canceled"),
        }
    }
}

/// A traversal failure. Aborts the whole scan; no partial listing is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {}", .path.display())]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub path: PathBuf,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn canceled(path: &Path) -> Self {
        Self::new(ScanErrorKind::Canceled, path)
    }

    /// Build a scan error from a walkdir failure, falling back to `root` when
    /// walkdir does not know which path failed.
    pub fn from_walk(err: &walkdir::Error, root: &Path) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        let kind = match err.io_error().map(|e| e.kind()) {
            Some(std::io::ErrorKind::NotFound) => ScanErrorKind::NotFound,
            Some(std::io::ErrorKind::PermissionDenied) => ScanErrorKind::PermissionDenied,
            // Symlink loops and other failures without an io kind.
            _ => ScanErrorKind::IoFailure,
        };
        Self { kind, path }
    }
}
