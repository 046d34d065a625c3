//! I/O errors raised while feeding a digest from a reader or file

use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O error with the input it happened on, when known
#[derive(Error, Debug)]
#[error("{}", describe(self))]
pub struct IoError {
    pub kind: IoErrorKind,
    pub path: Option<PathBuf>,
    #[source]
    pub source: Option<std::io::Error>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoErrorKind {
    /// Input file does not exist
    FileNotFound,
    /// Input exists but cannot be opened or read
    PermissionDenied,
    /// Reading from an already open input failed
    Read,
}

impl IoError {
    /// Create a file not found error
    pub fn file_not_found(path: &Path) -> Self {
        Self {
            kind: IoErrorKind::FileNotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: &Path, source: std::io::Error) -> Self {
        Self {
            kind: IoErrorKind::PermissionDenied,
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    /// Classify a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Read,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Attach the path of the input being read
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn describe(error: &IoError) -> String {
    let what = match error.kind {
        IoErrorKind::FileNotFound => "File not found",
        IoErrorKind::PermissionDenied => "Permission denied",
        IoErrorKind::Read => "Read failed",
    };

    match (&error.path, &error.source) {
        (Some(path), Some(source)) => format!("{what}: {} ({source})", path.display()),
        (Some(path), None) => format!("{what}: {}", path.display()),
        (None, Some(source)) => format!("{what}: {source}"),
        (None, None) => what.to_string(),
    }
}
