//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Filesystem error while reading or writing a specific file.
    #[error("I/O error at '{path}': {source}")]
    File {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number, 0 when the problem is not tied to a line.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from a writer or reader without a known path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }

    /// Attach `path` to a bare I/O error, mapping `NotFound` to
    /// [`IoError::FileNotFound`].
    #[must_use]
    pub fn at_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::File { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_path_maps_not_found() {
        let err = IoError::at_path(
            std::io::Error::from(std::io::ErrorKind::NotFound),
            "missing.obj",
        );
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn at_path_keeps_other_errors() {
        let err = IoError::at_path(
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            "/readonly/seg_1.obj",
        );
        let msg = format!("{err}");
        assert!(msg.contains("/readonly/seg_1.obj"));
        assert!(matches!(err, IoError::File { .. }));
    }

    #[test]
    fn invalid_content_display() {
        let err = IoError::invalid_content(12, "bad face");
        assert_eq!(format!("{err}"), "invalid file content at line 12: bad face");
    }
}
