//! Error types for rollbuf.
//!
//! Running out of data is never an error here. Exhaustion shows up as an
//! empty window, an unavailable byte, or a short skip count.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or consuming a window buffer.
#[derive(Debug, Error)]
pub enum WindowError {
    /// The byte source could not be acquired (e.g. a bad path).
    #[error("source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source reported an error other than exhaustion during refill.
    #[error("read failure: {0}")]
    Read(#[source] io::Error),

    /// The source's release operation failed.
    #[error("close failure: {0}")]
    Close(#[source] io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl WindowError {
    /// Returns the underlying I/O error, if this error carries one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            WindowError::SourceUnavailable { source, .. } => Some(source),
            WindowError::Read(e) | WindowError::Close(e) => Some(e),
            WindowError::InvalidConfig { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WindowError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = WindowError::InvalidConfig {
            message: "window_size must be non-zero",
        };
        assert_eq!(
            err.to_string(),
            "invalid config: window_size must be non-zero"
        );

        let err = WindowError::Read(io::Error::other("disk on fire"));
        assert!(err.to_string().contains("read failure"));
    }

    #[test]
    fn test_source_unavailable_carries_path() {
        let err = WindowError::SourceUnavailable {
            path: PathBuf::from("/no/such/file"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/no/such/file"));
        assert!(err.source().is_some());
        assert_eq!(err.io_error().map(|e| e.kind()), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_invalid_config_has_no_io_error() {
        let err = WindowError::InvalidConfig { message: "x" };
        assert!(err.io_error().is_none());
        assert!(err.source().is_none());
    }
}
