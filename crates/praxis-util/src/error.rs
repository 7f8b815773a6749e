//! Error types for the praxis helpers.
//!
//! Only the file helpers produce errors of their own; the retry and cache
//! wrappers are transparent to the wrapped operation's error type and never
//! convert it into this one.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail with a helper error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the helper utilities.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The path the failed operation was addressing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_error_reports_path_and_source() {
        let err = Error::Read {
            path: PathBuf::from("/no/such/file"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert_eq!(err.to_string(), "failed to read /no/such/file");
        assert_eq!(err.path(), std::path::Path::new("/no/such/file"));
        assert!(err.source().is_some());
    }
}
