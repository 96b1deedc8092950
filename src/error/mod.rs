//! Error types for slurprs.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur while loading or splitting a file.
///
/// Every failure is detected at the point of occurrence and returned
/// immediately; no retries are attempted. Any buffer or line table
/// allocated during a failed call is dropped before the error is
/// returned, so no allocation outlives a failure.
#[derive(Debug)]
pub enum LoadError {
    /// The supplied path was empty.
    EmptyPath,

    /// An I/O error occurred while opening, sizing, or reading the file.
    Io(std::io::Error),

    /// The memory required for the call exceeds the configured limit.
    ///
    /// Raised before any allocation is attempted. For line splitting the
    /// limit covers the text buffer and the line table together.
    SizeLimitExceeded {
        /// Total bytes the call would need to allocate.
        required: u64,
        /// The configured limit.
        max_size: u64,
    },

    /// An allocation was refused by the allocator.
    ///
    /// Note: failing to *shrink* an over-sized buffer after carriage
    /// return removal is not an error; the larger buffer is returned.
    OutOfMemory,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::EmptyPath => write!(f, "empty file path"),
            LoadError::Io(e) => write!(f, "io error: {}", e),
            LoadError::SizeLimitExceeded { required, max_size } => {
                write!(
                    f,
                    "size limit exceeded: {} bytes required (max {})",
                    required, max_size
                )
            }
            LoadError::OutOfMemory => write!(f, "out of memory"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<TryReserveError> for LoadError {
    fn from(_: TryReserveError) -> Self {
        LoadError::OutOfMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: LoadError = io_err.into();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_io_error_source() {
        let err = LoadError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "x"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display() {
        let err = LoadError::SizeLimitExceeded {
            required: 100,
            max_size: 50,
        };
        assert!(err.to_string().contains("size limit exceeded"));

        assert_eq!(LoadError::EmptyPath.to_string(), "empty file path");
        assert_eq!(LoadError::OutOfMemory.to_string(), "out of memory");
    }
}
