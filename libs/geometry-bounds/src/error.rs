//! # Error Types
//!
//! Errors raised while reading geometry bounds. Every variant carries the
//! path of the offending file so the operator can correct the input.
//!
//! ## Error Policy
//!
//! - All errors are terminal for one invocation
//! - Malformed records report their line (ASCII) or triangle record (binary)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while computing the bounds of a geometry file.
///
/// ## Example
///
/// ```rust
/// use geometry_bounds::{read_bounds, BoundsError};
///
/// match read_bounds("does/not/exist.stl") {
///     Err(BoundsError::GeometryNotFound { path, .. }) => {
///         assert!(path.ends_with("exist.stl"));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum BoundsError {
    /// The geometry file is missing or could not be opened.
    #[error("geometry file not found or unreadable: {}: {source}", path.display())]
    GeometryNotFound {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying open error.
        #[source]
        source: io::Error,
    },

    /// A record where coordinates are expected could not be parsed.
    #[error("{}:{line}: {message}", path.display())]
    GeometryParse {
        /// File containing the record.
        path: PathBuf,
        /// 1-based line (ASCII) or triangle record (binary).
        line: u64,
        /// What was wrong with the record.
        message: String,
    },

    /// The file contains no vertex coordinates.
    #[error("no vertex coordinates found in {}", path.display())]
    EmptyGeometry {
        /// File that was scanned.
        path: PathBuf,
    },

    /// Reading failed after the file was opened.
    #[error("I/O error while reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
}

impl BoundsError {
    /// Creates a parse error for the given record.
    pub fn parse(path: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        Self::GeometryParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for bounds operations.
pub type BoundsResult<T> = Result<T, BoundsError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages carry path and record.
    #[test]
    fn test_error_display() {
        let err = BoundsError::parse("model.stl", 12, "invalid coordinate `abc`");
        let text = err.to_string();
        assert!(text.contains("model.stl"));
        assert!(text.contains(":12:"));
        assert!(text.contains("abc"));

        let err = BoundsError::EmptyGeometry {
            path: PathBuf::from("empty.stl"),
        };
        assert!(err.to_string().contains("empty.stl"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoundsError>();
    }
}
