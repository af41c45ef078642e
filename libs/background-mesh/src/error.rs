//! # Background Mesh Errors
//!
//! Error types for planning and exporting the background mesh.

use std::io;
use std::path::PathBuf;

use geometry_bounds::{Axis, BoundsError};
use thiserror::Error;

/// Errors raised by the planner. All are caused by invalid input values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A requested cell size is zero, negative, or not finite.
    #[error("invalid cell size for {axis} axis: {value} (must be a positive number)")]
    InvalidGridSize { axis: Axis, value: f64 },

    /// The bounding box is inverted or has non-finite bounds.
    #[error("invalid bounding box on {axis} axis: min {min} > max {max} or not finite")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    /// The margin vanished in floating point, leaving a zero-width axis.
    #[error("{axis} axis has no width after adding the margin at {at} (cell size {cell_size} is below the coordinate resolution)")]
    DegenerateAxis { axis: Axis, at: f64, cell_size: f64 },

    /// The axis would need more cells than a block can address.
    #[error("{axis} axis needs {cells:.0} cells (max: {max})")]
    TooManyCells { axis: Axis, cells: f64, max: u32 },
}

/// Errors raised while writing a plan to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory does not exist or is not a directory.
    #[error("output directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// Serializing or writing the output failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any failure of the read → plan → export pipeline.
#[derive(Debug, Error)]
pub enum BackgroundMeshError {
    /// Reading the geometry failed.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// Planning the grid failed.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Writing the plan failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type alias for planning.
pub type PlanResult<T> = Result<T, PlanError>;

/// Result type alias for export.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_error_names_axis() {
        let err = PlanError::InvalidGridSize {
            axis: Axis::Y,
            value: -0.5,
        };
        let text = err.to_string();
        assert!(text.contains("y axis"));
        assert!(text.contains("-0.5"));
    }

    #[test]
    fn test_bounds_error_names_axis() {
        let err = PlanError::InvalidBounds {
            axis: Axis::Z,
            min: 2.0,
            max: 1.0,
        };
        assert!(err.to_string().contains("z axis"));
    }

    #[test]
    fn test_degenerate_axis_error_names_axis() {
        let err = PlanError::DegenerateAxis {
            axis: Axis::Z,
            at: 1.0e6,
            cell_size: 1.0e-12,
        };
        let text = err.to_string();
        assert!(text.contains("z axis"));
        assert!(text.contains("1000000"));
    }

    #[test]
    fn test_pipeline_error_is_transparent() {
        let err: BackgroundMeshError = PlanError::InvalidGridSize {
            axis: Axis::X,
            value: 0.0,
        }
        .into();
        assert!(err.to_string().starts_with("invalid cell size for x axis"));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlanError>();
        assert_send_sync::<ExportError>();
        assert_send_sync::<BackgroundMeshError>();
    }
}
