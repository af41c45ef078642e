//! Centralized configuration values shared across the background mesh
//! workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// MARGIN CONSTANTS
// =============================================================================

/// Fraction of an axis extent added as margin on each side of the bounding
/// box.
///
/// `0.05` per side matches scaling the box by 1.1 about its centre.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MARGIN_FRACTION;
/// let extent = 2.0;
/// assert!((extent * (1.0 + 2.0 * DEFAULT_MARGIN_FRACTION) - 2.2).abs() < 1e-12);
/// ```
pub const DEFAULT_MARGIN_FRACTION: f64 = 0.05;

/// Lower bound for the per-side margin, expressed in requested cell sizes.
///
/// Keeps flat axes from collapsing into a zero-width slab: a zero-extent axis
/// ends up exactly one requested cell thick.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MIN_MARGIN_CELLS;
/// let cell_size = 0.1;
/// assert_eq!(2.0 * DEFAULT_MIN_MARGIN_CELLS * cell_size, cell_size);
/// ```
pub const DEFAULT_MIN_MARGIN_CELLS: f64 = 0.5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Relative tolerance used when turning `extent / cell_size` into a cell
/// count.
///
/// A ratio within this tolerance of an integer is treated as that integer, so
/// floating-point noise never adds an extra cell.
///
/// # Examples
/// ```
/// use config::constants::CELL_COUNT_SNAP_TOLERANCE;
/// let ratio: f64 = 0.3 / 0.1; // 2.9999999999999996
/// assert!((ratio - 3.0).abs() <= CELL_COUNT_SNAP_TOLERANCE * 3.0);
/// ```
pub const CELL_COUNT_SNAP_TOLERANCE: f64 = 1.0e-9;

/// Smallest cell count the planner produces on any axis.
///
/// # Examples
/// ```
/// use config::constants::MIN_CELL_COUNT;
/// assert_eq!(0_u32.max(MIN_CELL_COUNT), 1);
/// ```
pub const MIN_CELL_COUNT: u32 = 1;

/// Number of vertices each rayon task folds before partial bounding boxes are
/// merged.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_CHUNK_SIZE;
/// assert!(PARALLEL_CHUNK_SIZE >= 1024);
/// ```
pub const PARALLEL_CHUNK_SIZE: usize = 16 * 1024;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Directory the blockMesh dictionary is written into, relative to the case.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SYSTEM_DIR;
/// assert_eq!(DEFAULT_SYSTEM_DIR, "system");
/// ```
pub const DEFAULT_SYSTEM_DIR: &str = "system";

/// File name of the OpenFOAM block mesh dictionary.
pub const BLOCK_MESH_DICT_FILE_NAME: &str = "blockMeshDict";

/// File name used when the plan is exported as JSON.
pub const JSON_SPEC_FILE_NAME: &str = "backgroundMesh.json";

/// OpenFOAM version printed in the dictionary banner.
pub const OPENFOAM_VERSION: &str = "v2312";

// =============================================================================
// MARGIN POLICY
// =============================================================================

/// Margin applied around a bounding box before it is gridded.
///
/// The per-side margin on an axis is
/// `max(extent * margin_fraction, cell_size * min_margin_cells)`.
///
/// # Examples
/// ```
/// use config::constants::MarginPolicy;
/// let policy = MarginPolicy::new(0.1, 1.0).expect("valid policy");
/// assert_eq!(policy.margin(10.0, 0.5), 1.0);
/// assert_eq!(policy.margin(1.0, 0.5), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginPolicy {
    /// Fraction of the axis extent added on each side.
    pub margin_fraction: f64,
    /// Minimum margin on each side, in requested cell sizes.
    pub min_margin_cells: f64,
}

impl MarginPolicy {
    /// Builds a policy enforcing strict validation of both parameters.
    ///
    /// `margin_fraction` may be zero (margin then comes from the floor alone);
    /// `min_margin_cells` must be strictly positive so every axis grows.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, MarginPolicy};
    /// assert_eq!(
    ///     MarginPolicy::new(0.05, 0.0).unwrap_err(),
    ///     ConfigError::InvalidMinMarginCells(0.0)
    /// );
    /// ```
    pub fn new(margin_fraction: f64, min_margin_cells: f64) -> Result<Self, ConfigError> {
        if !margin_fraction.is_finite() || margin_fraction < 0.0 {
            return Err(ConfigError::InvalidMarginFraction(margin_fraction));
        }
        if !min_margin_cells.is_finite() || min_margin_cells <= 0.0 {
            return Err(ConfigError::InvalidMinMarginCells(min_margin_cells));
        }
        Ok(Self {
            margin_fraction,
            min_margin_cells,
        })
    }

    /// Per-side margin for an axis of the given extent and cell size.
    #[inline]
    pub fn margin(&self, extent: f64, cell_size: f64) -> f64 {
        (extent * self.margin_fraction).max(cell_size * self.min_margin_cells)
    }
}

impl Default for MarginPolicy {
    fn default() -> Self {
        Self {
            margin_fraction: DEFAULT_MARGIN_FRACTION,
            min_margin_cells: DEFAULT_MIN_MARGIN_CELLS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the margin fraction is negative or not finite.
    InvalidMarginFraction(f64),
    /// Raised when the minimum margin is zero, negative, or not finite.
    InvalidMinMarginCells(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMarginFraction(value) => {
                write!(f, "margin_fraction must be finite and >= 0: {value}")
            }
            ConfigError::InvalidMinMarginCells(value) => {
                write!(f, "min_margin_cells must be finite and > 0: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Smallest cell count whose cells cover `extent` at `cell_size`.
///
/// Rounds up, except that a ratio within [`CELL_COUNT_SNAP_TOLERANCE`] of an
/// integer snaps to that integer. Never returns less than [`MIN_CELL_COUNT`].
///
/// # Examples
/// ```
/// use config::constants::cells_to_cover;
/// assert_eq!(cells_to_cover(1.1, 0.25), 5);
/// assert_eq!(cells_to_cover(1.25, 0.25), 5);
/// assert_eq!(cells_to_cover(0.3, 0.1), 3);
/// assert_eq!(cells_to_cover(0.01, 1.0), 1);
/// ```
pub fn cells_to_cover(extent: f64, cell_size: f64) -> u32 {
    let ratio = extent / cell_size;
    let nearest = ratio.round();
    let count = if (ratio - nearest).abs() <= CELL_COUNT_SNAP_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    (count as u32).max(MIN_CELL_COUNT)
}

#[cfg(test)]
mod tests;
