//! Planner configuration building on the shared `config` crate.
//!
//! Re-exports the margin policy so callers can build a [`PlannerConfig`]
//! without depending on `config` directly.

use geometry_bounds::Axis;
use glam::DVec3;
use serde::{Deserialize, Serialize};

pub use ::config::constants::{ConfigError, MarginPolicy};

/// How the integer cell count is fitted to the expanded box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TilingMode {
    /// Keep the expanded bounds and shrink cells to `extent / count`.
    #[default]
    Stretch,
    /// Keep the requested cell size and move the upper bound to
    /// `lower + count * cell_size`.
    ExtendUpper,
}

/// Tunable parameters of the planner.
///
/// # Examples
/// ```
/// use background_mesh::config::{MarginPolicy, PlannerConfig, TilingMode};
///
/// let cfg = PlannerConfig::new(MarginPolicy::new(0.1, 1.0).unwrap(), TilingMode::ExtendUpper);
/// assert_eq!(cfg.margin.min_margin_cells, 1.0);
/// assert_eq!(PlannerConfig::default().tiling, TilingMode::Stretch);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlannerConfig {
    /// Margin added around the bounding box.
    pub margin: MarginPolicy,
    /// Cell count fitting strategy.
    pub tiling: TilingMode,
}

impl PlannerConfig {
    /// Creates a configuration from its parts.
    pub const fn new(margin: MarginPolicy, tiling: TilingMode) -> Self {
        Self { margin, tiling }
    }
}

/// Requested cell edge length per axis.
///
/// Values are not validated here; the planner rejects non-positive sizes
/// with the offending axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSizes {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl CellSizes {
    pub const fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// Same size on every axis.
    pub const fn uniform(size: f64) -> Self {
        Self::new(size, size, size)
    }

    /// Size along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Z => self.dz,
        }
    }
}

impl From<[f64; 3]> for CellSizes {
    fn from([dx, dy, dz]: [f64; 3]) -> Self {
        Self::new(dx, dy, dz)
    }
}

impl From<DVec3> for CellSizes {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
