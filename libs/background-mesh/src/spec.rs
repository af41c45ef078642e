//! # Background Mesh Description
//!
//! Immutable output of the planner: per-axis grid specifications plus the raw
//! bounding box they were derived from.

use geometry_bounds::{Axis, BoundingBox};
use glam::DVec3;
use serde::Serialize;

/// Grid along one axis.
///
/// Invariant: `effective_cell_size * cell_count == upper - lower` within
/// floating-point tolerance, and `cell_count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisGridSpec {
    pub(crate) axis: Axis,
    pub(crate) requested_cell_size: f64,
    pub(crate) margin: f64,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) cell_count: u32,
    pub(crate) effective_cell_size: f64,
}

impl AxisGridSpec {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cell size the caller asked for.
    pub fn requested_cell_size(&self) -> f64 {
        self.requested_cell_size
    }

    /// Margin added below the raw lower bound and above the raw upper bound.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Expanded lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Expanded upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of cells along the axis.
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Cell size that exactly tiles `[lower, upper]` with `cell_count` cells.
    pub fn effective_cell_size(&self) -> f64 {
        self.effective_cell_size
    }

    /// Expanded extent.
    pub fn extent(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Complete description of the background block.
///
/// # Example
///
/// ```rust
/// use background_mesh::{plan_background_mesh, CellSizes, PlannerConfig};
/// use geometry_bounds::{BoundingBox, DVec3};
///
/// let bounds = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
/// let spec = plan_background_mesh(&bounds, CellSizes::uniform(0.25), &PlannerConfig::default()).unwrap();
/// assert_eq!(spec.cell_counts(), [5, 5, 5]);
/// assert_eq!(spec.total_cells(), 125);
/// assert_eq!(spec.corners()[0], spec.expanded_bounds().min);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundMeshSpec {
    pub(crate) axes: [AxisGridSpec; 3],
    pub(crate) raw_bounds: BoundingBox,
}

impl BackgroundMeshSpec {
    /// Grid along `axis`.
    pub fn axis(&self, axis: Axis) -> &AxisGridSpec {
        &self.axes[axis.index()]
    }

    /// Grids in x, y, z order.
    pub fn axes(&self) -> &[AxisGridSpec; 3] {
        &self.axes
    }

    /// Bounding box of the geometry before expansion.
    pub fn raw_bounds(&self) -> &BoundingBox {
        &self.raw_bounds
    }

    /// Bounding box of the background block.
    pub fn expanded_bounds(&self) -> BoundingBox {
        BoundingBox::new(
            DVec3::from_array(self.axes.map(|a| a.lower)),
            DVec3::from_array(self.axes.map(|a| a.upper)),
        )
    }

    pub fn cell_counts(&self) -> [u32; 3] {
        self.axes.map(|a| a.cell_count)
    }

    pub fn effective_cell_sizes(&self) -> DVec3 {
        DVec3::from_array(self.axes.map(|a| a.effective_cell_size))
    }

    /// Total number of hexahedra in the block.
    pub fn total_cells(&self) -> u64 {
        self.axes.iter().map(|a| u64::from(a.cell_count)).product()
    }

    /// Block corners in blockMesh hex order: the `z = min` face
    /// counter-clockwise from the minimum corner, then the `z = max` face.
    pub fn corners(&self) -> [DVec3; 8] {
        let lo = self.expanded_bounds().min;
        let hi = self.expanded_bounds().max;
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
        ]
    }
}
