//! # Background Mesh Planner
//!
//! Turns a geometry bounding box and requested cell sizes into a
//! [`BackgroundMeshSpec`].
//!
//! ## Algorithm
//!
//! Per axis, independently:
//!
//! 1. `margin = max(extent * margin_fraction, cell_size * min_margin_cells)`
//! 2. `lower = min - margin`, `upper = max + margin`
//! 3. `cell_count = max(1, ceil((upper - lower) / cell_size))`, with ratios
//!    within [`CELL_COUNT_SNAP_TOLERANCE`] of an integer snapped to it
//! 4. [`TilingMode::Stretch`]: `effective = (upper - lower) / cell_count`;
//!    [`TilingMode::ExtendUpper`]: `upper = lower + cell_count * cell_size`
//!
//! The computation is pure and deterministic.

use ::config::constants::{cells_to_cover, CELL_COUNT_SNAP_TOLERANCE};
use geometry_bounds::{Axis, BoundingBox};

use crate::config::{CellSizes, PlannerConfig, TilingMode};
use crate::error::{PlanError, PlanResult};
use crate::spec::{AxisGridSpec, BackgroundMeshSpec};

/// Plans the background block enclosing `bounds`.
///
/// # Errors
///
/// - [`PlanError::InvalidGridSize`] if a cell size is not a positive finite
///   number (axes are checked in x, y, z order)
/// - [`PlanError::InvalidBounds`] if the box is inverted or not finite
/// - [`PlanError::DegenerateAxis`] if the margin is lost to rounding at the
///   box's coordinates and the expanded axis has no width
/// - [`PlanError::TooManyCells`] if an axis would need more than `u32::MAX`
///   cells
///
/// # Example
///
/// ```rust
/// use background_mesh::{plan_background_mesh, CellSizes, PlannerConfig};
/// use geometry_bounds::{Axis, BoundingBox, DVec3};
///
/// let bounds = BoundingBox::new(DVec3::ZERO, DVec3::new(10.0, 2.0, 0.0));
/// let spec = plan_background_mesh(&bounds, CellSizes::new(1.0, 0.5, 0.1), &PlannerConfig::default())?;
///
/// let x = spec.axis(Axis::X);
/// assert_eq!(x.cell_count(), 11);
/// assert!(x.lower() < 0.0 && x.upper() > 10.0);
///
/// // Flat axis: half a cell of margin on each side, one cell thick
/// assert_eq!(spec.axis(Axis::Z).cell_count(), 1);
/// # Ok::<(), background_mesh::PlanError>(())
/// ```
pub fn plan_background_mesh(
    bounds: &BoundingBox,
    cell_sizes: CellSizes,
    config: &PlannerConfig,
) -> PlanResult<BackgroundMeshSpec> {
    for axis in Axis::ALL {
        let value = cell_sizes.get(axis);
        if !(value.is_finite() && value > 0.0) {
            return Err(PlanError::InvalidGridSize { axis, value });
        }
    }
    if let Some(axis) = bounds.invalid_axis() {
        return Err(PlanError::InvalidBounds {
            axis,
            min: bounds.min_along(axis),
            max: bounds.max_along(axis),
        });
    }

    let axes = [
        plan_axis(bounds, Axis::X, cell_sizes.dx, config)?,
        plan_axis(bounds, Axis::Y, cell_sizes.dy, config)?,
        plan_axis(bounds, Axis::Z, cell_sizes.dz, config)?,
    ];
    let spec = BackgroundMeshSpec {
        axes,
        raw_bounds: *bounds,
    };

    tracing::info!(
        cells = ?spec.cell_counts(),
        total = spec.total_cells(),
        min = ?spec.expanded_bounds().min.to_array(),
        max = ?spec.expanded_bounds().max.to_array(),
        "planned background mesh"
    );
    Ok(spec)
}

fn plan_axis(
    bounds: &BoundingBox,
    axis: Axis,
    cell_size: f64,
    config: &PlannerConfig,
) -> PlanResult<AxisGridSpec> {
    let (raw_lower, raw_upper) = (bounds.min_along(axis), bounds.max_along(axis));
    let margin = config.margin.margin(raw_upper - raw_lower, cell_size);
    let lower = raw_lower - margin;
    let mut upper = raw_upper + margin;
    let degenerate = || PlanError::DegenerateAxis {
        axis,
        at: raw_lower,
        cell_size,
    };
    // The expanded axis must strictly contain the raw one
    if !(lower < raw_lower && upper > raw_upper) {
        return Err(degenerate());
    }

    let cells = (upper - lower) / cell_size;
    // Allow the snap tolerance so an exact u32::MAX still passes
    if cells > f64::from(u32::MAX) * (1.0 + CELL_COUNT_SNAP_TOLERANCE) {
        return Err(PlanError::TooManyCells {
            axis,
            cells,
            max: u32::MAX,
        });
    }
    let cell_count = cells_to_cover(upper - lower, cell_size);

    let effective_cell_size = match config.tiling {
        TilingMode::Stretch => (upper - lower) / f64::from(cell_count),
        TilingMode::ExtendUpper => {
            upper = lower + f64::from(cell_count) * cell_size;
            if upper <= raw_upper {
                return Err(degenerate());
            }
            cell_size
        }
    };

    tracing::debug!(
        %axis,
        margin,
        lower,
        upper,
        cell_count,
        requested = cell_size,
        effective = effective_cell_size,
        "planned axis"
    );

    Ok(AxisGridSpec {
        axis,
        requested_cell_size: cell_size,
        margin,
        lower,
        upper,
        cell_count,
        effective_cell_size,
    })
}
