//! # Background Mesh
//!
//! Plans the uniform background block that snappyHexMesh refines from: an
//! axis-aligned box enclosing the geometry with a margin, divided into an
//! integer number of cells per axis.
//!
//! ## Architecture
//!
//! ```text
//! geometry-bounds (BoundingBox) → planner (BackgroundMeshSpec) → export (blockMeshDict / JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use background_mesh::export::{write_into_dir, BlockMeshDictWriter};
//! use background_mesh::{plan_from_stl, CellSizes, PlannerConfig};
//!
//! let spec = plan_from_stl("constant/triSurface/model.stl", CellSizes::uniform(0.05), &PlannerConfig::default())?;
//! write_into_dir(&BlockMeshDictWriter::default(), &spec, "system")?;
//! # Ok::<(), background_mesh::BackgroundMeshError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod planner;
pub mod spec;

use std::path::Path;

pub use crate::config::{CellSizes, MarginPolicy, PlannerConfig, TilingMode};
pub use error::{BackgroundMeshError, ExportError, PlanError};
pub use planner::plan_background_mesh;
pub use spec::{AxisGridSpec, BackgroundMeshSpec};

/// Reads the bounds of an STL file and plans its background mesh.
///
/// # Errors
///
/// Any [`geometry_bounds::BoundsError`] or [`PlanError`], wrapped in
/// [`BackgroundMeshError`].
pub fn plan_from_stl(
    path: impl AsRef<Path>,
    cell_sizes: CellSizes,
    config: &PlannerConfig,
) -> Result<BackgroundMeshSpec, BackgroundMeshError> {
    let bounds = geometry_bounds::read_bounds(path)?;
    Ok(plan_background_mesh(&bounds, cell_sizes, config)?)
}
