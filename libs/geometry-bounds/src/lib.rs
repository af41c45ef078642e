//! # Geometry Bounds
//!
//! Streaming bounding-box reduction for triangulated surfaces.
//!
//! ## Architecture
//!
//! ```text
//! STL file → VertexStream (lazy, one vertex at a time) → BoundsAccumulator → BoundingBox
//! ```
//!
//! The vertex list is never materialized: memory use is constant in the
//! number of vertices, so very large surfaces can be scanned.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geometry_bounds::read_bounds;
//!
//! let bounds = read_bounds("constant/triSurface/model.stl")?;
//! println!("min = {}, max = {}", bounds.min, bounds.max);
//! # Ok::<(), geometry_bounds::BoundsError>(())
//! ```

pub mod axis;
pub mod bounds;
pub mod error;
pub mod reader;
pub mod stl;

pub use axis::Axis;
pub use bounds::{bounds_of_points, par_bounds_of_points, BoundingBox, BoundsAccumulator};
pub use error::{BoundsError, BoundsResult};
pub use reader::{read_bounds, read_bounds_from_reader};
pub use stl::{StlFormat, VertexStream};

pub use glam::DVec3;
