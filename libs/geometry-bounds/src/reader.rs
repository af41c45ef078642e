//! # Bounds Reader
//!
//! Entry points that fold a vertex stream into a [`BoundingBox`].

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::bounds::{BoundingBox, BoundsAccumulator};
use crate::error::{BoundsError, BoundsResult};
use crate::stl::VertexStream;

/// Reads the bounding box of an STL file in a single streaming pass.
///
/// # Errors
///
/// - [`BoundsError::GeometryNotFound`] if the file cannot be opened
/// - [`BoundsError::GeometryParse`] on a malformed vertex record
/// - [`BoundsError::EmptyGeometry`] if no vertex is found
///
/// # Example
///
/// ```rust,no_run
/// use geometry_bounds::read_bounds;
///
/// let bounds = read_bounds("model.stl")?;
/// assert!(bounds.is_valid());
/// # Ok::<(), geometry_bounds::BoundsError>(())
/// ```
pub fn read_bounds(path: impl AsRef<Path>) -> BoundsResult<BoundingBox> {
    let stream = VertexStream::<File>::open(path.as_ref())?;
    fold_stream(stream)
}

/// Reads the bounding box of STL data from any reader.
///
/// `origin` names the source in errors. Binary detection falls back to
/// header inspection since the length is unknown.
///
/// # Example
///
/// ```rust
/// use geometry_bounds::{read_bounds_from_reader, DVec3};
///
/// let text = "solid s\n vertex 0 0 0\n vertex 2 1 -1\nendsolid s\n";
/// let bounds = read_bounds_from_reader(text.as_bytes(), "inline.stl").unwrap();
/// assert_eq!(bounds.min, DVec3::new(0.0, 0.0, -1.0));
/// assert_eq!(bounds.max, DVec3::new(2.0, 1.0, 0.0));
/// ```
pub fn read_bounds_from_reader<R: Read>(
    reader: R,
    origin: impl Into<PathBuf>,
) -> BoundsResult<BoundingBox> {
    let stream = VertexStream::from_reader(reader, origin, None)?;
    fold_stream(stream)
}

fn fold_stream<R: Read>(mut stream: VertexStream<R>) -> BoundsResult<BoundingBox> {
    let format = stream.format();
    let origin = stream.origin().to_path_buf();

    let acc = stream.try_fold(BoundsAccumulator::new(), |mut acc, vertex| {
        acc.include(vertex?);
        Ok::<_, BoundsError>(acc)
    })?;
    let vertex_count = acc.vertex_count();

    let bounds = acc
        .finish()
        .ok_or_else(|| BoundsError::EmptyGeometry { path: origin.clone() })?;

    tracing::info!(
        origin = %origin.display(),
        ?format,
        vertex_count,
        min = ?bounds.min.to_array(),
        max = ?bounds.max.to_array(),
        "computed geometry bounds"
    );
    Ok(bounds)
}
