//! # Bounding Boxes
//!
//! Axis-aligned bounding box and the online min/max reduction that builds it.
//!
//! The reduction is a fold: each vertex can only shrink `min` or grow `max`.
//! Partial results from separate chunks combine with [`BoundsAccumulator::merge`],
//! which is commutative and associative, so chunk order never changes the
//! final box.

use config::constants::PARALLEL_CHUNK_SIZE;
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;

// =============================================================================
// BOUNDING BOX
// =============================================================================

/// Axis-aligned bounding box.
///
/// A box built from vertices always satisfies `min <= max` on every axis.
/// [`BoundingBox::new`] does not check this; use [`BoundingBox::is_valid`]
/// before trusting a box from elsewhere.
///
/// # Example
///
/// ```rust
/// use geometry_bounds::{BoundingBox, DVec3};
///
/// let mut bounds = BoundingBox::from_point(DVec3::ZERO);
/// bounds.include(DVec3::new(1.0, -2.0, 0.5));
/// assert_eq!(bounds.min, DVec3::new(0.0, -2.0, 0.0));
/// assert_eq!(bounds.max, DVec3::new(1.0, 0.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a box from explicit corners without validation.
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Degenerate box containing a single point.
    pub const fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`.
    #[inline]
    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extent (`max - min`) per axis.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Centre point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Lower bound along `axis`.
    #[inline]
    pub fn min_along(&self, axis: Axis) -> f64 {
        axis.component(self.min)
    }

    /// Upper bound along `axis`.
    #[inline]
    pub fn max_along(&self, axis: Axis) -> f64 {
        axis.component(self.max)
    }

    /// Extent along `axis`.
    pub fn extent_along(&self, axis: Axis) -> f64 {
        self.max_along(axis) - self.min_along(axis)
    }

    /// True if `point` lies inside or on the boundary.
    pub fn contains(&self, point: DVec3) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }

    /// True if `other` lies inside or on the boundary.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// First axis on which the box is not well formed.
    ///
    /// An axis is ill formed when a bound is not finite or `min > max`.
    pub fn invalid_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| {
            let (lo, hi) = (self.min_along(axis), self.max_along(axis));
            !(lo.is_finite() && hi.is_finite() && lo <= hi)
        })
    }

    /// True if all bounds are finite and `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.invalid_axis().is_none()
    }
}

// =============================================================================
// ACCUMULATOR
// =============================================================================

/// Running min/max reduction over a vertex sequence.
///
/// Holds no box until the first vertex is seen.
///
/// # Example
///
/// ```rust
/// use geometry_bounds::{BoundsAccumulator, DVec3};
///
/// let mut left: BoundsAccumulator = [DVec3::ZERO, DVec3::ONE].into_iter().collect();
/// let right: BoundsAccumulator = [DVec3::splat(-1.0)].into_iter().collect();
/// left = left.merge(right);
/// let bounds = left.finish().unwrap();
/// assert_eq!(bounds.min, DVec3::splat(-1.0));
/// assert_eq!(bounds.max, DVec3::ONE);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundsAccumulator {
    bounds: Option<BoundingBox>,
    vertex_count: u64,
}

impl BoundsAccumulator {
    /// Empty accumulator.
    pub const fn new() -> Self {
        Self {
            bounds: None,
            vertex_count: 0,
        }
    }

    /// Folds one vertex in.
    #[inline]
    pub fn include(&mut self, point: DVec3) {
        match &mut self.bounds {
            Some(bounds) => bounds.include(point),
            None => self.bounds = Some(BoundingBox::from_point(point)),
        }
        self.vertex_count += 1;
    }

    /// Combines two partial reductions.
    pub fn merge(self, other: Self) -> Self {
        let bounds = match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (a, b) => a.or(b),
        };
        Self {
            bounds,
            vertex_count: self.vertex_count + other.vertex_count,
        }
    }

    /// Number of vertices folded in so far.
    pub fn vertex_count(&self) -> u64 {
        self.vertex_count
    }

    /// Current box, if any vertex has been seen.
    pub fn bounds(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// Final box, or `None` if no vertex was seen.
    pub fn finish(self) -> Option<BoundingBox> {
        self.bounds
    }
}

impl Extend<DVec3> for BoundsAccumulator {
    fn extend<I: IntoIterator<Item = DVec3>>(&mut self, iter: I) {
        for point in iter {
            self.include(point);
        }
    }
}

impl FromIterator<DVec3> for BoundsAccumulator {
    fn from_iter<I: IntoIterator<Item = DVec3>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

// =============================================================================
// REDUCTIONS
// =============================================================================

/// Bounding box of a point slice in a single sequential pass.
///
/// Returns `None` for an empty slice.
pub fn bounds_of_points(points: &[DVec3]) -> Option<BoundingBox> {
    points
        .iter()
        .copied()
        .collect::<BoundsAccumulator>()
        .finish()
}

/// Bounding box of a point slice, reduced in parallel chunks.
///
/// Each rayon task folds one chunk; partial boxes are merged afterwards. The
/// result is identical to [`bounds_of_points`].
pub fn par_bounds_of_points(points: &[DVec3]) -> Option<BoundingBox> {
    points
        .par_chunks(PARALLEL_CHUNK_SIZE)
        .map(|chunk| chunk.iter().copied().collect::<BoundsAccumulator>())
        .reduce(BoundsAccumulator::new, BoundsAccumulator::merge)
        .finish()
}
