//! Coordinate axis labels.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
///
/// # Example
///
/// ```rust
/// use geometry_bounds::{Axis, DVec3};
///
/// let v = DVec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::Y.component(v), 2.0);
/// assert_eq!(Axis::Z.to_string(), "z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of the axis into a 3-component vector.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        v[self.index()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
