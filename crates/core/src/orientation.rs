//! Orientation enumeration.
//!
//! An orientation assigns one permutation of an item's dimension
//! triple to the container's length/width/height axes. The candidate
//! set is fixed and small: at most the six axis-aligned permutations,
//! narrowed by the rotation policy and the per-axis locks.

use crate::item::{Item, RotationPolicy};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-axis locks. A locked axis pins the named source dimension to
/// its position in every candidate orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisLocks {
    /// Pin the source length to the length axis.
    pub length: bool,
    /// Pin the source width to the width axis.
    pub width: bool,
    /// Pin the source height to the height axis.
    pub height: bool,
}

impl AxisLocks {
    /// No locks.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if all three axes are locked.
    pub fn all(&self) -> bool {
        self.length && self.width && self.height
    }
}

/// One axis-aligned orientation of an item's dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Dimension assigned to the length axis.
    pub length: f64,
    /// Dimension assigned to the width axis.
    pub width: f64,
    /// Dimension assigned to the height axis.
    pub height: f64,
}

impl Orientation {
    /// Creates an orientation from explicit axis values.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl From<&Vector3<f64>> for Orientation {
    fn from(dims: &Vector3<f64>) -> Self {
        Self::new(dims.x, dims.y, dims.z)
    }
}

/// Enumerates the legal orientations for a dimension triple.
///
/// If all three axes are locked the original triple is returned as-is.
/// Otherwise the candidate set follows the rotation policy (`Fixed`
/// yields the identity, `Planar` the identity plus the length/width
/// swap, `Full` all six permutations in a fixed order) and each
/// candidate must then keep every locked axis at its original value.
///
/// The returned order is deterministic so that downstream tie-breaks
/// (first-seen wins) are reproducible. The identity permutation
/// satisfies every lock, so the result is never empty.
pub fn orientations(dims: &Vector3<f64>, rotation: RotationPolicy, locks: AxisLocks) -> Vec<Orientation> {
    let (l, w, h) = (dims.x, dims.y, dims.z);

    if locks.all() {
        return vec![Orientation::new(l, w, h)];
    }

    let candidates: Vec<Orientation> = match rotation {
        RotationPolicy::Fixed => vec![Orientation::new(l, w, h)],
        RotationPolicy::Planar => vec![Orientation::new(l, w, h), Orientation::new(w, l, h)],
        RotationPolicy::Full => vec![
            Orientation::new(l, w, h),
            Orientation::new(l, h, w),
            Orientation::new(w, l, h),
            Orientation::new(w, h, l),
            Orientation::new(h, l, w),
            Orientation::new(h, w, l),
        ],
    };

    candidates
        .into_iter()
        .filter(|o| {
            if locks.height && o.height != h {
                return false;
            }
            if locks.length && o.length != l {
                return false;
            }
            if locks.width && o.width != w {
                return false;
            }
            true
        })
        .collect()
}

impl Item {
    /// Enumerates this item's legal orientations in its own unit.
    pub fn orientations(&self) -> Vec<Orientation> {
        orientations(self.dims(), self.rotation(), self.locks())
    }
}
