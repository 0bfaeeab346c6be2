//! Axis-aligned grid-fill arithmetic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of fitting one item orientation into a container as an
/// axis-aligned grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridFit {
    /// Count along the length axis.
    pub nx: u64,
    /// Count along the width axis.
    pub ny: u64,
    /// Count along the height axis.
    pub nz: u64,
    /// Items per horizontal layer (nx × ny).
    pub per_layer: u64,
    /// Number of layers. Starts as nz; a mixed-mode quantity cap may
    /// shrink it to match a clamped total.
    pub layers: u64,
    /// Total item count (nx × ny × nz, possibly clamped by a cap).
    pub total: u64,
    /// Leftover length on the length axis.
    pub wasted_l: f64,
    /// Leftover length on the width axis.
    pub wasted_w: f64,
    /// Leftover length on the height axis.
    pub wasted_h: f64,
}

impl GridFit {
    /// Clamps the total to a quantity cap and recomputes the layer
    /// count to match. `per_layer` is left unchanged, so the final
    /// layer may be reported as full while only partially occupied.
    pub fn clamp_total(&mut self, cap: u64) {
        if self.total > cap {
            self.total = cap;
            self.layers = if self.per_layer > 0 {
                self.total.div_ceil(self.per_layer)
            } else {
                0
            };
        }
    }
}

/// Per-axis grid count: floor(container / item), degrading to zero
/// instead of erroring when the item axis is non-positive or larger
/// than the container axis.
fn axis_count(container: f64, item: f64) -> u64 {
    if item <= 0.0 || container < item {
        0
    } else {
        (container / item).floor() as u64
    }
}

/// Computes the exact axis-aligned grid fit of one item orientation
/// inside the given container dimensions.
pub fn pack(
    container_l: f64,
    container_w: f64,
    container_h: f64,
    item_l: f64,
    item_w: f64,
    item_h: f64,
) -> GridFit {
    let nx = axis_count(container_l, item_l);
    let ny = axis_count(container_w, item_w);
    let nz = axis_count(container_h, item_h);

    GridFit {
        nx,
        ny,
        nz,
        per_layer: nx * ny,
        layers: nz,
        total: nx * ny * nz,
        wasted_l: (container_l - nx as f64 * item_l).max(0.0),
        wasted_w: (container_w - ny as f64 * item_w).max(0.0),
        wasted_h: (container_h - nz as f64 * item_h).max(0.0),
    }
}
