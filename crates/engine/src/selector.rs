//! Best-orientation selection.

use cargofit_core::item::RotationPolicy;
use cargofit_core::orientation::{orientations, AxisLocks, Orientation};
use cargofit_core::{pack, GridFit};
use nalgebra::Vector3;

/// An orientation together with its grid fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestFit {
    /// The winning orientation (centimeters at engine call sites).
    pub orientation: Orientation,
    /// The grid fit it achieves.
    pub fit: GridFit,
}

/// Picks the orientation maximizing the total packed count for one
/// item against a fixed container.
///
/// Iterates the deterministic enumeration order and keeps the strictly
/// greatest total, so the first-seen orientation wins ties. Returns
/// `None` when no orientation yields a positive total. This is a
/// per-item greedy choice, not a global optimum across item shapes.
pub fn select_best(
    dims: &Vector3<f64>,
    rotation: RotationPolicy,
    locks: AxisLocks,
    container: &Vector3<f64>,
) -> Option<BestFit> {
    let mut best: Option<BestFit> = None;

    for orientation in orientations(dims, rotation, locks) {
        let fit = pack(
            container.x,
            container.y,
            container.z,
            orientation.length,
            orientation.width,
            orientation.height,
        );

        if best.as_ref().map_or(true, |b| fit.total > b.fit.total) {
            best = Some(BestFit { orientation, fit });
        }
    }

    best.filter(|b| b.fit.total > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(l: f64, w: f64, h: f64) -> Vector3<f64> {
        Vector3::new(l, w, h)
    }

    #[test]
    fn test_rotation_improves_fit() {
        // 50x10x10 in a 45-wide container only fits rotated.
        let best = select_best(
            &dims(50.0, 10.0, 10.0),
            RotationPolicy::Full,
            AxisLocks::none(),
            &dims(45.0, 80.0, 80.0),
        )
        .unwrap();

        assert!(best.fit.total > 0);
        assert!(best.orientation.length <= 45.0);
    }

    #[test]
    fn test_fixed_rotation_no_fit() {
        let best = select_best(
            &dims(50.0, 10.0, 10.0),
            RotationPolicy::Fixed,
            AxisLocks::none(),
            &dims(45.0, 80.0, 80.0),
        );
        assert!(best.is_none());
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // A cube ties across all six permutations; the identity (the
        // first enumerated candidate) must win.
        let best = select_best(
            &dims(10.0, 10.0, 10.0),
            RotationPolicy::Full,
            AxisLocks::none(),
            &dims(50.0, 50.0, 50.0),
        )
        .unwrap();

        assert_eq!(best.orientation, Orientation::new(10.0, 10.0, 10.0));
        assert_eq!(best.fit.total, 125);
    }

    #[test]
    fn test_best_maximizes_total() {
        // 30x20x15 in 120x100x150: the identity already packs 200
        // units at 100% volume; no orientation can beat it.
        let best = select_best(
            &dims(30.0, 20.0, 15.0),
            RotationPolicy::Full,
            AxisLocks::none(),
            &dims(120.0, 100.0, 150.0),
        )
        .unwrap();

        assert_eq!(best.fit.total, 200);
    }

    #[test]
    fn test_none_when_nothing_fits() {
        let best = select_best(
            &dims(60.0, 60.0, 60.0),
            RotationPolicy::Full,
            AxisLocks::none(),
            &dims(50.0, 50.0, 50.0),
        );
        assert!(best.is_none());
    }
}
