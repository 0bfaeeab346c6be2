//! Mixed-mode greedy layer allocator.
//!
//! All item types share the container's vertical axis. Each packed
//! item type consumes whole horizontal layers of its best orientation;
//! the allocator walks the priority order and stops once the height
//! budget is exhausted.

use crate::round1;
use cargofit_core::orientation::orientations;
use cargofit_core::{pack, Item, LayerAllocation, MixedSummary, Priority};
use nalgebra::Vector3;

/// Runs the greedy layer allocation over the usable container (cm).
///
/// Items are sorted by descending volume when the priority is
/// [`Priority::Volume`], otherwise processed in input order. An item
/// whose best candidate packs nothing is skipped silently; running out
/// of height is normal termination, and later items are simply absent
/// from the result.
pub fn calculate(items: &[Item], usable_cm: &Vector3<f64>, priority: Priority) -> MixedSummary {
    let container_volume = usable_cm.x * usable_cm.y * usable_cm.z;

    let mut sorted: Vec<&Item> = items.iter().collect();
    if priority == Priority::Volume {
        sorted.sort_by(|a, b| b.volume_cm3().total_cmp(&a.volume_cm3()));
    }

    let mut remaining_height = usable_cm.z;
    let mut allocations = Vec::new();
    let mut packed_volume = 0.0;

    for item in sorted {
        if remaining_height <= 0.0 {
            log::debug!("height budget exhausted, remaining items not packed");
            break;
        }

        let Some((orientation, fit)) = best_within_height(item, usable_cm, remaining_height)
        else {
            log::debug!("item '{}' does not fit in remaining height", item.id());
            continue;
        };

        let item_volume = item.volume_cm3();
        let height_used = fit.layers as f64 * orientation.height;

        allocations.push(LayerAllocation {
            id: item.id().clone(),
            name: item.name().to_string(),
            color: item.color().map(str::to_string),
            display_dims: *item.dims(),
            unit: item.unit(),
            orientation,
            fit,
            item_volume,
            packed_volume: fit.total as f64 * item_volume,
            start_height: usable_cm.z - remaining_height,
            height_used,
        });

        packed_volume += fit.total as f64 * item_volume;
        remaining_height -= height_used;
    }

    let efficiency = if container_volume > 0.0 {
        round1(packed_volume / container_volume * 100.0)
    } else {
        0.0
    };

    MixedSummary {
        total_items: allocations.iter().map(|a| a.fit.total).sum(),
        allocations,
        packed_volume,
        efficiency,
        unused_height: remaining_height,
    }
}

/// Best orientation for one item against the remaining height slice:
/// candidates taller than the remaining height are excluded, a
/// positive quantity cap clamps the total (recomputing the layer
/// count), and the greatest capped total wins with first-seen
/// tie-breaks.
fn best_within_height(
    item: &Item,
    usable_cm: &Vector3<f64>,
    remaining_height: f64,
) -> Option<(cargofit_core::Orientation, cargofit_core::GridFit)> {
    let dims_cm = item.dims_cm();
    let mut best: Option<(cargofit_core::Orientation, cargofit_core::GridFit)> = None;

    for orientation in orientations(&dims_cm, item.rotation(), item.locks()) {
        if orientation.height > remaining_height {
            continue;
        }

        let mut fit = pack(
            usable_cm.x,
            usable_cm.y,
            remaining_height,
            orientation.length,
            orientation.width,
            orientation.height,
        );

        if item.quantity() > 0 {
            fit.clamp_total(item.quantity());
        }

        if best.as_ref().map_or(true, |(_, b)| fit.total > b.total) {
            best = Some((orientation, fit));
        }
    }

    best.filter(|(_, fit)| fit.total > 0)
}
