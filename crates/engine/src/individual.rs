//! Individual-mode calculator.
//!
//! Each item is computed independently against the full usable
//! container; there is no inter-item interaction and no shared
//! container state.

use crate::round1;
use crate::selector::select_best;
use cargofit_core::{GridFit, Item, ItemPacking};
use nalgebra::Vector3;

/// Computes one independent [`ItemPacking`] per item against the
/// usable container dimensions (cm).
///
/// An item no orientation of which fits surfaces as a zero-total,
/// zero-efficiency entry rather than being omitted. When
/// `shipment_qty` is positive, each entry carries the pallet count
/// needed to ship that many units.
pub fn calculate(items: &[Item], usable_cm: &Vector3<f64>, shipment_qty: u64) -> Vec<ItemPacking> {
    let container_volume = usable_cm.x * usable_cm.y * usable_cm.z;

    items
        .iter()
        .map(|item| pack_one(item, usable_cm, container_volume, shipment_qty))
        .collect()
}

fn pack_one(
    item: &Item,
    usable_cm: &Vector3<f64>,
    container_volume: f64,
    shipment_qty: u64,
) -> ItemPacking {
    let dims_cm = item.dims_cm();
    let best = select_best(&dims_cm, item.rotation(), item.locks(), usable_cm);

    let item_volume = item.volume_cm3();
    let (orientation, fit) = match best {
        Some(best) => (Some(best.orientation), best.fit),
        None => (None, GridFit::default()),
    };

    let packed_volume = fit.total as f64 * item_volume;
    let efficiency = if container_volume > 0.0 {
        round1(packed_volume / container_volume * 100.0)
    } else {
        0.0
    };

    let pallets_needed = if shipment_qty > 0 && fit.total > 0 {
        shipment_qty.div_ceil(fit.total)
    } else {
        0
    };

    ItemPacking {
        id: item.id().clone(),
        name: item.name().to_string(),
        color: item.color().map(str::to_string),
        display_dims: *item.dims(),
        unit: item.unit(),
        orientation,
        fit,
        item_volume,
        packed_volume,
        efficiency,
        pallets_needed,
        shipment_qty,
    }
}
