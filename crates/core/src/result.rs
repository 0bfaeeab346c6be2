//! Calculation result representation.

use crate::config::Mode;
use crate::container::ContainerSnapshot;
use crate::grid::GridFit;
use crate::item::ItemId;
use crate::orientation::Orientation;
use crate::units::LengthUnit;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One item's result in individual mode.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemPacking {
    /// Source item id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Display color, if assigned.
    pub color: Option<String>,
    /// Dimensions in the item's original unit, for labels.
    pub display_dims: Vector3<f64>,
    /// The unit `display_dims` is expressed in.
    pub unit: LengthUnit,
    /// Winning orientation in centimeters, or `None` when nothing fit.
    pub orientation: Option<Orientation>,
    /// Grid fit for the winning orientation (all zero when nothing fit).
    pub fit: GridFit,
    /// Single item volume in cm³.
    pub item_volume: f64,
    /// Packed volume in cm³ (total × item volume).
    pub packed_volume: f64,
    /// Volume efficiency percentage, one decimal.
    pub efficiency: f64,
    /// Pallet count for the configured shipment quantity (0 when the
    /// quantity is unset or nothing fit).
    pub pallets_needed: u64,
    /// The shipment quantity the pallet count was derived from.
    pub shipment_qty: u64,
}

impl ItemPacking {
    /// Returns true if at least one unit fit.
    pub fn fits(&self) -> bool {
        self.fit.total > 0
    }
}

/// One item type's slice of the shared container in mixed mode.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerAllocation {
    /// Source item id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Display color, if assigned.
    pub color: Option<String>,
    /// Dimensions in the item's original unit, for labels.
    pub display_dims: Vector3<f64>,
    /// The unit `display_dims` is expressed in.
    pub unit: LengthUnit,
    /// Winning orientation in centimeters.
    pub orientation: Orientation,
    /// Grid fit for the winning orientation, quantity cap applied.
    pub fit: GridFit,
    /// Single item volume in cm³.
    pub item_volume: f64,
    /// Packed volume in cm³.
    pub packed_volume: f64,
    /// Vertical offset (cm) where this allocation starts.
    pub start_height: f64,
    /// Vertical extent (cm) consumed: layers × oriented height.
    pub height_used: f64,
}

/// Aggregate figures for a mixed-mode layout.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MixedSummary {
    /// Allocations in processing order (post-sort).
    pub allocations: Vec<LayerAllocation>,
    /// Total packed item count across all allocations.
    pub total_items: u64,
    /// Total packed volume in cm³.
    pub packed_volume: f64,
    /// Volume efficiency percentage, one decimal.
    pub efficiency: f64,
    /// Leftover vertical space in cm (never negative).
    pub unused_height: f64,
}

/// Mode-specific payload of a calculation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// One entry per item, each against the full container.
    Individual(Vec<ItemPacking>),
    /// A single combined layout sharing the vertical axis.
    Mixed(MixedSummary),
}

/// Result of one packing calculation.
///
/// Recreated wholesale on every calculation; nothing is merged across
/// invocations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationResult {
    /// Container snapshot: display-unit outer dimensions plus the
    /// centimeter usable dimensions the geometry used.
    pub container: ContainerSnapshot,
    /// Usable container volume in cm³.
    pub container_volume: f64,
    /// Mode-specific payload.
    pub outcome: Outcome,
}

impl CalculationResult {
    /// The mode this result was computed in.
    pub fn mode(&self) -> Mode {
        match self.outcome {
            Outcome::Individual(_) => Mode::Individual,
            Outcome::Mixed(_) => Mode::Mixed,
        }
    }

    /// Total packed item count. Individual-mode entries are
    /// independent hypotheticals, so their totals are summed only for
    /// display purposes.
    pub fn total_items(&self) -> u64 {
        match &self.outcome {
            Outcome::Individual(entries) => entries.iter().map(|e| e.fit.total).sum(),
            Outcome::Mixed(summary) => summary.total_items,
        }
    }

    /// Number of item types carried by the result.
    pub fn type_count(&self) -> usize {
        match &self.outcome {
            Outcome::Individual(entries) => entries.len(),
            Outcome::Mixed(summary) => summary.allocations.len(),
        }
    }

    /// Efficiency as a formatted percentage string: the overall figure
    /// in mixed mode, the best entry in individual mode.
    pub fn efficiency_percent(&self) -> String {
        let value = match &self.outcome {
            Outcome::Individual(entries) => {
                entries.iter().map(|e| e.efficiency).fold(0.0_f64, f64::max)
            }
            Outcome::Mixed(summary) => summary.efficiency,
        };
        format!("{value:.1}%")
    }
}
