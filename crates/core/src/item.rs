//! Item model: the rectangular boxes being packed.

use crate::error::{Error, Result};
use crate::orientation::AxisLocks;
use crate::units::{convert, LengthUnit};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an item.
pub type ItemId = String;

/// Fixed display palette, assigned round-robin by insertion order.
/// Cosmetic only; never consulted by the packing arithmetic.
pub const COLOR_PALETTE: [&str; 8] = [
    "#22c55e", "#06b6d4", "#8b5cf6", "#f59e0b", "#ef4444", "#ec4899", "#14b8a6", "#f97316",
];

/// Returns the palette color for the n-th inserted item.
pub fn palette_color(index: usize) -> &'static str {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}

/// How an item may be rotated when searching orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RotationPolicy {
    /// All six axis-aligned permutations allowed.
    #[default]
    Full,
    /// Only the length/width swap; height stays put.
    Planar,
    /// Original orientation only.
    Fixed,
}

/// A rectangular item to pack.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Stable identifier.
    id: ItemId,

    /// Display name.
    name: String,

    /// Dimensions (length, width, height) in `unit`.
    dims: Vector3<f64>,

    /// Unit the dimensions are expressed in.
    unit: LengthUnit,

    /// Rotation policy for the orientation search.
    rotation: RotationPolicy,

    /// Per-axis locks pinning a source axis to its position.
    locks: AxisLocks,

    /// Quantity cap for mixed mode (0 = unbounded, fill available space).
    quantity: u64,

    /// Display color (cosmetic).
    color: Option<String>,
}

impl Item {
    /// Creates a new item with the given id and dimensions.
    pub fn new(id: impl Into<ItemId>, length: f64, width: f64, height: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            dims: Vector3::new(length, width, height),
            unit: LengthUnit::default(),
            rotation: RotationPolicy::default(),
            locks: AxisLocks::default(),
            quantity: 0,
            color: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unit the dimensions are expressed in.
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the rotation policy.
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the axis locks.
    pub fn with_locks(mut self, locks: AxisLocks) -> Self {
        self.locks = locks;
        self
    }

    /// Sets the mixed-mode quantity cap (0 = unbounded).
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the stable identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (length, width, height) in this item's unit.
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the unit the dimensions are expressed in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Returns the rotation policy.
    pub fn rotation(&self) -> RotationPolicy {
        self.rotation
    }

    /// Returns the axis locks.
    pub fn locks(&self) -> AxisLocks {
        self.locks
    }

    /// Returns the mixed-mode quantity cap (0 = unbounded).
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the display color, if assigned.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the dimensions normalized to centimeters.
    pub fn dims_cm(&self) -> Vector3<f64> {
        self.dims
            .map(|v| convert(v, self.unit, LengthUnit::Centimeter))
    }

    /// Returns the volume in cm³.
    pub fn volume_cm3(&self) -> f64 {
        let d = self.dims_cm();
        d.x * d.y * d.z
    }

    /// Validates the item and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dims.x <= 0.0 || self.dims.y <= 0.0 || self.dims.z <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }
        Ok(())
    }
}
