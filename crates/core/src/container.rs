//! Container model: the storage volume being filled.

use crate::error::{Error, Result};
use crate::units::{convert, LengthUnit};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of storage volume a preset describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StorageKind {
    /// Flat pallet footprint with a stacking height.
    #[default]
    Pallet,
    /// Cylindrical drum, treated as its square footprint.
    Drum,
    /// Shipping container or custom volume.
    Freight,
}

/// Well-known storage sizes. Dimensions are defined in centimeters
/// and converted on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preset {
    /// EUR pallet, 120 × 80 cm footprint, 180 cm stack height.
    EurPallet,
    /// US pallet, 121.9 × 101.6 cm footprint, 180 cm stack height.
    UsPallet,
    /// Asia pallet, 110 × 110 cm footprint, 180 cm stack height.
    AsiaPallet,
    /// 55-gallon drum footprint.
    Drum55Gal,
    /// 30-gallon drum footprint.
    Drum30Gal,
    /// 20-foot shipping container interior.
    Container20Ft,
    /// 40-foot shipping container interior.
    Container40Ft,
}

impl Preset {
    /// Dimensions (length, width, height) in centimeters.
    pub fn dims_cm(&self) -> Vector3<f64> {
        match self {
            Preset::EurPallet => Vector3::new(120.0, 80.0, 180.0),
            Preset::UsPallet => Vector3::new(121.9, 101.6, 180.0),
            Preset::AsiaPallet => Vector3::new(110.0, 110.0, 180.0),
            Preset::Drum55Gal => Vector3::new(57.15, 57.15, 88.9),
            Preset::Drum30Gal => Vector3::new(48.26, 48.26, 73.66),
            Preset::Container20Ft => Vector3::new(589.0, 235.0, 239.0),
            Preset::Container40Ft => Vector3::new(1203.0, 235.0, 239.0),
        }
    }

    /// The storage kind this preset belongs to.
    pub fn kind(&self) -> StorageKind {
        match self {
            Preset::EurPallet | Preset::UsPallet | Preset::AsiaPallet => StorageKind::Pallet,
            Preset::Drum55Gal | Preset::Drum30Gal => StorageKind::Drum,
            Preset::Container20Ft | Preset::Container40Ft => StorageKind::Freight,
        }
    }
}

/// A rectangular storage volume.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Outer dimensions (length, width, height) in `unit`.
    dims: Vector3<f64>,

    /// Unit the dimensions are expressed in.
    unit: LengthUnit,

    /// Kind of storage volume (cosmetic, for display grouping).
    kind: StorageKind,
}

impl Container {
    /// Creates a container with the given outer dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dims: Vector3::new(length, width, height),
            unit: LengthUnit::default(),
            kind: StorageKind::default(),
        }
    }

    /// Creates a container from a well-known preset, expressing its
    /// dimensions in the requested unit (rounded to two decimals).
    pub fn from_preset(preset: Preset, unit: LengthUnit) -> Self {
        let cm = preset.dims_cm();
        Self {
            dims: cm.map(|v| convert(v, LengthUnit::Centimeter, unit)),
            unit,
            kind: preset.kind(),
        }
    }

    /// Sets the unit the dimensions are expressed in.
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the storage kind.
    pub fn with_kind(mut self, kind: StorageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the outer dimensions in this container's unit.
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the unit the dimensions are expressed in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Returns the storage kind.
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Returns the outer dimensions normalized to centimeters.
    pub fn dims_cm(&self) -> Vector3<f64> {
        self.dims
            .map(|v| convert(v, self.unit, LengthUnit::Centimeter))
    }

    /// Returns the usable dimensions in centimeters after subtracting
    /// the safety margin (already in cm) from both sides of each axis,
    /// floored at zero.
    pub fn usable_dims_cm(&self, margin_cm: f64) -> Vector3<f64> {
        self.dims_cm().map(|v| (v - 2.0 * margin_cm).max(0.0))
    }

    /// Validates the container and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dims.x <= 0.0 || self.dims.y <= 0.0 || self.dims.z <= 0.0 {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Snapshot of the container attached to every calculation result:
/// the display-unit outer dimensions for labels next to the
/// centimeter-normalized usable dimensions the geometry was computed
/// against.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSnapshot {
    /// Outer dimensions in the display unit.
    pub dims: Vector3<f64>,
    /// Display unit.
    pub unit: LengthUnit,
    /// Usable dimensions in centimeters (margin applied).
    pub usable_cm: Vector3<f64>,
    /// Storage kind.
    pub kind: StorageKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_usable_dims_with_margin() {
        let container = Container::new(120.0, 100.0, 150.0);
        let usable = container.usable_dims_cm(5.0);
        assert_relative_eq!(usable.x, 110.0);
        assert_relative_eq!(usable.y, 90.0);
        assert_relative_eq!(usable.z, 140.0);
    }

    #[test]
    fn test_usable_dims_floor_at_zero() {
        let container = Container::new(120.0, 100.0, 150.0);
        let usable = container.usable_dims_cm(60.0);
        assert_relative_eq!(usable.x, 0.0);
        assert_relative_eq!(usable.y, 0.0);
        assert_relative_eq!(usable.z, 30.0);
    }

    #[test]
    fn test_dims_cm_normalization() {
        let container = Container::new(4.0, 3.5, 5.0).with_unit(LengthUnit::Foot);
        let cm = container.dims_cm();
        assert_relative_eq!(cm.x, 121.92);
        assert_relative_eq!(cm.y, 106.68);
        assert_relative_eq!(cm.z, 152.4);
    }

    #[test]
    fn test_preset_in_inches() {
        let container = Container::from_preset(Preset::EurPallet, LengthUnit::Inch);
        assert_eq!(container.unit(), LengthUnit::Inch);
        assert_eq!(container.kind(), StorageKind::Pallet);
        // 120 cm = 47.24 in, 80 cm = 31.5 in, 180 cm = 70.87 in.
        assert_relative_eq!(container.dims().x, 47.24);
        assert_relative_eq!(container.dims().y, 31.5);
        assert_relative_eq!(container.dims().z, 70.87);
    }

    #[test]
    fn test_preset_kinds() {
        assert_eq!(Preset::Drum30Gal.kind(), StorageKind::Drum);
        assert_eq!(Preset::Container40Ft.kind(), StorageKind::Freight);
    }

    #[test]
    fn test_validation() {
        assert!(Container::new(120.0, 100.0, 150.0).validate().is_ok());
        assert!(Container::new(-120.0, 100.0, 150.0).validate().is_err());
        assert!(Container::new(120.0, 0.0, 150.0).validate().is_err());
    }
}
