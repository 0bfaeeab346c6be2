//! Length units and conversion.
//!
//! Centimeters are the canonical unit: every conversion goes value →
//! cm → target, never unit → unit directly. This keeps the conversion
//! table one factor per unit and makes round-trips consistent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A length unit understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    /// Centimeter, the canonical unit.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    /// Inch (2.54 cm).
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inch,
    /// Meter (100 cm).
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meter,
    /// Foot (30.48 cm).
    #[cfg_attr(feature = "serde", serde(rename = "ft"))]
    Foot,
    /// Millimeter (0.1 cm).
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
}

impl LengthUnit {
    /// All supported units, in display order.
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Centimeter,
        LengthUnit::Inch,
        LengthUnit::Meter,
        LengthUnit::Foot,
        LengthUnit::Millimeter,
    ];

    /// Multiplier taking one of this unit to centimeters.
    pub fn cm_factor(&self) -> f64 {
        match self {
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Inch => 2.54,
            LengthUnit::Meter => 100.0,
            LengthUnit::Foot => 30.48,
            LengthUnit::Millimeter => 0.1,
        }
    }

    /// Short lowercase label ("cm", "in", "m", "ft", "mm").
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "cm",
            LengthUnit::Inch => "in",
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
            LengthUnit::Millimeter => "mm",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds a value to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a scalar length between units.
///
/// Returns the value unchanged when `from == to` (no rounding noise);
/// otherwise routes through centimeters and rounds the final result to
/// two decimal places.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let in_cm = value * from.cm_factor();
    round2(in_cm / to.cm_factor())
}
