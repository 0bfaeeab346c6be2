//! Calculation configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Each item type computed independently against the full container.
    #[default]
    Individual,
    /// All item types stacked together by whole height layers.
    Mixed,
}

/// Sort key for mixed-mode processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Largest item volume first.
    #[default]
    Volume,
    /// Preserve insertion order.
    #[cfg_attr(feature = "serde", serde(rename = "insertion"))]
    InsertionOrder,
}

/// Configuration for a packing calculation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Packing mode.
    pub mode: Mode,

    /// Mixed-mode processing order.
    pub priority: Priority,

    /// Safety margin, in the container's unit, subtracted from both
    /// sides of each axis when enabled.
    pub margin: f64,

    /// Whether the safety margin is applied.
    pub margin_enabled: bool,

    /// Shipment quantity for the pallet-count figure (individual mode
    /// only; 0 disables it).
    pub shipment_qty: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            priority: Priority::default(),
            margin: 0.0,
            margin_enabled: false,
            shipment_qty: 0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the packing mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the mixed-mode processing order.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets and enables the safety margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self.margin_enabled = true;
        self
    }

    /// Sets the shipment quantity.
    pub fn with_shipment_qty(mut self, qty: u64) -> Self {
        self.shipment_qty = qty;
        self
    }

    /// Returns the margin to apply (zero when disabled).
    pub fn effective_margin(&self) -> f64 {
        if self.margin_enabled {
            self.margin
        } else {
            0.0
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.margin < 0.0 {
            return Err(Error::Config("Safety margin cannot be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Individual);
        assert_eq!(config.priority, Priority::Volume);
        assert!(!config.margin_enabled);
        assert_eq!(config.shipment_qty, 0);
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_mode(Mode::Mixed)
            .with_priority(Priority::InsertionOrder)
            .with_margin(2.5)
            .with_shipment_qty(5000);

        assert_eq!(config.mode, Mode::Mixed);
        assert_eq!(config.priority, Priority::InsertionOrder);
        assert!(config.margin_enabled);
        assert_eq!(config.effective_margin(), 2.5);
        assert_eq!(config.shipment_qty, 5000);
    }

    #[test]
    fn test_disabled_margin_is_zero() {
        let config = Config {
            margin: 10.0,
            margin_enabled: false,
            ..Config::default()
        };
        assert_eq!(config.effective_margin(), 0.0);
    }

    #[test]
    fn test_negative_margin_rejected() {
        let config = Config {
            margin: -1.0,
            margin_enabled: true,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
