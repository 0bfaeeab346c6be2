//! # Cargofit
//!
//! Deterministic grid-division packing calculator: how many
//! rectangular items fit in a pallet, drum footprint, or shipping
//! container, one item type at a time or mixed by height layers.
//!
//! ## Quick Start
//!
//! ```rust
//! use cargofit::{Calculator, Config, Container, Item, Mode};
//!
//! let container = Container::new(120.0, 100.0, 150.0);
//! let items = vec![Item::new("carton", 30.0, 20.0, 15.0)];
//!
//! let calculator = Calculator::new(Config::new().with_mode(Mode::Individual));
//! let result = calculator.calculate(&items, &container).unwrap().unwrap();
//! assert_eq!(result.total_items(), 200);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for all value types

/// Core types: units, models, orientation and grid arithmetic.
pub use cargofit_core as core;

/// Packing calculators.
pub use cargofit_engine as engine;

// Re-export commonly used types at root level
pub use cargofit_core::{
    convert, CalculationResult, Config, Container, Item, LengthUnit, Mode, Outcome, Preset,
    Priority, Result, RotationPolicy,
};
pub use cargofit_engine::Calculator;
