//! # Cargofit Core
//!
//! Core types for the cargofit storage packing engine.
//!
//! This crate provides the leaf building blocks shared by the packing
//! calculators in `cargofit-engine`:
//!
//! - **Length units**: [`LengthUnit`] and [`convert`]; every
//!   conversion is routed through centimeters, the canonical unit
//! - **Models**: [`Item`] (with [`RotationPolicy`] and [`AxisLocks`])
//!   and [`Container`] (with storage [`Preset`]s)
//! - **Orientation enumeration**: [`orientations`], the finite set of
//!   axis-aligned orientations an item may take
//! - **Grid arithmetic**: [`GridFit`] and [`pack`], exact axis-aligned
//!   grid-fill counts and wasted lengths
//! - **Configuration**: [`Config`], [`Mode`], [`Priority`]
//! - **Results**: [`CalculationResult`] and its per-mode entries
//!
//! ## Configuration
//!
//! Use [`Config`] to configure a calculation:
//!
//! ```rust
//! use cargofit_core::{Config, Mode};
//!
//! let config = Config::new()
//!     .with_mode(Mode::Individual)
//!     .with_margin(2.0)
//!     .with_shipment_qty(5000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod container;
pub mod error;
pub mod grid;
pub mod item;
pub mod orientation;
pub mod result;
pub mod units;

// Re-exports
pub use config::{Config, Mode, Priority};
pub use container::{Container, ContainerSnapshot, Preset, StorageKind};
pub use error::{Error, Result};
pub use grid::{pack, GridFit};
pub use item::{palette_color, Item, ItemId, RotationPolicy, COLOR_PALETTE};
pub use orientation::{orientations, AxisLocks, Orientation};
pub use result::{CalculationResult, ItemPacking, LayerAllocation, MixedSummary, Outcome};
pub use units::{convert, LengthUnit};
