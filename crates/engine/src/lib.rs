//! # Cargofit Engine
//!
//! Packing calculators for the cargofit storage packing engine.
//!
//! The engine turns a set of [`Item`](cargofit_core::Item)s, a
//! [`Container`](cargofit_core::Container), and a
//! [`Config`](cargofit_core::Config) into a
//! [`CalculationResult`](cargofit_core::CalculationResult):
//!
//! - [`select_best`]: per-item greedy best orientation against a
//!   fixed container
//! - [`individual`]: one independent result per item
//! - [`mixed`]: a greedy layer allocator sharing the vertical axis
//! - [`Calculator`]: the entry point that validates input,
//!   normalizes units, dispatches on mode, and assembles the result
//!
//! Every calculation is a pure, synchronous function of its input
//! snapshot; nothing persists between invocations.

pub mod calculator;
pub mod individual;
pub mod mixed;
pub mod selector;

// Re-exports
pub use calculator::Calculator;
pub use selector::{select_best, BestFit};

/// Rounds a value to one decimal place (efficiency percentages).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
