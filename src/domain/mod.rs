//! Core domain types and logic.

pub mod ledger;
pub mod point_value;
pub mod normalize;
pub mod equity;
pub mod metrics;
pub mod transform;
pub mod montecarlo;
pub mod summary;
pub mod error;

/// Round to 2 decimal places, the ledger's currency precision. Non-finite
/// values pass through unchanged.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
