//! Shipment cost under a carrier rate.

use crate::models::{CarrierRate, RateBasis, Shipment};

/// Fixed multiplier applied to per-mile rates.
///
/// Per-mile pricing does not use the shipment's actual distance.
pub const MILES_PLACEHOLDER: f64 = 100.0;

/// Cost of moving `shipment` under `rate`.
///
/// | Basis | Cost |
/// |-------|------|
/// | Miles | `rate × 100` |
/// | Weight | `rate × total_weight` |
/// | Quantity | `rate × total_items` |
/// | Flat | `rate` |
/// | Unrecognized | `0` |
pub fn compute_cost(shipment: &Shipment, rate: &CarrierRate) -> f64 {
    match rate.rate_per {
        RateBasis::Miles => rate.rate * MILES_PLACEHOLDER,
        RateBasis::Weight => rate.rate * shipment.total_weight,
        RateBasis::Quantity => rate.rate * f64::from(shipment.total_items),
        RateBasis::Flat => rate.rate,
        RateBasis::Unrecognized(_) => 0.0,
    }
}
