//! Carrier rate selection and shipment costing.
//!
//! A [`RateSelector`] filters a rate catalog through a chain of
//! [`RateRule`]s and picks the cheapest surviving offer. The standard
//! chain checks preferred carriers, service mode, and origin/destination
//! state, in that order.
//!
//! # Usage
//!
//! ```
//! use u_loadplan::config::OptimizationSettings;
//! use u_loadplan::models::{CarrierRate, Location, Shipment};
//! use u_loadplan::rating::{compute_cost, select_best_rate};
//!
//! let shipment = Shipment::new(Location::new("IL"), Location::new("TX"), "FTL");
//! let rates = vec![
//!     CarrierRate::new("Acme", "FTL", "IL", "TX", 900.0),
//!     CarrierRate::new("Bolt", "FTL", "IL", "TX", 850.0),
//! ];
//! let settings = OptimizationSettings::default();
//!
//! let best = select_best_rate(&shipment, &rates, &settings).unwrap();
//! assert_eq!(best.carrier_name, "Bolt");
//! assert_eq!(compute_cost(&shipment, best), 850.0);
//! ```

mod cost;
pub mod rules;
mod selector;

pub use cost::{compute_cost, MILES_PLACEHOLDER};
pub use selector::{select_best_rate, RateSelector};

use crate::config::OptimizationSettings;
use crate::models::{CarrierRate, Shipment};
use std::fmt::Debug;

/// A compatibility check between a carrier rate and a shipment.
///
/// A rate is eligible for a shipment only if every rule in the
/// selector's chain accepts it.
pub trait RateRule: Send + Sync + Debug {
    /// Rule name (e.g., "MODE", "ORIGIN").
    fn name(&self) -> &'static str;

    /// Whether `rate` may carry `shipment` under `settings`.
    fn accepts(
        &self,
        rate: &CarrierRate,
        shipment: &Shipment,
        settings: &OptimizationSettings,
    ) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
