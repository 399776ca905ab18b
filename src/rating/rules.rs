//! Built-in rate compatibility rules.
//!
//! | Rule | Accepts when |
//! |------|--------------|
//! | [`PreferredCarrier`] | no preference set, or carrier is preferred |
//! | [`ServiceMatch`] | rate mode equals shipment service |
//! | [`OriginStateMatch`] | rate origin state equals shipment origin state |
//! | [`DestinationStateMatch`] | rate destination state equals shipment destination state |

use super::RateRule;
use crate::config::OptimizationSettings;
use crate::models::{CarrierRate, Shipment};

/// Restricts matching to `settings.preferred_carriers` when non-empty.
#[derive(Debug, Clone, Copy)]
pub struct PreferredCarrier;

impl RateRule for PreferredCarrier {
    fn name(&self) -> &'static str {
        "CARRIER"
    }

    fn accepts(
        &self,
        rate: &CarrierRate,
        _shipment: &Shipment,
        settings: &OptimizationSettings,
    ) -> bool {
        settings.allows_carrier(&rate.carrier_name)
    }

    fn description(&self) -> &'static str {
        "Preferred carrier"
    }
}

/// Requires the rate's mode to equal the shipment's service mode.
#[derive(Debug, Clone, Copy)]
pub struct ServiceMatch;

impl RateRule for ServiceMatch {
    fn name(&self) -> &'static str {
        "MODE"
    }

    fn accepts(
        &self,
        rate: &CarrierRate,
        shipment: &Shipment,
        _settings: &OptimizationSettings,
    ) -> bool {
        rate.mode == shipment.service
    }

    fn description(&self) -> &'static str {
        "Service mode match"
    }
}

/// Requires the rate to originate in the shipment's origin state.
#[derive(Debug, Clone, Copy)]
pub struct OriginStateMatch;

impl RateRule for OriginStateMatch {
    fn name(&self) -> &'static str {
        "ORIGIN"
    }

    fn accepts(
        &self,
        rate: &CarrierRate,
        shipment: &Shipment,
        _settings: &OptimizationSettings,
    ) -> bool {
        rate.origin.state == shipment.origin.state
    }

    fn description(&self) -> &'static str {
        "Origin state match"
    }
}

/// Requires the rate to deliver into the shipment's destination state.
#[derive(Debug, Clone, Copy)]
pub struct DestinationStateMatch;

impl RateRule for DestinationStateMatch {
    fn name(&self) -> &'static str {
        "DESTINATION"
    }

    fn accepts(
        &self,
        rate: &CarrierRate,
        shipment: &Shipment,
        _settings: &OptimizationSettings,
    ) -> bool {
        rate.destination.state == shipment.destination.state
    }

    fn description(&self) -> &'static str {
        "Destination state match"
    }
}
