//! Carrier rate (priced offer) model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Location, ServiceMode};

/// The unit a carrier rate is priced against.
///
/// Serialized by name: "Miles", "Weight", "Quantity", "Flat". Any other
/// name is kept as [`RateBasis::Unrecognized`] and prices to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RateBasis {
    /// Priced per mile.
    Miles,
    /// Priced per unit of weight.
    Weight,
    /// Priced per handling unit.
    Quantity,
    /// Flat price per shipment.
    Flat,
    /// Basis name not known to the cost model.
    Unrecognized(String),
}

impl RateBasis {
    /// Basis name as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            RateBasis::Miles => "Miles",
            RateBasis::Weight => "Weight",
            RateBasis::Quantity => "Quantity",
            RateBasis::Flat => "Flat",
            RateBasis::Unrecognized(name) => name,
        }
    }
}

impl From<String> for RateBasis {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Miles" => RateBasis::Miles,
            "Weight" => RateBasis::Weight,
            "Quantity" => RateBasis::Quantity,
            "Flat" => RateBasis::Flat,
            _ => RateBasis::Unrecognized(name),
        }
    }
}

impl From<RateBasis> for String {
    fn from(basis: RateBasis) -> Self {
        match basis {
            RateBasis::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RateBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An offer from a carrier to move freight between two states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierRate {
    /// Carrier offering the rate.
    pub carrier_name: String,
    /// Service mode the offer applies to.
    pub mode: ServiceMode,
    /// Lane origin; only `state` is matched.
    pub origin: Location,
    /// Lane destination; only `state` is matched.
    pub destination: Location,
    /// Price per unit of `rate_per`.
    pub rate: f64,
    /// Pricing basis.
    pub rate_per: RateBasis,
}

impl CarrierRate {
    /// Creates a flat rate for the given lane.
    pub fn new(
        carrier_name: impl Into<String>,
        mode: impl Into<ServiceMode>,
        origin_state: impl Into<String>,
        destination_state: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            carrier_name: carrier_name.into(),
            mode: mode.into(),
            origin: Location::new(origin_state),
            destination: Location::new(destination_state),
            rate,
            rate_per: RateBasis::Flat,
        }
    }

    /// Sets the pricing basis.
    pub fn per(mut self, basis: RateBasis) -> Self {
        self.rate_per = basis;
        self
    }

    /// Whether this offer covers the given origin/destination states.
    #[inline]
    pub fn covers_lane(&self, origin_state: &str, destination_state: &str) -> bool {
        self.origin.state == origin_state && self.destination.state == destination_state
    }

    /// Origin state code covered.
    #[inline]
    pub fn origin_state(&self) -> &str {
        &self.origin.state
    }

    /// Destination state code covered.
    #[inline]
    pub fn destination_state(&self) -> &str {
        &self.destination.state
    }
}
