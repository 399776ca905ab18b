//! Shipment (freight movement request) model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GeoCoordinate, Location};

/// Transport service type.
///
/// Serialized as its mode name ("LTL", "FTL", or any other name verbatim).
/// Matching is exact on the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceMode {
    /// Less-than-truckload.
    Ltl,
    /// Full truckload.
    Ftl,
    /// Any other mode name.
    Other(String),
}

impl ServiceMode {
    /// Mode name as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            ServiceMode::Ltl => "LTL",
            ServiceMode::Ftl => "FTL",
            ServiceMode::Other(name) => name,
        }
    }
}

impl From<&str> for ServiceMode {
    fn from(name: &str) -> Self {
        match name {
            "LTL" => ServiceMode::Ltl,
            "FTL" => ServiceMode::Ftl,
            other => ServiceMode::Other(other.to_string()),
        }
    }
}

impl From<String> for ServiceMode {
    fn from(name: String) -> Self {
        match name.as_str() {
            "LTL" => ServiceMode::Ltl,
            "FTL" => ServiceMode::Ftl,
            _ => ServiceMode::Other(name),
        }
    }
}

impl From<ServiceMode> for String {
    fn from(mode: ServiceMode) -> Self {
        match mode {
            ServiceMode::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to move goods from an origin to a destination.
///
/// Shipments carry no intrinsic ID; planners refer to them by their
/// position in the input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Pickup location.
    pub origin: Location,
    /// Delivery location.
    pub destination: Location,
    /// Requested service mode.
    pub service: ServiceMode,
    /// Total weight (lbs).
    #[serde(default)]
    pub total_weight: f64,
    /// Total handling units.
    #[serde(default)]
    pub total_items: u32,
}

impl Shipment {
    /// Creates a shipment with zero weight and items.
    pub fn new(origin: Location, destination: Location, service: impl Into<ServiceMode>) -> Self {
        Self {
            origin,
            destination,
            service: service.into(),
            total_weight: 0.0,
            total_items: 0,
        }
    }

    /// Sets the total weight.
    pub fn with_weight(mut self, total_weight: f64) -> Self {
        self.total_weight = total_weight;
        self
    }

    /// Sets the total item count.
    pub fn with_items(mut self, total_items: u32) -> Self {
        self.total_items = total_items;
        self
    }

    /// Origin coordinate, if geocoded.
    #[inline]
    pub fn origin_coordinate(&self) -> Option<GeoCoordinate> {
        self.origin.geo_coordinate
    }

    /// Destination coordinate, if geocoded.
    #[inline]
    pub fn destination_coordinate(&self) -> Option<GeoCoordinate> {
        self.destination.geo_coordinate
    }

    /// Whether both ends are geocoded.
    pub fn is_geocoded(&self) -> bool {
        self.origin.is_geocoded() && self.destination.is_geocoded()
    }
}
