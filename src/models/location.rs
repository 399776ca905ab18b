//! Pickup/delivery location model.

use serde::{Deserialize, Serialize};

use super::GeoCoordinate;

/// A named location with a state/region code and an optional coordinate.
///
/// Rate matching works on `state`; consolidation works on `geo_coordinate`.
/// A location without a coordinate can still be rated but never chained
/// into another load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Display name (e.g., facility or city).
    #[serde(default)]
    pub name: String,
    /// State or region code (e.g., "TX").
    pub state: String,
    /// Geocoded position, if known.
    #[serde(default)]
    pub geo_coordinate: Option<GeoCoordinate>,
}

impl Location {
    /// Creates a location in the given state, without name or coordinate.
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            state: state.into(),
            geo_coordinate: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the coordinate.
    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.geo_coordinate = Some(GeoCoordinate::new(latitude, longitude));
        self
    }

    /// Whether this location has been geocoded.
    #[inline]
    pub fn is_geocoded(&self) -> bool {
        self.geo_coordinate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_builder() {
        let loc = Location::new("IL")
            .with_name("Chicago DC")
            .with_coordinate(41.88, -87.63);

        assert_eq!(loc.state, "IL");
        assert_eq!(loc.name, "Chicago DC");
        assert!(loc.is_geocoded());
        assert_eq!(loc.geo_coordinate, Some(GeoCoordinate::new(41.88, -87.63)));
    }

    #[test]
    fn test_location_without_coordinate() {
        let loc: Location = serde_json::from_str(r#"{"state":"TX"}"#).unwrap();
        assert_eq!(loc.state, "TX");
        assert!(loc.name.is_empty());
        assert!(!loc.is_geocoded());
    }
}
