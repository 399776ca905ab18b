//! Optimization settings for a planning run.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Smallest accepted `max_stops`.
pub const MIN_STOPS: usize = 1;
/// Largest accepted `max_stops`.
pub const MAX_STOPS: usize = 10;
/// Smallest accepted `max_distance` (miles).
pub const MIN_DISTANCE_MILES: f64 = 100.0;
/// Largest accepted `max_distance` (miles).
pub const MAX_DISTANCE_MILES: f64 = 2000.0;

/// Parameters controlling rate selection and consolidation.
///
/// Missing fields in serialized input fall back to [`Default`].
/// Ranges are not enforced here; see [`crate::validation::validate_settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizationSettings {
    /// Maximum shipments per load, seed included.
    pub max_stops: usize,

    /// Whether to fold nearby shipments into seed loads.
    /// When false every rated shipment becomes its own load.
    pub consolidate_loads: bool,

    /// Carriers to restrict matching to. Empty means any carrier.
    pub preferred_carriers: Vec<String>,

    /// Maximum miles from the previous drop-off to the next pickup
    /// for a shipment to be consolidated.
    pub max_distance: f64,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            max_stops: 3,
            consolidate_loads: true,
            preferred_carriers: Vec::new(),
            max_distance: 500.0,
        }
    }
}

impl OptimizationSettings {
    /// Creates the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from JSON, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the stop cap.
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Enables or disables consolidation.
    pub fn with_consolidation(mut self, enabled: bool) -> Self {
        self.consolidate_loads = enabled;
        self
    }

    /// Adds a preferred carrier.
    pub fn with_preferred_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.preferred_carriers.push(carrier.into());
        self
    }

    /// Sets the consolidation distance threshold (miles).
    pub fn with_max_distance(mut self, miles: f64) -> Self {
        self.max_distance = miles;
        self
    }

    /// Whether `carrier` passes the preferred-carrier filter.
    #[inline]
    pub fn allows_carrier(&self, carrier: &str) -> bool {
        self.preferred_carriers.is_empty() || self.preferred_carriers.iter().any(|c| c == carrier)
    }
}
