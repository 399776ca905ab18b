//! Error types for load planning.

use std::fmt;

use thiserror::Error;

/// Which end of a shipment a location refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Pickup location.
    Origin,
    /// Delivery location.
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Errors that abort a planning run.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A seed shipment has no coordinate on one of its ends.
    ///
    /// `index` is the shipment's position in the input sequence.
    #[error("shipment #{index} has no {endpoint} coordinate")]
    MissingCoordinate { index: usize, endpoint: Endpoint },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
