//! Pre-flight validation for planning input.
//!
//! The planner assumes well-formed settings and does not call these checks
//! itself. They let the calling layer reject input up front. Detects:
//! - Settings outside the accepted ranges
//! - Duplicate preferred carriers
//! - Shipments missing a coordinate (these abort a run if they seed a load)
//! - Negative shipment weights
//! - Preferred carriers absent from the rate catalog

use std::collections::HashSet;

use crate::config::{
    OptimizationSettings, MAX_DISTANCE_MILES, MAX_STOPS, MIN_DISTANCE_MILES, MIN_STOPS,
};
use crate::consolidation::PlanRequest;
use crate::error::Endpoint;
use crate::models::{CarrierRate, Shipment};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `max_stops` outside the accepted range.
    StopsOutOfRange,
    /// `max_distance` outside the accepted range or not finite.
    DistanceOutOfRange,
    /// A carrier is listed twice in the preferences.
    DuplicateCarrier,
    /// A preferred carrier has no rate in the catalog.
    UnknownCarrier,
    /// A shipment end has no coordinate.
    MissingCoordinate { index: usize, endpoint: Endpoint },
    /// A shipment has negative weight.
    NegativeWeight,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates settings against the accepted ranges.
///
/// Checks:
/// 1. `max_stops` within 1..=10
/// 2. `max_distance` finite and within 100..=2000 miles
/// 3. No duplicate preferred carriers
pub fn validate_settings(settings: &OptimizationSettings) -> ValidationResult {
    let mut errors = Vec::new();
    check_settings(settings, &mut errors);
    into_result(errors)
}

/// Validates shipments for planning.
///
/// Reports every missing coordinate (origin and destination separately)
/// and every negative weight.
pub fn validate_shipments(shipments: &[Shipment]) -> ValidationResult {
    let mut errors = Vec::new();
    check_shipments(shipments, &mut errors);
    into_result(errors)
}

/// Validates a full request: settings, shipments, and that every preferred
/// carrier appears in the rate catalog.
pub fn validate_request(request: &PlanRequest) -> ValidationResult {
    let mut errors = Vec::new();
    check_settings(&request.settings, &mut errors);
    check_shipments(&request.shipments, &mut errors);
    check_carriers_known(&request.settings, &request.carrier_rates, &mut errors);
    into_result(errors)
}

fn check_settings(settings: &OptimizationSettings, errors: &mut Vec<ValidationError>) {
    if !(MIN_STOPS..=MAX_STOPS).contains(&settings.max_stops) {
        errors.push(ValidationError::new(
            ValidationErrorKind::StopsOutOfRange,
            format!(
                "Max stops {} outside {MIN_STOPS}..={MAX_STOPS}",
                settings.max_stops
            ),
        ));
    }

    let distance = settings.max_distance;
    if !distance.is_finite() || !(MIN_DISTANCE_MILES..=MAX_DISTANCE_MILES).contains(&distance) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DistanceOutOfRange,
            format!("Max distance {distance} outside {MIN_DISTANCE_MILES}..={MAX_DISTANCE_MILES} miles"),
        ));
    }

    let mut seen = HashSet::new();
    for carrier in &settings.preferred_carriers {
        if !seen.insert(carrier.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCarrier,
                format!("Duplicate preferred carrier: {carrier}"),
            ));
        }
    }
}

fn check_shipments(shipments: &[Shipment], errors: &mut Vec<ValidationError>) {
    for (index, shipment) in shipments.iter().enumerate() {
        if shipment.origin_coordinate().is_none() {
            errors.push(missing_coordinate(index, Endpoint::Origin));
        }
        if shipment.destination_coordinate().is_none() {
            errors.push(missing_coordinate(index, Endpoint::Destination));
        }
        if shipment.total_weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWeight,
                format!(
                    "Shipment #{index} has negative weight {}",
                    shipment.total_weight
                ),
            ));
        }
    }
}

fn check_carriers_known(
    settings: &OptimizationSettings,
    rates: &[CarrierRate],
    errors: &mut Vec<ValidationError>,
) {
    let known: HashSet<&str> = rates.iter().map(|r| r.carrier_name.as_str()).collect();
    for carrier in &settings.preferred_carriers {
        if !known.contains(carrier.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCarrier,
                format!("Preferred carrier '{carrier}' has no rates"),
            ));
        }
    }
}

fn missing_coordinate(index: usize, endpoint: Endpoint) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::MissingCoordinate { index, endpoint },
        format!("Shipment #{index} has no {endpoint} coordinate"),
    )
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
