//! Greedy first-fit load consolidator.
//!
//! # Algorithm
//!
//! 1. Queue all shipments in input order.
//! 2. Pop the front shipment (seed) and select its cheapest compatible rate.
//!    Seeds without a rate are dropped.
//! 3. Open a load on the seed's rate with the seed's origin and destination.
//! 4. If consolidation is on, repeatedly take the *first* queued shipment that
//!    is geocoded, shares the seed's service mode, and picks up within
//!    `max_distance` miles of the last drop-off, until `max_stops` is reached.
//!    Each folded shipment is priced under the seed's rate.
//!
//! # Complexity
//! O(n² + n·r) where n=shipments, r=rates.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::PlanSummary;
use crate::config::OptimizationSettings;
use crate::error::{Endpoint, PlanError, Result};
use crate::models::{CarrierRate, GeoCoordinate, Load, Shipment};
use crate::rating::{compute_cost, RateSelector};

/// Input container for a planning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Shipments to plan, in priority order.
    pub shipments: Vec<Shipment>,
    /// Carrier rate catalog.
    pub carrier_rates: Vec<CarrierRate>,
    /// Run settings.
    #[serde(default)]
    pub settings: OptimizationSettings,
}

impl PlanRequest {
    /// Creates a request with default settings.
    pub fn new(shipments: Vec<Shipment>, carrier_rates: Vec<CarrierRate>) -> Self {
        Self {
            shipments,
            carrier_rates,
            settings: OptimizationSettings::default(),
        }
    }

    /// Sets the run settings.
    pub fn with_settings(mut self, settings: OptimizationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of a planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPlan {
    /// Loads in creation order.
    pub loads: Vec<Load>,
    /// Input positions of shipments dropped for lack of a compatible rate.
    pub uncovered: Vec<usize>,
}

impl LoadPlan {
    /// Number of shipments the plan was built from.
    pub fn input_count(&self) -> usize {
        self.uncovered.len() + self.loads.iter().map(Load::stop_count).sum::<usize>()
    }

    /// Aggregate figures for the plan.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::calculate(&self.loads, self.input_count())
    }
}

/// Greedy load consolidator.
///
/// Deterministic single pass: the same input always yields the same loads
/// in the same order.
///
/// # Example
///
/// ```
/// use u_loadplan::config::OptimizationSettings;
/// use u_loadplan::consolidation::LoadConsolidator;
/// use u_loadplan::models::{CarrierRate, Location, Shipment};
///
/// let shipments = vec![
///     Shipment::new(
///         Location::new("IL").with_coordinate(41.88, -87.63),
///         Location::new("IL").with_coordinate(41.85, -87.65),
///         "FTL",
///     ),
///     Shipment::new(
///         Location::new("IL").with_coordinate(41.86, -87.64),
///         Location::new("IL").with_coordinate(41.90, -87.70),
///         "FTL",
///     ),
/// ];
/// let rates = vec![CarrierRate::new("Acme", "FTL", "IL", "IL", 100.0)];
///
/// let loads = LoadConsolidator::new()
///     .build_loads(&shipments, &rates, &OptimizationSettings::default())
///     .unwrap();
/// assert_eq!(loads.len(), 1);
/// assert_eq!(loads[0].route.len(), 4);
/// assert_eq!(loads[0].total_cost, 200.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadConsolidator {
    selector: RateSelector,
}

impl LoadConsolidator {
    /// Creates a consolidator using the standard rate rules.
    pub fn new() -> Self {
        Self {
            selector: RateSelector::standard(),
        }
    }

    /// Replaces the rate selector.
    pub fn with_selector(mut self, selector: RateSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Partitions `shipments` into rated loads.
    ///
    /// # Errors
    /// [`PlanError::MissingCoordinate`] if a seed that found a rate lacks
    /// an origin or destination coordinate. No loads are returned in that case.
    pub fn build_loads(
        &self,
        shipments: &[Shipment],
        rates: &[CarrierRate],
        settings: &OptimizationSettings,
    ) -> Result<Vec<Load>> {
        self.run(shipments, rates, settings).map(|plan| plan.loads)
    }

    /// Plans a request, also reporting uncovered shipments.
    pub fn plan(&self, request: &PlanRequest) -> Result<LoadPlan> {
        self.run(&request.shipments, &request.carrier_rates, &request.settings)
    }

    fn run(
        &self,
        shipments: &[Shipment],
        rates: &[CarrierRate],
        settings: &OptimizationSettings,
    ) -> Result<LoadPlan> {
        let mut pending: VecDeque<usize> = (0..shipments.len()).collect();
        let mut plan = LoadPlan::default();

        while let Some(seed_idx) = pending.pop_front() {
            let seed = &shipments[seed_idx];
            let Some(rate) = self.selector.select_best(seed, rates, settings) else {
                log::debug!("Shipment #{seed_idx} has no compatible rate, skipped");
                plan.uncovered.push(seed_idx);
                continue;
            };

            let origin = require_coordinate(seed, seed_idx, Endpoint::Origin)?;
            let destination = require_coordinate(seed, seed_idx, Endpoint::Destination)?;

            let mut load = Load::new(
                seed_idx,
                seed.clone(),
                rate.clone(),
                compute_cost(seed, rate),
                origin,
                destination,
            );

            if settings.consolidate_loads {
                fold_nearby(&mut load, destination, shipments, &mut pending, settings);
            }

            plan.loads.push(load);
        }

        log::debug!(
            "Planned {} loads from {} shipments ({} uncovered)",
            plan.loads.len(),
            shipments.len(),
            plan.uncovered.len()
        );
        Ok(plan)
    }
}

/// Partitions `shipments` into rated loads with the standard rate rules.
pub fn build_loads(
    shipments: &[Shipment],
    rates: &[CarrierRate],
    settings: &OptimizationSettings,
) -> Result<Vec<Load>> {
    LoadConsolidator::new().build_loads(shipments, rates, settings)
}

fn require_coordinate(
    shipment: &Shipment,
    index: usize,
    endpoint: Endpoint,
) -> Result<GeoCoordinate> {
    let coordinate = match endpoint {
        Endpoint::Origin => shipment.origin_coordinate(),
        Endpoint::Destination => shipment.destination_coordinate(),
    };
    coordinate.ok_or(PlanError::MissingCoordinate { index, endpoint })
}

/// Folds queued shipments into `load` until no candidate fits or the stop
/// cap is reached. Removed entries keep the relative order of the rest.
fn fold_nearby(
    load: &mut Load,
    mut current: GeoCoordinate,
    shipments: &[Shipment],
    pending: &mut VecDeque<usize>,
    settings: &OptimizationSettings,
) {
    while load.stop_count() < settings.max_stops && !pending.is_empty() {
        let candidate = pending.iter().enumerate().find_map(|(pos, &idx)| {
            let shipment = &shipments[idx];
            let origin = shipment.origin_coordinate()?;
            let destination = shipment.destination_coordinate()?;
            let fits = current.distance_miles(&origin) <= settings.max_distance
                && shipment.service == load.seed.service;
            fits.then_some((pos, idx, origin, destination))
        });

        let Some((pos, idx, origin, destination)) = candidate else {
            break;
        };

        pending.remove(pos);
        let cost = compute_cost(&shipments[idx], &load.carrier_rate);
        load.add_stop(idx, origin, destination, cost);
        log::trace!(
            "Folded shipment #{idx} into load seeded by #{} (stop {})",
            load.shipment_indices[0],
            load.stop_count()
        );
        current = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, RateBasis};

    fn at(state: &str, lat: f64, lon: f64) -> Location {
        Location::new(state).with_coordinate(lat, lon)
    }

    fn ftl(origin: (f64, f64), destination: (f64, f64)) -> Shipment {
        Shipment::new(
            at("IL", origin.0, origin.1),
            at("IL", destination.0, destination.1),
            "FTL",
        )
    }

    fn flat_rate(price: f64) -> Vec<CarrierRate> {
        vec![CarrierRate::new("Acme", "FTL", "IL", "IL", price)]
    }

    #[test]
    fn test_single_shipment() {
        let shipments = vec![ftl((41.0, -87.0), (41.1, -87.0))];
        let loads = build_loads(&shipments, &flat_rate(100.0), &OptimizationSettings::default())
            .unwrap();

        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].shipment_indices, vec![0]);
        assert_eq!(loads[0].route.len(), 2);
        assert_eq!(loads[0].total_cost, 100.0);
    }

    #[test]
    fn test_stop_cap() {
        let shipments: Vec<Shipment> = (0..5)
            .map(|i| {
                let lat = 41.0 + 0.01 * i as f64;
                ftl((lat, -87.0), (lat + 0.005, -87.0))
            })
            .collect();
        let settings = OptimizationSettings::default().with_max_stops(2);
        let loads = build_loads(&shipments, &flat_rate(10.0), &settings).unwrap();

        // 2 + 2 + 1
        let sizes: Vec<usize> = loads.iter().map(Load::stop_count).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_max_stops_one_never_consolidates() {
        let shipments = vec![
            ftl((41.0, -87.0), (41.01, -87.0)),
            ftl((41.01, -87.0), (41.02, -87.0)),
        ];
        let settings = OptimizationSettings::default().with_max_stops(1);
        let loads = build_loads(&shipments, &flat_rate(10.0), &settings).unwrap();
        assert_eq!(loads.len(), 2);
    }

    #[test]
    fn test_first_fit_not_nearest() {
        // From seed drop-off (41.0, -87.0): #1 is ~69 mi away, #2 is ~0.7 mi away.
        // Both are within 500 mi, so #1 (first in queue) is chosen.
        let shipments = vec![
            ftl((40.5, -87.0), (41.0, -87.0)),
            ftl((42.0, -87.0), (42.1, -87.0)),
            ftl((41.01, -87.0), (41.02, -87.0)),
        ];
        let settings = OptimizationSettings::default().with_max_stops(2);
        let loads = build_loads(&shipments, &flat_rate(10.0), &settings).unwrap();

        assert_eq!(loads[0].shipment_indices, vec![0, 1]);
        assert_eq!(loads[1].shipment_indices, vec![2]);
    }

    #[test]
    fn test_out_of_order_removal_keeps_queue_order() {
        // #1 is too far from #0's drop-off; #2 is folded into #0's load.
        // #1 then seeds the next load, ahead of #3.
        let shipments = vec![
            ftl((41.0, -87.0), (41.0, -87.0)),
            ftl((30.0, -87.0), (30.1, -87.0)),
            ftl((41.0, -87.01), (41.0, -87.02)),
            ftl((30.1, -87.0), (30.2, -87.0)),
        ];
        let settings = OptimizationSettings::default()
            .with_max_stops(2)
            .with_max_distance(100.0);
        let loads = build_loads(&shipments, &flat_rate(10.0), &settings).unwrap();

        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].shipment_indices, vec![0, 2]);
        assert_eq!(loads[1].shipment_indices, vec![1, 3]);
    }

    #[test]
    fn test_chain_follows_last_drop_off() {
        // #2 picks up near #1's drop-off, far from the seed's drop-off.
        let shipments = vec![
            ftl((40.0, -87.0), (41.0, -87.0)),
            ftl((41.5, -87.0), (43.0, -87.0)),
            ftl((43.5, -87.0), (44.0, -87.0)),
        ];
        let settings = OptimizationSettings::default().with_max_distance(100.0);
        let loads = build_loads(&shipments, &flat_rate(10.0), &settings).unwrap();

        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].shipment_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_service_mode_must_match_seed() {
        let ltl = Shipment::new(at("IL", 41.0, -87.0), at("IL", 41.01, -87.0), "LTL");
        let shipments = vec![ftl((41.0, -87.0), (41.0, -87.0)), ltl];
        let rates = vec![
            CarrierRate::new("Acme", "FTL", "IL", "IL", 100.0),
            CarrierRate::new("Acme", "LTL", "IL", "IL", 40.0),
        ];
        let loads = build_loads(&shipments, &rates, &OptimizationSettings::default()).unwrap();

        assert_eq!(loads.len(), 2);
        assert_eq!(loads[1].carrier_rate.mode.as_str(), "LTL");
        assert_eq!(loads[1].total_cost, 40.0);
    }

    #[test]
    fn test_folded_shipment_priced_under_seed_rate() {
        // The folded shipment is in another lane; it is still priced by the seed's rate.
        let seed = ftl((41.0, -87.0), (41.0, -87.0)).with_weight(1000.0);
        let other = Shipment::new(at("IN", 41.0, -87.01), at("OH", 41.0, -87.02), "FTL")
            .with_weight(500.0);
        let rates = vec![
            CarrierRate::new("Acme", "FTL", "IL", "IL", 0.5).per(RateBasis::Weight),
            CarrierRate::new("Cheap", "FTL", "IN", "OH", 0.01).per(RateBasis::Weight),
        ];
        let loads = build_loads(&[seed, other], &rates, &OptimizationSettings::default()).unwrap();

        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].carrier_name(), "Acme");
        assert!((loads[0].total_cost - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_uncoverable_seed_without_coordinates_is_dropped() {
        // No rate → dropped before coordinates are inspected
        let bare = Shipment::new(Location::new("ZZ"), Location::new("ZZ"), "FTL");
        let shipments = vec![bare, ftl((41.0, -87.0), (41.1, -87.0))];
        let plan = LoadConsolidator::new()
            .plan(&PlanRequest::new(shipments, flat_rate(100.0)))
            .unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert_eq!(plan.uncovered, vec![0]);
        assert_eq!(plan.input_count(), 2);
    }

    #[test]
    fn test_missing_seed_coordinate_fails_run() {
        let no_destination = Shipment::new(at("IL", 41.0, -87.0), Location::new("IL"), "FTL");
        let shipments = vec![ftl((41.0, -87.0), (41.1, -87.0)), no_destination];
        let settings = OptimizationSettings::default().with_consolidation(false);
        let err = build_loads(&shipments, &flat_rate(100.0), &settings).unwrap_err();

        assert!(matches!(
            err,
            PlanError::MissingCoordinate {
                index: 1,
                endpoint: Endpoint::Destination
            }
        ));
    }

    #[test]
    fn test_ungeocoded_shipment_never_folded() {
        let no_origin = Shipment::new(Location::new("IL"), at("IL", 41.0, -87.0), "FTL");
        let shipments = vec![ftl((41.0, -87.0), (41.0, -87.0)), no_origin];
        // Seed folds nothing; the ungeocoded shipment then seeds and fails.
        let err = build_loads(&shipments, &flat_rate(100.0), &OptimizationSettings::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::MissingCoordinate {
                index: 1,
                endpoint: Endpoint::Origin
            }
        ));
    }

    #[test]
    fn test_custom_selector() {
        use crate::rating::rules::ServiceMatch;

        // Lane rules removed → any FTL rate applies
        let shipments = vec![Shipment::new(
            at("CA", 34.0, -118.0),
            at("NV", 36.1, -115.1),
            "FTL",
        )];
        let consolidator =
            LoadConsolidator::new().with_selector(RateSelector::new().with_rule(ServiceMatch));
        let loads = consolidator
            .build_loads(&shipments, &flat_rate(75.0), &OptimizationSettings::default())
            .unwrap();
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].total_cost, 75.0);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "shipments": [{
                "origin": {"state": "IL", "geoCoordinate": {"latitude": 41.0, "longitude": -87.0}},
                "destination": {"state": "IL", "geoCoordinate": {"latitude": 41.1, "longitude": -87.0}},
                "service": "FTL",
                "totalWeight": 100,
                "totalItems": 2
            }],
            "carrierRates": [{
                "carrierName": "Acme", "mode": "FTL",
                "origin": {"state": "IL"}, "destination": {"state": "IL"},
                "rate": 3.0, "ratePer": "Quantity"
            }],
            "settings": {"maxStops": 2}
        }"#;
        let request = PlanRequest::from_json(json).unwrap();
        assert_eq!(request.settings.max_stops, 2);
        assert_eq!(request.settings.max_distance, 500.0);

        let plan = LoadConsolidator::new().plan(&request).unwrap();
        assert_eq!(plan.loads.len(), 1);
        assert_eq!(plan.loads[0].total_cost, 6.0);
    }

    #[test]
    fn test_empty_input() {
        let loads = build_loads(&[], &[], &OptimizationSettings::default()).unwrap();
        assert!(loads.is_empty());
    }
}
