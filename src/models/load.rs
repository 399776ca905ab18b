//! Load (planning output) model.
//!
//! A load groups one or more shipments under a single carrier rate and a
//! multi-stop route. The first shipment is the seed: its fields describe
//! the load, and its rate prices every shipment folded in afterwards.

use serde::{Deserialize, Serialize};

use super::{CarrierRate, GeoCoordinate, Location, ServiceMode, Shipment};

/// One or more shipments moved under a single carrier rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    /// Copy of the seed shipment.
    #[serde(flatten)]
    pub seed: Shipment,
    /// Rate selected for the seed, applied to every constituent.
    pub carrier_rate: CarrierRate,
    /// Sum of constituent costs under `carrier_rate`.
    pub total_cost: f64,
    /// Stops in visiting order: origin then destination of each constituent.
    pub route: Vec<GeoCoordinate>,
    /// Input positions of the constituent shipments, seed first.
    pub shipment_indices: Vec<usize>,
}

impl Load {
    /// Creates a single-shipment load.
    pub fn new(
        index: usize,
        seed: Shipment,
        carrier_rate: CarrierRate,
        cost: f64,
        origin: GeoCoordinate,
        destination: GeoCoordinate,
    ) -> Self {
        Self {
            seed,
            carrier_rate,
            total_cost: cost,
            route: vec![origin, destination],
            shipment_indices: vec![index],
        }
    }

    /// Folds another shipment's leg and cost into this load.
    pub fn add_stop(
        &mut self,
        index: usize,
        origin: GeoCoordinate,
        destination: GeoCoordinate,
        cost: f64,
    ) {
        self.route.push(origin);
        self.route.push(destination);
        self.total_cost += cost;
        self.shipment_indices.push(index);
    }

    /// Number of shipments in this load (seed included).
    #[inline]
    pub fn stop_count(&self) -> usize {
        self.shipment_indices.len()
    }

    /// Whether more than one shipment was consolidated.
    pub fn is_consolidated(&self) -> bool {
        self.stop_count() > 1
    }

    /// Name of the assigned carrier.
    pub fn carrier_name(&self) -> &str {
        &self.carrier_rate.carrier_name
    }

    /// Seed origin.
    pub fn origin(&self) -> &Location {
        &self.seed.origin
    }

    /// Seed destination.
    pub fn destination(&self) -> &Location {
        &self.seed.destination
    }

    /// Service mode shared by every constituent.
    pub fn service(&self) -> &ServiceMode {
        &self.seed.service
    }

    /// Route legs as (origin, destination) pairs, one per constituent.
    pub fn legs(&self) -> impl Iterator<Item = (&GeoCoordinate, &GeoCoordinate)> {
        self.route.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}
