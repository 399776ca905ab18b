//! Plan-level figures.
//!
//! | Figure | Definition |
//! |--------|-----------|
//! | Load count | Number of loads |
//! | Shipments assigned | Constituents across all loads |
//! | Shipments uncovered | Inputs with no load |
//! | Total cost | Sum of load costs |
//! | Avg cost per load | Total cost / load count |
//! | Avg stops per load | Shipments assigned / load count |
//! | Cost by carrier | Total cost grouped by carrier name |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Load;

/// Aggregate figures for a set of loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Number of loads.
    pub load_count: usize,
    /// Shipments placed in a load, seeds included.
    pub shipments_assigned: usize,
    /// Input shipments not placed in any load.
    pub shipments_uncovered: usize,
    /// Sum of load costs.
    pub total_cost: f64,
    /// Total cost / load count (0.0 when there are no loads).
    pub avg_cost_per_load: f64,
    /// Shipments assigned / load count (0.0 when there are no loads).
    pub avg_stops_per_load: f64,
    /// Total cost per carrier, ordered by carrier name.
    pub cost_by_carrier: BTreeMap<String, f64>,
}

impl PlanSummary {
    /// Computes the summary of `loads` built from `input_count` shipments.
    pub fn calculate(loads: &[Load], input_count: usize) -> Self {
        let load_count = loads.len();
        let shipments_assigned: usize = loads.iter().map(Load::stop_count).sum();
        let total_cost: f64 = loads.iter().map(|l| l.total_cost).sum();

        let mut cost_by_carrier: BTreeMap<String, f64> = BTreeMap::new();
        for load in loads {
            *cost_by_carrier
                .entry(load.carrier_name().to_string())
                .or_insert(0.0) += load.total_cost;
        }

        let (avg_cost_per_load, avg_stops_per_load) = if load_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_cost / load_count as f64,
                shipments_assigned as f64 / load_count as f64,
            )
        };

        Self {
            load_count,
            shipments_assigned,
            shipments_uncovered: input_count.saturating_sub(shipments_assigned),
            total_cost,
            avg_cost_per_load,
            avg_stops_per_load,
            cost_by_carrier,
        }
    }

    /// Fraction of input shipments that ended up in a load (1.0 when empty).
    pub fn coverage_rate(&self) -> f64 {
        let input = self.shipments_assigned + self.shipments_uncovered;
        if input == 0 {
            1.0
        } else {
            self.shipments_assigned as f64 / input as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarrierRate, GeoCoordinate, Location, Shipment};

    fn make_load(carrier: &str, cost: f64, indices: &[usize]) -> Load {
        let p = GeoCoordinate::new(40.0, -90.0);
        let seed = Shipment::new(Location::new("MO"), Location::new("MO"), "LTL");
        let mut load = Load::new(
            indices[0],
            seed,
            CarrierRate::new(carrier, "LTL", "MO", "MO", cost),
            cost,
            p,
            p,
        );
        for &i in &indices[1..] {
            load.add_stop(i, p, p, cost);
        }
        load
    }

    #[test]
    fn test_summary_basic() {
        let loads = vec![
            make_load("Acme", 100.0, &[0, 2, 3]), // 300
            make_load("Bolt", 50.0, &[1]),        // 50
            make_load("Acme", 20.0, &[5]),        // 20
        ];
        let summary = PlanSummary::calculate(&loads, 7);

        assert_eq!(summary.load_count, 3);
        assert_eq!(summary.shipments_assigned, 5);
        assert_eq!(summary.shipments_uncovered, 2);
        assert!((summary.total_cost - 370.0).abs() < 1e-10);
        assert!((summary.avg_cost_per_load - 370.0 / 3.0).abs() < 1e-10);
        assert!((summary.avg_stops_per_load - 5.0 / 3.0).abs() < 1e-10);
        assert!((summary.cost_by_carrier["Acme"] - 320.0).abs() < 1e-10);
        assert!((summary.cost_by_carrier["Bolt"] - 50.0).abs() < 1e-10);
        assert!((summary.coverage_rate() - 5.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_carriers_ordered_by_name() {
        let loads = vec![make_load("Zeta", 1.0, &[0]), make_load("Alpha", 1.0, &[1])];
        let summary = PlanSummary::calculate(&loads, 2);
        let names: Vec<&str> = summary.cost_by_carrier.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_summary_empty() {
        let summary = PlanSummary::calculate(&[], 0);
        assert_eq!(summary.load_count, 0);
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.avg_cost_per_load, 0.0);
        assert!((summary.coverage_rate() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_all_uncovered() {
        let summary = PlanSummary::calculate(&[], 4);
        assert_eq!(summary.shipments_uncovered, 4);
        assert_eq!(summary.coverage_rate(), 0.0);
    }
}
