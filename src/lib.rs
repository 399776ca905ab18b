//! Freight load planning for the U-Engine ecosystem.
//!
//! Assigns shipments to carrier rate offers and greedily consolidates
//! nearby shipments into multi-stop loads under stop-count and distance
//! limits.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Shipment`, `Location`, `GeoCoordinate`,
//!   `CarrierRate`, `RateBasis`, `Load`
//! - **`rating`**: Rate compatibility rules, cheapest-rate selection, costing
//! - **`consolidation`**: Greedy first-fit load builder and plan summaries
//! - **`config`**: `OptimizationSettings` and accepted ranges
//! - **`validation`**: Pre-flight checks (ranges, missing coordinates, carriers)
//!
//! # Architecture
//!
//! A single-pass heuristic: it does not search for a cost-optimal grouping.
//! Given identical input it always produces identical loads in the same
//! order.
//!
//! # Logging
//!
//! The planner emits only `debug`/`trace` diagnostics through the `log`
//! facade and never installs a logger, so nothing is output unless the
//! caller installs one. Failures are returned as [`PlanError`] values,
//! never logged.
//!
//! # Example
//!
//! ```
//! use u_loadplan::config::OptimizationSettings;
//! use u_loadplan::consolidation::{build_loads, PlanSummary};
//! use u_loadplan::models::{CarrierRate, Location, Shipment};
//!
//! let shipments = vec![Shipment::new(
//!     Location::new("GA").with_coordinate(33.75, -84.39),
//!     Location::new("FL").with_coordinate(30.33, -81.66),
//!     "LTL",
//! )
//! .with_items(4)];
//! let rates = vec![CarrierRate::new("Peach", "LTL", "GA", "FL", 35.0)
//!     .per(u_loadplan::models::RateBasis::Quantity)];
//!
//! let loads = build_loads(&shipments, &rates, &OptimizationSettings::default()).unwrap();
//! let summary = PlanSummary::calculate(&loads, shipments.len());
//! assert_eq!(summary.load_count, 1);
//! assert_eq!(summary.total_cost, 140.0);
//! ```

pub mod config;
pub mod consolidation;
pub mod error;
pub mod models;
pub mod rating;
pub mod validation;

pub use error::{PlanError, Result};
