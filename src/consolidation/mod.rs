//! Greedy load consolidation and plan summaries.
//!
//! # Algorithm
//!
//! `LoadConsolidator` is a deterministic first-fit heuristic: each load is
//! seeded by the next unplanned shipment and extended with the first queued
//! shipments that fit the stop and distance limits. It does not search for
//! cheaper groupings; it provides fast, predictable plans.
//!
//! # Summary
//!
//! `PlanSummary` computes load count, assigned/uncovered shipments, and cost
//! aggregates for display.

mod consolidator;
mod summary;

pub use consolidator::{build_loads, LoadConsolidator, LoadPlan, PlanRequest};
pub use summary::PlanSummary;
