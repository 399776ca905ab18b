//! Load planning domain models.
//!
//! Provides the data types exchanged with the planner: shipments and
//! their locations on the input side, carrier rates as reference data,
//! and loads as the result.
//!
//! # Domain Mappings
//!
//! | u-loadplan | Scheduling analogue | Meaning |
//! |------------|---------------------|---------|
//! | Shipment | Task | One origin→destination movement |
//! | CarrierRate | Resource | Priced capacity offered by a carrier |
//! | Load | Assignment | Shipments grouped under one rate |

mod geo;
mod load;
mod location;
mod rate;
mod shipment;

pub use geo::{haversine_miles, GeoCoordinate, EARTH_RADIUS_MILES};
pub use load::Load;
pub use location::Location;
pub use rate::{CarrierRate, RateBasis};
pub use shipment::{ServiceMode, Shipment};
