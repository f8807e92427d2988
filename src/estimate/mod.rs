//! Moving cost estimation engine.
//!
//! A pure function from [`TripParameters`] to [`CostBreakdown`]: no I/O, no shared state.

pub mod calculator;
pub mod error;
pub mod labor;
pub mod lodging;
pub mod packing;
pub mod resolve;
pub mod travel;
pub mod trip;
pub mod truck;
pub mod types;

pub use calculator::{calculate_breakdown, estimate};
pub use error::EstimateError;
pub use trip::TripMetrics;
pub use types::{
    CostBreakdown, CrewBilling, CrewRequest, FlightRequest, HotelRequest, PackingItem,
    RateConfiguration, ShuttleRequest, TripParameters, TripType, TruckRequest,
};
