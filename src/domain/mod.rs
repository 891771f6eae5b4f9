//! Provider-agnostic domain logic.
//!
//! The egress model and departure calculator are pure and synchronous: no I/O,
//! no clock reads (the caller passes `now`), no shared state.

pub mod error;

mod departure;
mod egress;
mod flight;
mod modifier;
mod route;

pub use departure::{
    DepartureCalculator, DepartureEstimator, EstimationResult, DEFAULT_BUFFER_MINUTES,
};
pub use egress::{
    ArrivalWindow, BagExtras, EgressModel, EgressParameters, HolidayExtras, HubMultipliers,
};
pub use flight::{Airport, FlightArrival, FlightNumber};
pub use modifier::{AirportBusy, CheckedBags, Holiday, SituationalModifiers};
pub use route::{Address, RouteDuration};
