//! Builders for domain primitives used across tests.
//!
//! All arrivals land on 2025-06-01 so that fixed clocks in tests line up.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Airport, AirportBusy, CheckedBags, FlightArrival, FlightNumber, Holiday, SituationalModifiers,
};
use crate::port::PickupRequest;

/// Instant on the shared test date, in UTC.
pub fn utc(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// A UTC airport with the given IATA code.
pub fn airport(code: &str) -> Airport {
    Airport::new(code, format!("{code} International"))
}

/// San Francisco International in Pacific time.
pub fn sfo() -> Airport {
    Airport::new("SFO", "San Francisco International").with_timezone(chrono_tz::America::Los_Angeles)
}

/// Scheduled-only arrival at a UTC airport (`JFK`).
pub fn arrival_at(flight: &str, hour: u32, minute: u32) -> FlightArrival {
    FlightArrival {
        flight_number: flight_number(flight),
        scheduled_arrival: Some(utc(hour, minute)),
        estimated_arrival: None,
        airport: airport("JFK"),
    }
}

pub fn flight_number(flight: &str) -> FlightNumber {
    FlightNumber::parse(flight).unwrap_or_else(|_| panic!("invalid test flight number {flight}"))
}

/// `major-hub`, no holiday, no bags.
pub fn baseline_modifiers() -> SituationalModifiers {
    SituationalModifiers::new(AirportBusy::MajorHub, Holiday::No, CheckedBags::No)
}

/// A valid request for the given flight with baseline modifiers.
pub fn request(flight: &str) -> PickupRequest {
    PickupRequest {
        flight: flight.to_string(),
        address: "1 Market St, San Francisco, CA".to_string(),
        airport_busy: "major-hub".to_string(),
        holiday: "no".to_string(),
        checked_bags: "no".to_string(),
    }
}
