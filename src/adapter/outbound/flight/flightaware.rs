//! FlightAware AeroAPI client.
//!
//! Provides an implementation of the [`FlightLookup`] trait for the AeroAPI
//! `GET /flights/{ident}` endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::{not_found, unavailable};
use crate::domain::{Airport, FlightArrival, FlightNumber};
use crate::error::Result;
use crate::port::FlightLookup;

/// AeroAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://aeroapi.flightaware.com/aeroapi";

/// FlightAware AeroAPI client.
#[derive(Debug, Clone)]
pub struct FlightAware {
    /// HTTP client for API requests.
    client: Client,
    /// Sent as the `x-apikey` header.
    api_key: String,
    /// API root without a trailing slash.
    base_url: String,
}

impl FlightAware {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Share a connection pool with other adapters.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    flights: Vec<Flight>,
}

#[derive(Deserialize)]
struct Flight {
    estimated_in: Option<DateTime<Utc>>,
    scheduled_in: Option<DateTime<Utc>>,
    estimated_on: Option<DateTime<Utc>>,
    scheduled_on: Option<DateTime<Utc>>,
    destination: Option<Destination>,
}

#[derive(Deserialize)]
struct Destination {
    code: Option<String>,
    code_iata: Option<String>,
    name: Option<String>,
    timezone: Option<String>,
}

impl Response {
    fn into_arrival(self, flight: &FlightNumber) -> Result<FlightArrival> {
        let first = self
            .flights
            .into_iter()
            .next()
            .ok_or_else(|| not_found(flight))?;

        let destination = first
            .destination
            .ok_or_else(|| unavailable(flight, "no destination airport"))?;
        let code = destination
            .code_iata
            .or(destination.code)
            .unwrap_or_else(|| "UNK".to_string());
        let name = destination
            .name
            .unwrap_or_else(|| "Unknown Airport".to_string());
        let airport = Airport::new(code, name).with_timezone_name(destination.timezone.as_deref());

        // Gate arrival ("in") is preferred over runway arrival ("on").
        let scheduled_arrival = first.scheduled_in.or(first.scheduled_on);
        let estimated_arrival = first.estimated_in.or(first.estimated_on);
        if scheduled_arrival.is_none() && estimated_arrival.is_none() {
            return Err(unavailable(flight, "no arrival time"));
        }

        Ok(FlightArrival {
            flight_number: flight.clone(),
            scheduled_arrival,
            estimated_arrival,
            airport,
        })
    }
}

#[async_trait]
impl FlightLookup for FlightAware {
    fn name(&self) -> &'static str {
        "flightaware"
    }

    async fn lookup(&self, flight: &FlightNumber) -> Result<FlightArrival> {
        let url = format!("{}/flights/{}", self.base_url, flight.as_str());
        debug!(flight = %flight, "Querying FlightAware");

        let response = self
            .client
            .get(&url)
            .header("x-apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| unavailable(flight, e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found(flight));
        }

        response
            .error_for_status()
            .map_err(|e| unavailable(flight, e.to_string()))?
            .json::<Response>()
            .await
            .map_err(|e| unavailable(flight, format!("malformed response: {e}")))?
            .into_arrival(flight)
    }
}
