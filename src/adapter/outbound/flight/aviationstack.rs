//! AviationStack client.
//!
//! Provides an implementation of the [`FlightLookup`] trait for the
//! AviationStack `GET /flights` endpoint. The API reports failures in-band as
//! an `error` object with a 200 status.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{not_found, unavailable};
use crate::domain::{Airport, FlightArrival, FlightNumber};
use crate::error::Result;
use crate::port::FlightLookup;

/// AviationStack base URL. The free plan only serves plain HTTP.
pub const DEFAULT_BASE_URL: &str = "http://api.aviationstack.com/v1";

/// AviationStack API client.
#[derive(Debug, Clone)]
pub struct AviationStack {
    client: Client,
    /// Sent as the `access_key` query parameter.
    api_key: String,
    base_url: String,
}

impl AviationStack {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }
}

#[derive(Deserialize)]
struct Response {
    error: Option<ApiError>,
    #[serde(default)]
    data: Vec<Flight>,
}

#[derive(Deserialize)]
struct ApiError {
    info: Option<String>,
}

#[derive(Deserialize)]
struct Flight {
    arrival: Option<Arrival>,
}

#[derive(Deserialize)]
struct Arrival {
    airport: Option<String>,
    iata: Option<String>,
    timezone: Option<String>,
    scheduled: Option<DateTime<Utc>>,
    estimated: Option<DateTime<Utc>>,
}

impl Response {
    fn into_arrival(self, flight: &FlightNumber) -> Result<FlightArrival> {
        if let Some(error) = self.error {
            let info = error.info.unwrap_or_else(|| "API error".to_string());
            return Err(unavailable(flight, format!("Flight API error: {info}")));
        }

        let first = self.data.into_iter().next().ok_or_else(|| not_found(flight))?;
        let arrival = first
            .arrival
            .ok_or_else(|| unavailable(flight, format!("No arrival info for flight {flight}")))?;

        let airport = Airport::new(
            arrival.iata.unwrap_or_else(|| "UNK".to_string()),
            arrival
                .airport
                .unwrap_or_else(|| "Unknown Airport".to_string()),
        )
        .with_timezone_name(arrival.timezone.as_deref());

        Ok(FlightArrival {
            flight_number: flight.clone(),
            scheduled_arrival: arrival.scheduled,
            estimated_arrival: arrival.estimated,
            airport,
        })
    }
}

#[async_trait]
impl FlightLookup for AviationStack {
    fn name(&self) -> &'static str {
        "aviationstack"
    }

    async fn lookup(&self, flight: &FlightNumber) -> Result<FlightArrival> {
        let url = format!("{}/flights", self.base_url);
        debug!(flight = %flight, "Querying AviationStack");

        self.client
            .get(&url)
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("flight_iata", flight.as_str()),
            ])
            .send()
            .await
            .map_err(|e| unavailable(flight, e.to_string()))?
            .error_for_status()
            .map_err(|_| {
                unavailable(
                    flight,
                    "Flight data service temporarily unavailable. Please try again later.",
                )
            })?
            .json::<Response>()
            .await
            .map_err(|e| unavailable(flight, format!("malformed response: {e}")))?
            .into_arrival(flight)
    }
}
