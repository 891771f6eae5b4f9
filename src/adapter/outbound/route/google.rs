//! Google Distance Matrix client.
//!
//! Provides an implementation of the [`RouteEstimator`] trait for the
//! Distance Matrix API. Requests a single origin/destination pair departing
//! now, so the answer includes current traffic when Google has it.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::unresolvable;
use crate::domain::{Address, Airport, RouteDuration};
use crate::error::Result;
use crate::port::RouteEstimator;

/// Maps API root.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Google Distance Matrix API client.
#[derive(Debug, Clone)]
pub struct GoogleDistanceMatrix {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleDistanceMatrix {
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
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Deserialize)]
struct Row {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Deserialize)]
struct Element {
    status: String,
    duration: Option<Value>,
    duration_in_traffic: Option<Value>,
}

#[derive(Deserialize)]
struct Value {
    /// Seconds.
    value: i64,
}

impl Response {
    fn into_duration(self) -> Result<RouteDuration> {
        if self.status != "OK" {
            let reason = match self.error_message {
                Some(message) => format!("{}: {message}", self.status),
                None => self.status,
            };
            return Err(unresolvable(reason));
        }

        let element = self
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| unresolvable("empty distance matrix"))?;

        if element.status != "OK" {
            return Err(unresolvable(format!(
                "no driving route found ({})",
                element.status
            )));
        }

        let seconds = element
            .duration_in_traffic
            .or(element.duration)
            .map(|d| d.value)
            .ok_or_else(|| unresolvable("route has no duration"))?;

        RouteDuration::from_seconds(seconds)
            .map_err(|_| unresolvable(format!("implausible drive time of {seconds}s")))
    }
}

#[async_trait]
impl RouteEstimator for GoogleDistanceMatrix {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn drive_time(&self, origin: &Address, destination: &Airport) -> Result<RouteDuration> {
        let url = format!("{}/distancematrix/json", self.base_url);
        let destination = destination.label();
        debug!(destination = %destination, "Querying Google Distance Matrix");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("origins", origin.as_str()),
                ("destinations", destination.as_str()),
                ("mode", "driving"),
                ("units", "imperial"),
                ("departure_time", "now"),
                ("traffic_model", "best_guess"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| unresolvable(e.to_string()))?
            .error_for_status()
            .map_err(|e| unresolvable(e.to_string()))?
            .json::<Response>()
            .await
            .map_err(|e| unresolvable(format!("malformed response: {e}")))?;

        let result = response.into_duration();
        if let Err(e) = &result {
            warn!(destination = %destination, error = %e, "Google Maps returned no route");
        }
        result
    }
}
