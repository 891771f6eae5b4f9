//! Route estimator factory.

use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use crate::adapter::outbound::route::{FixedRoute, GoogleDistanceMatrix};
use crate::infrastructure::config::{Config, Credentials};
use crate::port::RouteEstimator;

/// Google Distance Matrix when a maps key is set, else a fixed drive time.
pub fn build_route_estimator(
    config: &Config,
    credentials: &Credentials,
    client: &Client,
) -> Arc<dyn RouteEstimator> {
    let estimator: Arc<dyn RouteEstimator> = match &credentials.google_maps_api_key {
        Some(key) => Arc::new(
            GoogleDistanceMatrix::new(key)
                .with_base_url(&config.route.google_base_url)
                .with_client(client.clone()),
        ),
        None => {
            warn!(
                minutes = config.route.fallback_minutes,
                "GOOGLE_MAPS_API_KEY not set, using a fixed drive time"
            );
            Arc::new(FixedRoute::new(config.route.fallback_minutes))
        }
    };

    info!(provider = estimator.name(), "Route provider initialized");
    estimator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_key_selects_google() {
        let credentials = Credentials {
            google_maps_api_key: Some("key".into()),
            ..Credentials::default()
        };
        let estimator = build_route_estimator(&Config::default(), &credentials, &Client::new());
        assert_eq!(estimator.name(), "google");
    }

    #[test]
    fn missing_key_selects_fixed() {
        let estimator =
            build_route_estimator(&Config::default(), &Credentials::default(), &Client::new());
        assert_eq!(estimator.name(), "fixed");
    }
}
