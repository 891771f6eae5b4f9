//! Flight lookup factory.

use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use crate::adapter::outbound::flight::{AviationStack, FallbackFlightLookup, FlightAware};
use crate::infrastructure::config::{Config, Credentials};
use crate::port::FlightLookup;

/// Build the flight lookup chain from the keys that are present.
///
/// FlightAware is tried first, then AviationStack, each bounded by
/// `flight.provider_timeout_secs`. With exactly one key the provider is
/// returned directly. With no key the chain is empty and every
/// lookup fails as unavailable.
pub fn build_flight_lookup(
    config: &Config,
    credentials: &Credentials,
    client: &Client,
) -> Arc<dyn FlightLookup> {
    let mut providers: Vec<Arc<dyn FlightLookup>> = Vec::new();

    if let Some(key) = &credentials.flightaware_api_key {
        providers.push(Arc::new(
            FlightAware::new(key)
                .with_base_url(&config.flight.flightaware_base_url)
                .with_client(client.clone()),
        ));
    }
    if let Some(key) = &credentials.aviationstack_api_key {
        providers.push(Arc::new(
            AviationStack::new(key)
                .with_base_url(&config.flight.aviationstack_base_url)
                .with_client(client.clone()),
        ));
    }

    match providers.len() {
        0 => {
            warn!("No flight API key set, flight lookups will fail");
            Arc::new(FallbackFlightLookup::new(providers))
        }
        1 => {
            let provider = providers.remove(0);
            info!(provider = provider.name(), "Flight provider initialized");
            provider
        }
        _ => {
            let chain = FallbackFlightLookup::new(providers)
                .with_attempt_timeout(config.flight.provider_timeout());
            info!(providers = ?chain.provider_names(), "Flight provider chain initialized");
            Arc::new(chain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(flightaware: bool, aviationstack: bool) -> Credentials {
        Credentials {
            flightaware_api_key: flightaware.then(|| "fa".to_string()),
            aviationstack_api_key: aviationstack.then(|| "as".to_string()),
            google_maps_api_key: None,
        }
    }

    #[test]
    fn single_key_returns_provider_directly() {
        let client = Client::new();
        let lookup = build_flight_lookup(&Config::default(), &credentials(false, true), &client);
        assert_eq!(lookup.name(), "aviationstack");
    }

    #[test]
    fn both_keys_build_a_chain() {
        let client = Client::new();
        let lookup = build_flight_lookup(&Config::default(), &credentials(true, true), &client);
        assert_eq!(lookup.name(), "fallback");
    }

    #[test]
    fn no_key_builds_empty_chain() {
        let client = Client::new();
        let lookup = build_flight_lookup(&Config::default(), &credentials(false, false), &client);
        assert_eq!(lookup.name(), "fallback");
    }
}
