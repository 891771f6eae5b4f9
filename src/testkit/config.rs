//! Canonical test configurations.

use crate::infrastructure::config::Config;

/// Minimal TOML accepted by [`Config::parse_toml`]; every section defaulted.
pub const MINIMAL_TOML: &str = "";

/// TOML exercising every section with non-default values.
pub const FULL_TOML: &str = r#"
[server]
host = "127.0.0.1"
port = 9000
static_dir = "frontend/dist"

[logging]
level = "debug"
format = "json"

[flight]
timeout_secs = 5
provider_timeout_secs = 2
flightaware_base_url = "http://localhost:1/aeroapi"
aviationstack_base_url = "http://localhost:1/v1"

[route]
timeout_secs = 4
fallback_minutes = 25
google_base_url = "http://localhost:1/maps/api"

[egress]
base_minutes = 60

[egress.hub]
small = 0.75
major = 1.0
mega = 1.5

[egress.holiday]
no = 0
small = 10
big = 25

[egress.bags]
no = 0
yes = 15

[[egress.arrival_windows]]
start_hour = 6
end_hour = 9
multiplier = 1.3

[departure]
buffer_minutes = 15
"#;

/// Default configuration with the static directory unset.
pub fn default_config() -> Config {
    Config::default()
}
