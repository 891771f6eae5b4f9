//! Handler for `curbside serve`.

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::{Config, Credentials};

/// Apply command-line overrides, print the startup summary and serve.
pub async fn execute(mut config: Config, credentials: &Credentials, args: &ServeArgs) -> Result<()> {
    apply_overrides(&mut config, args);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", format!("http://{}", config.server.bind_address()));
    output::field("Keys", credentials.summary());
    match &config.server.static_dir {
        Some(dir) => output::field("Frontend", dir.display()),
        None => output::field("Frontend", output::muted("none")),
    }
    if !credentials.has_flight_provider() {
        output::warning("No flight provider key is set; estimates will fail");
        output::hint("set FLIGHTAWARE_API_KEY or AVIATIONSTACK_API_KEY");
    }

    bootstrap::serve(&config, credentials).await
}

fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = &args.static_dir {
        config.server.static_dir = Some(dir.clone());
    }
}
