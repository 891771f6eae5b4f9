//! Composition root for the HTTP service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::adapter::inbound::http::{router, AppState};
use crate::error::Result;
use crate::infrastructure::config::{Config, Credentials};
use crate::infrastructure::factory::build_planner;
use crate::infrastructure::health::health_check;
use crate::port::PlanPickup;

/// Wire the planner and serve HTTP until Ctrl-C or SIGTERM.
pub async fn serve(config: &Config, credentials: &Credentials) -> Result<()> {
    let report = health_check(config, credentials);
    for check in report.checks().iter().filter(|c| !c.is_healthy()) {
        warn!(check = check.name(), status = ?check.status(), "Startup check failed");
    }

    let planner: Arc<dyn PlanPickup> = Arc::new(build_planner(config, credentials)?);
    serve_with(config, planner).await
}

/// Serve HTTP with an already-built planner.
pub async fn serve_with(config: &Config, planner: Arc<dyn PlanPickup>) -> Result<()> {
    let app = router(AppState::new(planner), config.server.static_dir.as_deref());

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
