use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{Error, Result};
use crate::infrastructure::config::{Config, Credentials};
use crate::infrastructure::health::{health_check, HealthCheck, HealthStatus};

/// Run the local health check against `config` and the environment's keys.
pub fn execute_health(config: &Config, credentials: &Credentials) -> Result<()> {
    let report = health_check(config, credentials);

    if output::is_json() {
        let checks = report.checks().iter().map(check_json).collect::<Vec<_>>();
        output::json_output(json!({
            "command": "check.health",
            "status": if report.is_healthy() { "healthy" } else { "unhealthy" },
            "checks": checks,
        }));
    } else {
        output::section("Health Check");
        for check in report.checks() {
            let suffix = if check.critical() { " (critical)" } else { "" };
            output::field(&format!("{}{}", check.name(), suffix), describe(check));
        }
    }

    if !report.is_healthy() {
        output::error("Health check failed");
        return Err(Error::Connection("health check failed".to_string()));
    }
    output::success("Health check passed");
    Ok(())
}

fn status_parts(status: &HealthStatus) -> (&'static str, Option<&str>) {
    match status {
        HealthStatus::Healthy => ("healthy", None),
        HealthStatus::Unhealthy(reason) => ("unhealthy", Some(reason.as_str())),
    }
}

fn describe(check: &HealthCheck) -> String {
    match status_parts(check.status()) {
        (status, Some(reason)) => format!("{status}: {reason}"),
        (status, None) => status.to_string(),
    }
}

fn check_json(check: &HealthCheck) -> serde_json::Value {
    let (status, details) = status_parts(check.status());
    json!({
        "name": check.name(),
        "critical": check.critical(),
        "status": status,
        "details": details,
    })
}
