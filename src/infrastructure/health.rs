//! Startup health reporting.
//!
//! Checks what can be known without calling any provider: that the
//! configuration is usable, which providers have credentials and whether the
//! static frontend exists.

use crate::infrastructure::config::{Config, Credentials};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy(String),
}

#[derive(Debug, Clone)]
pub struct HealthCheck {
    name: &'static str,
    critical: bool,
    status: HealthStatus,
}

impl HealthCheck {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn critical(&self) -> bool {
        self.critical
    }

    pub fn status(&self) -> &HealthStatus {
        &self.status
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy)
    }
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    checks: Vec<HealthCheck>,
}

impl HealthReport {
    pub fn checks(&self) -> &[HealthCheck] {
        &self.checks
    }

    pub fn is_healthy(&self) -> bool {
        self.checks
            .iter()
            .filter(|check| check.critical())
            .all(HealthCheck::is_healthy)
    }
}

pub fn health_check(config: &Config, credentials: &Credentials) -> HealthReport {
    let mut checks = Vec::new();

    checks.push(HealthCheck {
        name: "egress_model",
        critical: true,
        status: match config.estimator() {
            Ok(_) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        },
    });

    checks.push(HealthCheck {
        name: "flight_provider",
        critical: true,
        status: if credentials.has_flight_provider() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy(
                "set FLIGHTAWARE_API_KEY or AVIATIONSTACK_API_KEY".to_string(),
            )
        },
    });

    checks.push(HealthCheck {
        name: "route_provider",
        critical: false,
        status: if credentials.google_maps_api_key.is_some() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy(format!(
                "GOOGLE_MAPS_API_KEY not set, assuming {} minute drives",
                config.route.fallback_minutes
            ))
        },
    });

    if let Some(dir) = &config.server.static_dir {
        checks.push(HealthCheck {
            name: "static_dir",
            critical: false,
            status: if dir.join("index.html").is_file() {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy(format!("{} has no index.html", dir.display()))
            },
        });
    }

    HealthReport { checks }
}

#[cfg(test)]
mod tests {
    use super::{health_check, HealthCheck, HealthReport, HealthStatus};
    use crate::infrastructure::config::{Config, Credentials};

    fn keys(flight: bool, maps: bool) -> Credentials {
        Credentials {
            flightaware_api_key: flight.then(|| "fa".to_string()),
            aviationstack_api_key: None,
            google_maps_api_key: maps.then(|| "gm".to_string()),
        }
    }

    #[test]
    fn health_check_struct_accessors() {
        let check = HealthCheck {
            name: "test_service",
            critical: true,
            status: HealthStatus::Healthy,
        };

        assert_eq!(check.name(), "test_service");
        assert!(check.critical());
        assert!(check.is_healthy());
    }

    #[test]
    fn health_report_ignores_non_critical_failures() {
        let report = HealthReport {
            checks: vec![
                HealthCheck {
                    name: "critical_pass",
                    critical: true,
                    status: HealthStatus::Healthy,
                },
                HealthCheck {
                    name: "optional_fail",
                    critical: false,
                    status: HealthStatus::Unhealthy("degraded".to_string()),
                },
            ],
        };

        assert!(report.is_healthy());
    }

    #[test]
    fn all_keys_is_fully_healthy() {
        let report = health_check(&Config::default(), &keys(true, true));
        assert!(report.is_healthy());
        assert!(report.checks().iter().all(HealthCheck::is_healthy));
    }

    #[test]
    fn missing_flight_key_is_unhealthy() {
        let report = health_check(&Config::default(), &keys(false, true));
        assert!(!report.is_healthy());
        let flight = report
            .checks()
            .iter()
            .find(|c| c.name() == "flight_provider")
            .unwrap();
        assert!(!flight.is_healthy());
    }

    #[test]
    fn missing_maps_key_is_degraded_only() {
        let report = health_check(&Config::default(), &keys(true, false));
        assert!(report.is_healthy());
        let route = report
            .checks()
            .iter()
            .find(|c| c.name() == "route_provider")
            .unwrap();
        assert!(matches!(route.status(), HealthStatus::Unhealthy(m) if m.contains("30 minute")));
    }

    #[test]
    fn missing_static_dir_is_reported() {
        let mut config = Config::default();
        config.server.static_dir = Some("/nonexistent/curbside-frontend".into());
        let report = health_check(&config, &keys(true, true));
        assert!(report.is_healthy());
        assert!(report.checks().iter().any(|c| c.name() == "static_dir" && !c.is_healthy()));
    }
}
