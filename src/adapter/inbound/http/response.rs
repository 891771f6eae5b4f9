//! Successful response body.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::port::PickupPlan;

/// Clock time shown to people, e.g. `1:05 PM PST`.
#[must_use]
pub fn display_time(time: &DateTime<Tz>) -> String {
    time.format("%-I:%M %p %Z").to_string()
}

/// `GET /when-to-leave` response.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveTimeResponse {
    pub leave_time: DateTime<Tz>,
    pub details: Details,
}

#[derive(Debug, Clone, Serialize)]
pub struct Details {
    pub arrival_time: DateTime<Tz>,
    pub airport_exit_time: DateTime<Tz>,
    pub drive_time_minutes: i64,
    pub buffer_minutes: u32,
    pub is_past: bool,
    pub airport: AirportView,
    pub display: DisplayTimes,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirportView {
    pub code: String,
    pub name: String,
    pub timezone: String,
}

/// Pre-formatted strings in the airport's local time.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayTimes {
    pub leave_time: String,
    pub arrival_time: String,
    pub airport_exit_time: String,
}

impl From<&PickupPlan> for LeaveTimeResponse {
    fn from(plan: &PickupPlan) -> Self {
        let estimate = &plan.estimate;
        Self {
            leave_time: estimate.leave_time,
            details: Details {
                arrival_time: estimate.arrival_time,
                airport_exit_time: estimate.airport_exit_time,
                drive_time_minutes: estimate.drive_time_minutes,
                buffer_minutes: estimate.buffer_minutes,
                is_past: estimate.is_past,
                airport: AirportView {
                    code: plan.airport.code.clone(),
                    name: plan.airport.name.clone(),
                    timezone: plan.airport.timezone.name().to_string(),
                },
                display: DisplayTimes {
                    leave_time: display_time(&estimate.leave_time),
                    arrival_time: format!(
                        "{} at {}",
                        display_time(&estimate.arrival_time),
                        plan.airport.label()
                    ),
                    airport_exit_time: display_time(&estimate.airport_exit_time),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartureCalculator, DepartureEstimator, EgressModel, EgressParameters};
    use crate::testkit::domain::{baseline_modifiers, flight_number, sfo, utc};
    use chrono::TimeZone;

    fn plan() -> PickupPlan {
        let estimator = DepartureEstimator::new(
            EgressModel::new(EgressParameters::default()).unwrap(),
            DepartureCalculator::default(),
        );
        let arrival = chrono_tz::America::Los_Angeles
            .with_ymd_and_hms(2025, 1, 10, 13, 0, 0)
            .unwrap();
        PickupPlan {
            flight: flight_number("UA1"),
            airport: sfo(),
            estimate: estimator
                .estimate(arrival, baseline_modifiers(), 50, utc(0, 0))
                .unwrap(),
        }
    }

    #[test]
    fn display_time_is_twelve_hour_with_zone() {
        let time = chrono_tz::America::Los_Angeles
            .with_ymd_and_hms(2025, 1, 10, 13, 5, 0)
            .unwrap();
        assert_eq!(display_time(&time), "1:05 PM PST");

        let morning = chrono_tz::Tz::UTC.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap();
        assert_eq!(display_time(&morning), "9:30 AM UTC");
    }

    #[test]
    fn response_shape_matches_contract() {
        let json = serde_json::to_value(LeaveTimeResponse::from(&plan())).unwrap();

        assert_eq!(json["leave_time"], "2025-01-10T13:05:00-08:00");
        assert_eq!(json["details"]["arrival_time"], "2025-01-10T13:00:00-08:00");
        assert_eq!(json["details"]["airport_exit_time"], "2025-01-10T14:15:00-08:00");
        assert_eq!(json["details"]["drive_time_minutes"], 50);
        assert_eq!(json["details"]["buffer_minutes"], 20);
        assert_eq!(json["details"]["is_past"], false);
        assert_eq!(json["details"]["airport"]["code"], "SFO");
        assert_eq!(json["details"]["airport"]["timezone"], "America/Los_Angeles");
        assert_eq!(json["details"]["display"]["leave_time"], "1:05 PM PST");
        assert_eq!(
            json["details"]["display"]["arrival_time"],
            "1:00 PM PST at San Francisco International (SFO)"
        );
        assert_eq!(json["details"]["display"]["airport_exit_time"], "2:15 PM PST");
    }
}
