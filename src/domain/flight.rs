//! Flight identity and arrival data.

use std::fmt;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::error::DomainError;

/// Validated flight designator, e.g. `AA1234` or `UAL42`.
///
/// Input is upper-cased and stripped of spaces, dashes and underscores before
/// validation, so `"aa 12-34"` parses to `AA1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Normalize and validate a flight designator.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let valid = [2, 3].into_iter().any(|len| {
            let Some((airline, number)) = split_at_checked(&normalized, len) else {
                return false;
            };
            valid_airline(airline)
                && (1..=4).contains(&number.len())
                && number.bytes().all(|b| b.is_ascii_digit())
        });

        if valid {
            Ok(Self(normalized))
        } else {
            Err(DomainError::InvalidFlightNumber {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn split_at_checked(s: &str, mid: usize) -> Option<(&str, &str)> {
    if s.is_char_boundary(mid) && mid < s.len() {
        Some(s.split_at(mid))
    } else {
        None
    }
}

/// Two-character IATA designators may contain one digit (`B6`, `9W`);
/// three-character ICAO designators are letters only.
fn valid_airline(code: &str) -> bool {
    match code.len() {
        2 => {
            code.bytes().all(|b| b.is_ascii_alphanumeric())
                && code.bytes().any(|b| b.is_ascii_alphabetic())
        }
        3 => code.bytes().all(|b| b.is_ascii_alphabetic()),
        _ => false,
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination airport as reported by the flight provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    /// IANA timezone of the airport. UTC when the provider omits it.
    #[serde(skip)]
    pub timezone: Tz,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            timezone: Tz::UTC,
        }
    }

    /// Attach a timezone by IANA name, keeping UTC if the name is unknown.
    #[must_use]
    pub fn with_timezone_name(mut self, name: Option<&str>) -> Self {
        if let Some(tz) = name.and_then(|n| n.trim_start_matches(':').parse::<Tz>().ok()) {
            self.timezone = tz;
        }
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// `"San Francisco International (SFO)"`, used as the route destination.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Arrival information for one flight, as returned by a flight provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightArrival {
    pub flight_number: FlightNumber,
    pub scheduled_arrival: Option<DateTime<Utc>>,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub airport: Airport,
}

impl FlightArrival {
    /// Best known arrival instant in the airport's timezone.
    ///
    /// Prefers the estimate over the schedule.
    pub fn arrival_time(&self) -> Result<DateTime<Tz>, DomainError> {
        self.estimated_arrival
            .or(self.scheduled_arrival)
            .map(|t| t.with_timezone(&self.airport.timezone))
            .ok_or_else(|| DomainError::MissingArrivalTime {
                flight: self.flight_number.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalizes_case_spaces_and_dashes() {
        let flight = FlightNumber::parse(" aa 12-3_4 ").unwrap();
        assert_eq!(flight.as_str(), "AA1234");
    }

    #[test]
    fn accepts_iata_icao_and_digit_designators() {
        for input in ["AA1", "UA42", "UAL42", "B61234", "9W120"] {
            assert!(FlightNumber::parse(input).is_ok(), "{input} should parse");
        }
    }

    #[test]
    fn rejects_malformed_designators() {
        for input in ["", "A1", "AA", "AA12345", "1234", "12AB", "AA12B", "ÄA123"] {
            assert!(
                matches!(
                    FlightNumber::parse(input),
                    Err(DomainError::InvalidFlightNumber { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn airport_timezone_defaults_to_utc() {
        let airport = Airport::new("SFO", "San Francisco").with_timezone_name(Some("Not/AZone"));
        assert_eq!(airport.timezone, Tz::UTC);
    }

    #[test]
    fn airport_accepts_flightaware_style_timezone() {
        let airport =
            Airport::new("SFO", "San Francisco").with_timezone_name(Some(":America/Los_Angeles"));
        assert_eq!(airport.timezone, chrono_tz::America::Los_Angeles);
    }

    #[test]
    fn airport_label_combines_name_and_code() {
        let airport = Airport::new("JFK", "John F Kennedy International");
        assert_eq!(airport.label(), "John F Kennedy International (JFK)");
    }

    fn arrival(
        scheduled: Option<DateTime<Utc>>,
        estimated: Option<DateTime<Utc>>,
    ) -> FlightArrival {
        FlightArrival {
            flight_number: FlightNumber::parse("AA100").unwrap(),
            scheduled_arrival: scheduled,
            estimated_arrival: estimated,
            airport: Airport::new("JFK", "JFK").with_timezone(chrono_tz::America::New_York),
        }
    }

    #[test]
    fn arrival_time_prefers_estimate() {
        let scheduled = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let estimated = Utc.with_ymd_and_hms(2025, 3, 1, 18, 25, 0).unwrap();
        let time = arrival(Some(scheduled), Some(estimated)).arrival_time().unwrap();
        assert_eq!(time, estimated);
        assert_eq!(time.timezone(), chrono_tz::America::New_York);
    }

    #[test]
    fn arrival_time_falls_back_to_schedule() {
        let scheduled = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        assert_eq!(arrival(Some(scheduled), None).arrival_time().unwrap(), scheduled);
    }

    #[test]
    fn arrival_time_fails_without_any_timestamp() {
        let err = arrival(None, None).arrival_time().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingArrivalTime {
                flight: "AA100".into()
            }
        );
    }
}
