//! Origin address and drive duration.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// Minimum length of a free-text address worth sending to a routing provider.
const MIN_ADDRESS_LEN: usize = 5;

/// Free-text postal address of the traveller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.chars().count() < MIN_ADDRESS_LEN {
            return Err(DomainError::InvalidAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longest drive accepted from a routing provider: one week.
pub const MAX_DRIVE_MINUTES: i64 = 7 * 24 * 60;

/// Drive time estimate at request time. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDuration {
    minutes: i64,
}

impl RouteDuration {
    pub fn from_minutes(minutes: i64) -> Result<Self, DomainError> {
        if !(0..=MAX_DRIVE_MINUTES).contains(&minutes) {
            return Err(DomainError::InvalidDuration { minutes });
        }
        Ok(Self { minutes })
    }

    /// Round a provider duration in seconds to whole minutes (half up).
    pub fn from_seconds(seconds: i64) -> Result<Self, DomainError> {
        if seconds < 0 {
            return Err(DomainError::InvalidDuration {
                minutes: seconds / 60,
            });
        }
        let rounded = seconds.checked_add(30).map_or(i64::MAX / 60, |s| s / 60);
        Self::from_minutes(rounded)
    }

    #[must_use]
    pub const fn minutes(self) -> i64 {
        self.minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_trimmed() {
        let address = Address::parse("  1 Main St, Springfield  ").unwrap();
        assert_eq!(address.as_str(), "1 Main St, Springfield");
    }

    #[test]
    fn short_or_blank_addresses_are_rejected() {
        assert_eq!(Address::parse("   ").unwrap_err(), DomainError::InvalidAddress);
        assert_eq!(Address::parse(" 1 A ").unwrap_err(), DomainError::InvalidAddress);
        assert!(Address::parse("1 A St").is_ok());
    }

    #[test]
    fn negative_minutes_are_invalid() {
        assert_eq!(
            RouteDuration::from_minutes(-5).unwrap_err(),
            DomainError::InvalidDuration { minutes: -5 }
        );
    }

    #[test]
    fn implausibly_long_drives_are_invalid() {
        assert!(RouteDuration::from_minutes(MAX_DRIVE_MINUTES).is_ok());
        assert!(matches!(
            RouteDuration::from_minutes(MAX_DRIVE_MINUTES + 1),
            Err(DomainError::InvalidDuration { .. })
        ));
        assert!(RouteDuration::from_seconds(1_000_000_000_000_000).is_err());
        assert!(RouteDuration::from_seconds(i64::MAX).is_err());
    }

    #[test]
    fn seconds_round_to_nearest_minute() {
        assert_eq!(RouteDuration::from_seconds(0).unwrap().minutes(), 0);
        assert_eq!(RouteDuration::from_seconds(89).unwrap().minutes(), 1);
        assert_eq!(RouteDuration::from_seconds(90).unwrap().minutes(), 2);
        assert_eq!(RouteDuration::from_seconds(1_799).unwrap().minutes(), 30);
    }
}
