//! Situational modifiers supplied by the caller.
//!
//! Each modifier has a closed, enumerated domain. Parsing from text is the only
//! place an out-of-domain value can appear; it is rejected with
//! [`DomainError::InvalidModifier`] so the egress model only ever sees valid
//! values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Categorical proxy for airport congestion and walking distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AirportBusy {
    SmallHub,
    MajorHub,
    MegaHub,
}

impl AirportBusy {
    pub const ALL: [Self; 3] = [Self::SmallHub, Self::MajorHub, Self::MegaHub];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallHub => "small-hub",
            Self::MajorHub => "major-hub",
            Self::MegaHub => "mega-hub",
        }
    }
}

/// Holiday crowding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Holiday {
    No,
    Small,
    Big,
}

impl Holiday {
    pub const ALL: [Self; 3] = [Self::No, Self::Small, Self::Big];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Small => "small",
            Self::Big => "big",
        }
    }
}

/// Whether the passenger waits at baggage claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckedBags {
    No,
    Yes,
}

impl CheckedBags {
    pub const ALL: [Self; 2] = [Self::No, Self::Yes];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Yes => "yes",
        }
    }
}

macro_rules! text_enum {
    ($ty:ty, $field:literal, $expected:literal) => {
        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| DomainError::InvalidModifier {
                        field: $field,
                        value: s.to_string(),
                        expected: $expected,
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum!(AirportBusy, "airport_busy", "small-hub, major-hub, mega-hub");
text_enum!(Holiday, "holiday", "no, small, big");
text_enum!(CheckedBags, "checked_bags", "no, yes");

/// The full set of modifiers for one estimate. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SituationalModifiers {
    pub airport_busy: AirportBusy,
    pub holiday: Holiday,
    pub checked_bags: CheckedBags,
}

impl SituationalModifiers {
    #[must_use]
    pub const fn new(airport_busy: AirportBusy, holiday: Holiday, checked_bags: CheckedBags) -> Self {
        Self {
            airport_busy,
            holiday,
            checked_bags,
        }
    }

    /// Parse all three modifiers from text, failing on the first invalid one.
    pub fn parse(airport_busy: &str, holiday: &str, checked_bags: &str) -> Result<Self, DomainError> {
        Ok(Self {
            airport_busy: airport_busy.parse()?,
            holiday: holiday.parse()?,
            checked_bags: checked_bags.parse()?,
        })
    }
}
