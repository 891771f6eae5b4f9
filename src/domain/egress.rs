//! Airport egress model.
//!
//! Converts a wheels-down instant and the situational modifiers into the
//! instant the passenger is ready for pickup at the curb:
//!
//! ```text
//! exit = arrival + base × hub_multiplier × window_multiplier
//!                + holiday_extra + bag_extra
//! ```
//!
//! The multiplied term uses exact decimal arithmetic and is truncated to whole
//! seconds. The window multiplier is 1 unless arrival windows are configured.
//! All scaled durations are resolved once in [`EgressModel::new`], so
//! [`EgressModel::compute_exit_time`] cannot fail.

use chrono::{DateTime, Duration, Timelike};
use chrono_tz::Tz;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::modifier::{AirportBusy, CheckedBags, Holiday, SituationalModifiers};

/// Upper bound for any multiplier; keeps durations within a few days.
const MAX_MULTIPLIER: Decimal = Decimal::TEN;

/// Upper bound for the base duration (one day).
const MAX_BASE_MINUTES: u32 = 24 * 60;

/// Airport-size multipliers. `major` is the baseline and must be 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubMultipliers {
    #[serde(default = "default_small_hub")]
    pub small: Decimal,
    #[serde(default = "default_major_hub")]
    pub major: Decimal,
    #[serde(default = "default_mega_hub")]
    pub mega: Decimal,
}

impl HubMultipliers {
    #[must_use]
    pub fn get(&self, busy: AirportBusy) -> Decimal {
        match busy {
            AirportBusy::SmallHub => self.small,
            AirportBusy::MajorHub => self.major,
            AirportBusy::MegaHub => self.mega,
        }
    }
}

impl Default for HubMultipliers {
    fn default() -> Self {
        Self {
            small: default_small_hub(),
            major: default_major_hub(),
            mega: default_mega_hub(),
        }
    }
}

/// Extra minutes for holiday crowding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayExtras {
    #[serde(default)]
    pub no: u32,
    #[serde(default = "default_small_holiday")]
    pub small: u32,
    #[serde(default = "default_big_holiday")]
    pub big: u32,
}

impl HolidayExtras {
    #[must_use]
    pub fn get(&self, holiday: Holiday) -> u32 {
        match holiday {
            Holiday::No => self.no,
            Holiday::Small => self.small,
            Holiday::Big => self.big,
        }
    }
}

impl Default for HolidayExtras {
    fn default() -> Self {
        Self {
            no: 0,
            small: default_small_holiday(),
            big: default_big_holiday(),
        }
    }
}

/// Extra minutes for the baggage-claim wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagExtras {
    #[serde(default)]
    pub no: u32,
    #[serde(default = "default_checked_bags")]
    pub yes: u32,
}

impl BagExtras {
    #[must_use]
    pub fn get(&self, bags: CheckedBags) -> u32 {
        match bags {
            CheckedBags::No => self.no,
            CheckedBags::Yes => self.yes,
        }
    }
}

impl Default for BagExtras {
    fn default() -> Self {
        Self {
            no: 0,
            yes: default_checked_bags(),
        }
    }
}

/// Local-time window (inclusive hours) that scales the base duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub multiplier: Decimal,
}

impl ArrivalWindow {
    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Tunable parameter table for the egress model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgressParameters {
    /// Deplaning plus walk to the curb, no bags, major hub, no holiday.
    #[serde(default = "default_base_minutes")]
    pub base_minutes: u32,
    #[serde(default)]
    pub hub: HubMultipliers,
    #[serde(default)]
    pub holiday: HolidayExtras,
    #[serde(default)]
    pub bags: BagExtras,
    /// First matching window wins. Empty means no time-of-day scaling.
    #[serde(default)]
    pub arrival_windows: Vec<ArrivalWindow>,
}

impl Default for EgressParameters {
    fn default() -> Self {
        Self {
            base_minutes: default_base_minutes(),
            hub: HubMultipliers::default(),
            holiday: HolidayExtras::default(),
            bags: BagExtras::default(),
            arrival_windows: Vec::new(),
        }
    }
}

impl EgressParameters {
    /// Check the monotonicity and positivity rules of the model.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_minutes == 0 || self.base_minutes > MAX_BASE_MINUTES {
            return Err(invalid(
                "base_minutes",
                format!("must be between 1 and {MAX_BASE_MINUTES}"),
            ));
        }

        let hub = &self.hub;
        for (field, value) in [
            ("hub.small", hub.small),
            ("hub.major", hub.major),
            ("hub.mega", hub.mega),
        ] {
            check_multiplier(field, value)?;
        }
        if hub.major != Decimal::ONE {
            return Err(invalid("hub.major", "major hub is the baseline and must be 1.0"));
        }
        if !(hub.small < hub.major && hub.major < hub.mega) {
            return Err(invalid(
                "hub",
                "multipliers must increase from small to major to mega",
            ));
        }

        let holiday = &self.holiday;
        if !(holiday.no <= holiday.small && holiday.small <= holiday.big) {
            return Err(invalid("holiday", "extras must not decrease from no to small to big"));
        }
        if self.bags.yes < self.bags.no {
            return Err(invalid("bags.yes", "must be at least bags.no"));
        }

        for window in &self.arrival_windows {
            if window.end_hour > 23 || window.start_hour > window.end_hour {
                return Err(invalid(
                    "arrival_windows",
                    format!(
                        "hours {}..={} must be ordered and within 0..=23",
                        window.start_hour, window.end_hour
                    ),
                ));
            }
            check_multiplier("arrival_windows.multiplier", window.multiplier)?;
        }

        Ok(())
    }

    fn window_multiplier(&self, hour: u32) -> Decimal {
        self.arrival_windows
            .iter()
            .find(|w| w.contains(hour))
            .map_or(Decimal::ONE, |w| w.multiplier)
    }
}

fn check_multiplier(field: &'static str, value: Decimal) -> Result<(), DomainError> {
    if value <= Decimal::ZERO || value > MAX_MULTIPLIER {
        return Err(invalid(field, format!("must be in (0, {MAX_MULTIPLIER}], got {value}")));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidParameter {
        field,
        reason: reason.into(),
    }
}

/// Validated egress model with precomputed scaled base durations.
#[derive(Debug, Clone)]
pub struct EgressModel {
    params: EgressParameters,
    /// Scaled base in whole seconds, indexed by `[hub][local hour]`.
    scaled_seconds: [[i64; 24]; 3],
}

impl EgressModel {
    pub fn new(params: EgressParameters) -> Result<Self, DomainError> {
        params.validate()?;

        let base_seconds = Decimal::from(params.base_minutes) * Decimal::from(60);
        let mut scaled_seconds = [[0_i64; 24]; 3];
        for (row, busy) in scaled_seconds.iter_mut().zip(AirportBusy::ALL) {
            for (hour, cell) in (0_u32..).zip(row.iter_mut()) {
                let scaled = base_seconds * params.hub.get(busy) * params.window_multiplier(hour);
                let seconds = scaled.trunc().to_i64().unwrap_or(0);
                if seconds <= 0 {
                    return Err(invalid(
                        "base_minutes",
                        format!("scaled egress for {busy} at hour {hour} rounds to zero"),
                    ));
                }
                *cell = seconds;
            }
        }

        Ok(Self {
            params,
            scaled_seconds,
        })
    }

    #[must_use]
    pub fn parameters(&self) -> &EgressParameters {
        &self.params
    }

    /// Wheels-down to curb duration for an arrival at `local_hour`.
    #[must_use]
    pub fn egress_duration(&self, local_hour: u32, modifiers: SituationalModifiers) -> Duration {
        let row = match modifiers.airport_busy {
            AirportBusy::SmallHub => 0,
            AirportBusy::MajorHub => 1,
            AirportBusy::MegaHub => 2,
        };
        let scaled = self.scaled_seconds[row][(local_hour % 24) as usize];
        let extra_minutes = self.params.holiday.get(modifiers.holiday)
            + self.params.bags.get(modifiers.checked_bags);

        Duration::seconds(scaled) + Duration::minutes(i64::from(extra_minutes))
    }

    /// Instant the passenger is ready at the curb. Always after `arrival_time`.
    #[must_use]
    pub fn compute_exit_time(
        &self,
        arrival_time: DateTime<Tz>,
        modifiers: SituationalModifiers,
    ) -> DateTime<Tz> {
        arrival_time + self.egress_duration(arrival_time.hour(), modifiers)
    }
}

const fn default_base_minutes() -> u32 {
    75
}

fn default_small_hub() -> Decimal {
    Decimal::new(8, 1)
}

fn default_major_hub() -> Decimal {
    Decimal::ONE
}

fn default_mega_hub() -> Decimal {
    Decimal::new(13, 1)
}

const fn default_small_holiday() -> u32 {
    15
}

const fn default_big_holiday() -> u32 {
    30
}

const fn default_checked_bags() -> u32 {
    20
}
