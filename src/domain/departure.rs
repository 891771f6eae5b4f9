//! Departure calculator and the combined estimate.
//!
//! Works backward from the curb-ready instant:
//! `leave = exit − drive − buffer`. A leave time in the past is returned as
//! computed; [`EstimationResult::is_past`] flags it for the caller.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::egress::EgressModel;
use super::error::DomainError;
use super::modifier::SituationalModifiers;

/// Parking and waiting margin used when none is configured.
pub const DEFAULT_BUFFER_MINUTES: u32 = 20;

/// Leave-time arithmetic with a fixed parking/waiting buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureCalculator {
    buffer_minutes: u32,
}

impl DepartureCalculator {
    #[must_use]
    pub const fn new(buffer_minutes: u32) -> Self {
        Self { buffer_minutes }
    }

    #[must_use]
    pub const fn buffer_minutes(&self) -> u32 {
        self.buffer_minutes
    }

    /// Recommended leave instant for the given exit time and drive.
    pub fn leave_time(
        &self,
        airport_exit_time: DateTime<Tz>,
        drive_minutes: i64,
    ) -> Result<DateTime<Tz>, DomainError> {
        let invalid = || DomainError::InvalidDuration {
            minutes: drive_minutes,
        };
        if drive_minutes < 0 {
            return Err(invalid());
        }
        let total = drive_minutes
            .checked_add(i64::from(self.buffer_minutes))
            .and_then(Duration::try_minutes)
            .ok_or_else(invalid)?;
        airport_exit_time
            .checked_sub_signed(total)
            .ok_or_else(invalid)
    }

    /// Leave time plus the breakdown shown to the caller.
    ///
    /// `now` only feeds [`EstimationResult::is_past`]; it never changes the
    /// arithmetic.
    pub fn compute_leave_time(
        &self,
        arrival_time: DateTime<Tz>,
        airport_exit_time: DateTime<Tz>,
        drive_minutes: i64,
        now: DateTime<Utc>,
    ) -> Result<EstimationResult, DomainError> {
        let leave_time = self.leave_time(airport_exit_time, drive_minutes)?;
        Ok(EstimationResult {
            leave_time,
            arrival_time,
            airport_exit_time,
            drive_time_minutes: drive_minutes,
            buffer_minutes: self.buffer_minutes,
            is_past: leave_time < now,
        })
    }
}

impl Default for DepartureCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_MINUTES)
    }
}

/// Output of one estimate. Fully derived from the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimationResult {
    pub leave_time: DateTime<Tz>,
    pub arrival_time: DateTime<Tz>,
    pub airport_exit_time: DateTime<Tz>,
    pub drive_time_minutes: i64,
    pub buffer_minutes: u32,
    pub is_past: bool,
}

/// Egress model and departure calculator applied together.
#[derive(Debug, Clone)]
pub struct DepartureEstimator {
    egress: EgressModel,
    departure: DepartureCalculator,
}

impl DepartureEstimator {
    #[must_use]
    pub fn new(egress: EgressModel, departure: DepartureCalculator) -> Self {
        Self { egress, departure }
    }

    #[must_use]
    pub fn egress(&self) -> &EgressModel {
        &self.egress
    }

    #[must_use]
    pub fn departure(&self) -> &DepartureCalculator {
        &self.departure
    }

    pub fn estimate(
        &self,
        arrival_time: DateTime<Tz>,
        modifiers: SituationalModifiers,
        drive_minutes: i64,
        now: DateTime<Utc>,
    ) -> Result<EstimationResult, DomainError> {
        let exit = self.egress.compute_exit_time(arrival_time, modifiers);
        self.departure
            .compute_leave_time(arrival_time, exit, drive_minutes, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::egress::EgressParameters;
    use crate::domain::modifier::{AirportBusy, CheckedBags, Holiday};
    use chrono::TimeZone;

    fn arrival() -> DateTime<Tz> {
        Tz::UTC.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap()
    }

    fn long_ago() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
    }

    fn estimator() -> DepartureEstimator {
        DepartureEstimator::new(
            EgressModel::new(EgressParameters::default()).unwrap(),
            DepartureCalculator::default(),
        )
    }

    fn baseline() -> SituationalModifiers {
        SituationalModifiers::new(AirportBusy::MajorHub, Holiday::No, CheckedBags::No)
    }

    #[test]
    fn scenario_major_hub_thirty_minute_drive() {
        let result = estimator().estimate(arrival(), baseline(), 30, long_ago()).unwrap();

        let base = Duration::minutes(75);
        assert_eq!(result.airport_exit_time, arrival() + base);
        assert_eq!(
            result.leave_time,
            result.airport_exit_time - Duration::minutes(30 + 20)
        );
        assert_eq!(result.drive_time_minutes, 30);
        assert_eq!(result.buffer_minutes, 20);
    }

    #[test]
    fn scenario_worst_case_exits_later() {
        let worst = SituationalModifiers::new(AirportBusy::MegaHub, Holiday::Big, CheckedBags::Yes);
        let base = estimator().estimate(arrival(), baseline(), 30, long_ago()).unwrap();
        let busy = estimator().estimate(arrival(), worst, 30, long_ago()).unwrap();
        assert!(busy.airport_exit_time > base.airport_exit_time);
    }

    #[test]
    fn scenario_zero_drive_leaves_buffer_before_exit() {
        let result = estimator().estimate(arrival(), baseline(), 0, long_ago()).unwrap();
        assert_eq!(
            result.leave_time,
            result.airport_exit_time - Duration::minutes(20)
        );
    }

    #[test]
    fn scenario_negative_drive_is_rejected() {
        let err = estimator()
            .estimate(arrival(), baseline(), -5, long_ago())
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidDuration { minutes: -5 });
    }

    #[test]
    fn longer_drive_moves_leave_time_earlier_by_same_delta() {
        let calc = DepartureCalculator::default();
        let exit = arrival();
        for drive in [0_i64, 1, 17, 45, 180] {
            let a = calc.leave_time(exit, drive).unwrap();
            let b = calc.leave_time(exit, drive + 10).unwrap();
            assert_eq!(a - b, Duration::minutes(10));
        }
    }

    #[test]
    fn unrepresentable_drive_is_an_error_not_a_panic() {
        let calc = DepartureCalculator::default();
        for drive in [i64::MAX, i64::MAX / 60, 16_666_666_666_666] {
            assert_eq!(
                calc.leave_time(arrival(), drive).unwrap_err(),
                DomainError::InvalidDuration { minutes: drive }
            );
        }
    }

    #[test]
    fn repeated_estimates_are_identical() {
        let est = estimator();
        let first = est.estimate(arrival(), baseline(), 42, long_ago()).unwrap();
        for _ in 0..10 {
            assert_eq!(est.estimate(arrival(), baseline(), 42, long_ago()).unwrap(), first);
        }
    }

    #[test]
    fn past_leave_time_is_flagged_not_clamped() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 16, 0, 0).unwrap();
        let result = estimator().estimate(arrival(), baseline(), 30, now).unwrap();
        assert!(result.is_past);
        // 14:00 + 75 − 50 = 14:25, still reported as computed.
        assert_eq!(result.leave_time, arrival() + Duration::minutes(25));
    }

    #[test]
    fn leave_time_exactly_now_is_not_past() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 14, 25, 0).unwrap();
        let result = estimator().estimate(arrival(), baseline(), 30, now).unwrap();
        assert!(!result.is_past);
    }

    #[test]
    fn custom_buffer_is_applied() {
        let calc = DepartureCalculator::new(5);
        let leave = calc.leave_time(arrival(), 10).unwrap();
        assert_eq!(leave, arrival() - Duration::minutes(15));
    }

    #[test]
    fn result_serializes_rfc3339_in_local_zone() {
        let arrival = chrono_tz::America::Los_Angeles
            .with_ymd_and_hms(2025, 1, 10, 13, 0, 0)
            .unwrap();
        let result = estimator().estimate(arrival, baseline(), 50, long_ago()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["arrival_time"], "2025-01-10T13:00:00-08:00");
        assert_eq!(json["airport_exit_time"], "2025-01-10T14:15:00-08:00");
        assert_eq!(json["leave_time"], "2025-01-10T13:05:00-08:00");
    }
}
