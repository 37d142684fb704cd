//! Conversion of a host clock reading into a location's wall-clock time

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use thiserror::Error;

/// Errors that can occur when shifting a clock reading by a UTC offset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    /// The offset is not finite or pushes the instant out of range
    #[error("Invalid UTC offset: {0} hours")]
    InvalidOffset(f64),
}

/// Wall-clock time at a forecast location.
///
/// Carries no zone identity: the value is only meaningful when its calendar
/// and clock fields are read directly. Rendering it through another time zone
/// conversion would apply an offset twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalTime(NaiveDateTime);

impl LocalTime {
    /// Wraps an already-shifted wall-clock value
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self(naive)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Seconds elapsed since local midnight
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }
}

/// Converts a host clock reading into the location's wall-clock time.
///
/// The reading is first normalized to UTC, which cancels whatever zone the
/// host clock carries, and then shifted by `utc_offset_hours`. Fractional
/// offsets such as +5.5 or +5.75 are kept exact to the second.
///
/// # Arguments
/// * `now` - Host clock reading in any time zone
/// * `utc_offset_hours` - Signed offset of the location from UTC, in hours
///
/// # Returns
/// * `Ok(LocalTime)` - Wall-clock time at the location
/// * `Err(TimeError::InvalidOffset)` - If the offset is not finite or out of range
pub fn to_local_time<Tz: TimeZone>(
    now: &DateTime<Tz>,
    utc_offset_hours: f64,
) -> Result<LocalTime, TimeError> {
    if !utc_offset_hours.is_finite() {
        return Err(TimeError::InvalidOffset(utc_offset_hours));
    }

    // Step 1: drop the host bias
    let utc = now.naive_utc();

    // Step 2: apply the location's offset
    let offset_seconds = (utc_offset_hours * 3600.0).round();
    if offset_seconds.abs() > i64::MAX as f64 / 1000.0 {
        return Err(TimeError::InvalidOffset(utc_offset_hours));
    }
    let shift = Duration::try_seconds(offset_seconds as i64)
        .ok_or(TimeError::InvalidOffset(utc_offset_hours))?;

    utc.checked_add_signed(shift)
        .map(LocalTime)
        .ok_or(TimeError::InvalidOffset(utc_offset_hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_zero_offset_matches_utc_fields() {
        let now = utc(2025, 3, 21, 14, 7, 9);
        let local = to_local_time(&now, 0.0).unwrap();

        assert_eq!(local.hour(), 14);
        assert_eq!(local.minute(), 7);
        assert_eq!(local.second(), 9);
        assert_eq!(local.date(), now.date_naive());
    }

    #[test]
    fn test_zero_offset_ignores_host_zone() {
        // Same instant observed from hosts in three different zones
        let instant = utc(2025, 3, 21, 23, 30, 0);
        let tokyo = instant.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
        let denver = instant.with_timezone(&FixedOffset::west_opt(7 * 3600).unwrap());

        for reading in [
            to_local_time(&instant, 0.0).unwrap(),
            to_local_time(&tokyo, 0.0).unwrap(),
            to_local_time(&denver, 0.0).unwrap(),
        ] {
            assert_eq!(reading.hour(), 23);
            assert_eq!(reading.minute(), 30);
            assert_eq!(reading.date(), NaiveDate::from_ymd_opt(2025, 3, 21).unwrap());
        }
    }

    #[test]
    fn test_positive_offset_rolls_date_forward() {
        let now = utc(2025, 3, 21, 22, 15, 0);
        let local = to_local_time(&now, 3.0).unwrap();

        assert_eq!(local.hour(), 1);
        assert_eq!(local.minute(), 15);
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
    }

    #[test]
    fn test_negative_offset_rolls_date_back() {
        let now = utc(2025, 1, 1, 2, 0, 0);
        let local = to_local_time(&now, -8.0).unwrap();

        assert_eq!(local.hour(), 18);
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_fractional_offsets_are_not_truncated() {
        let now = utc(2025, 6, 1, 10, 0, 0);

        let india = to_local_time(&now, 5.5).unwrap();
        assert_eq!((india.hour(), india.minute()), (15, 30));

        let nepal = to_local_time(&now, 5.75).unwrap();
        assert_eq!((nepal.hour(), nepal.minute()), (15, 45));

        let marquesas = to_local_time(&now, -9.5).unwrap();
        assert_eq!((marquesas.hour(), marquesas.minute()), (0, 30));
    }

    #[test]
    fn test_non_finite_offset_is_rejected() {
        let now = utc(2025, 6, 1, 10, 0, 0);
        assert!(matches!(
            to_local_time(&now, f64::NAN),
            Err(TimeError::InvalidOffset(_))
        ));
        assert!(to_local_time(&now, f64::INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_offset_is_rejected() {
        let now = utc(2025, 6, 1, 10, 0, 0);
        assert!(to_local_time(&now, 1.0e15).is_err());
    }

    #[test]
    fn test_seconds_from_midnight() {
        let now = utc(2025, 6, 1, 1, 2, 3);
        let local = to_local_time(&now, 0.0).unwrap();
        assert_eq!(local.seconds_from_midnight(), 3723);
    }
}
