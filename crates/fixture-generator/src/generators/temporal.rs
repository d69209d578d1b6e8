//! Default temporal bounds.
//!
//! Date, date-time, instant and zoned values all default to the span from
//! the Unix epoch to the last second of 2100 (UTC). Time of day defaults to
//! the whole day at one-second resolution.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Epoch second of 2100-12-31T23:59:59Z.
pub const LATEST_EPOCH_SECOND: i64 = 4_133_980_799;

/// Default instant bounds.
pub fn instant_bounds() -> (DateTime<Utc>, DateTime<Utc>) {
    let earliest = DateTime::from_timestamp(0, 0).unwrap_or_default();
    let latest = DateTime::from_timestamp(LATEST_EPOCH_SECOND, 0).unwrap_or(earliest);
    (earliest, latest)
}

/// Default local date-time bounds, derived from [`instant_bounds`] in UTC.
pub fn date_time_bounds() -> (NaiveDateTime, NaiveDateTime) {
    let (earliest, latest) = instant_bounds();
    (earliest.naive_utc(), latest.naive_utc())
}

/// Default calendar date bounds, derived from [`instant_bounds`] in UTC.
pub fn date_bounds() -> (NaiveDate, NaiveDate) {
    let (earliest, latest) = instant_bounds();
    (earliest.date_naive(), latest.date_naive())
}

/// Default zoned bounds, derived from [`instant_bounds`] at offset zero.
pub fn zoned_bounds() -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let (earliest, latest) = instant_bounds();
    (earliest.fixed_offset(), latest.fixed_offset())
}

/// `00:00:00` to `23:59:59`.
pub fn time_bounds() -> (NaiveTime, NaiveTime) {
    let midnight = NaiveTime::default();
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(midnight);
    (midnight, last_second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_instant_bounds() {
        let (earliest, latest) = instant_bounds();
        assert_eq!(earliest.timestamp(), 0);
        assert_eq!(latest, Utc.with_ymd_and_hms(2100, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_date_bounds() {
        let (earliest, latest) = date_bounds();
        assert_eq!(earliest, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(latest, NaiveDate::from_ymd_opt(2100, 12, 31).unwrap());
    }

    #[test]
    fn test_zoned_bounds_at_utc() {
        let (earliest, latest) = zoned_bounds();
        assert_eq!(earliest.offset().local_minus_utc(), 0);
        assert_eq!(latest.year(), 2100);
    }

    #[test]
    fn test_time_bounds() {
        let (first, last) = time_bounds();
        assert_eq!(first, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(last, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(date_time_bounds().1.time(), last);
    }
}
