//! Hour and day offsets within a water year.

use chrono::NaiveDateTime;

use crate::error::CalendarError;
use crate::water_year::{water_year_of, water_year_start};

const SECONDS_PER_HOUR: i64 = 3600;

/// Whole hours elapsed between the start of `water_year` and `datetime`.
///
/// Partial hours are floored, so 00:59 on the first day is hour 0. The
/// result is negative for instants before the water year and may exceed the
/// length of the year for instants after it.
///
/// # Errors
///
/// Propagates errors from [`water_year_start`].
pub fn water_year_hour_in(
    datetime: NaiveDateTime,
    water_year: i32,
    start_month: u8,
) -> Result<i64, CalendarError> {
    let start = water_year_start(water_year, start_month)?;
    let elapsed = datetime.signed_duration_since(start);
    Ok(elapsed.num_seconds().div_euclid(SECONDS_PER_HOUR))
}

/// Whole hours elapsed since the start of the water year containing `datetime`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use snowrun_calendar::water_year_hour;
///
/// let t = NaiveDate::from_ymd_opt(1986, 2, 17)
///     .unwrap()
///     .and_hms_opt(1, 0, 0)
///     .unwrap();
/// assert_eq!(water_year_hour(t, 10).unwrap(), 3337);
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside 1..=12.
pub fn water_year_hour(datetime: NaiveDateTime, start_month: u8) -> Result<i64, CalendarError> {
    let wy = water_year_of(datetime, start_month)?;
    water_year_hour_in(datetime, wy, start_month)
}

/// 1-based day of the water year containing `datetime`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside 1..=12.
pub fn water_day(datetime: NaiveDateTime, start_month: u8) -> Result<u32, CalendarError> {
    let wy = water_year_of(datetime, start_month)?;
    let start = water_year_start(wy, start_month)?;
    let days = datetime.date().signed_duration_since(start.date()).num_days();
    // Same water year, so 0..=365.
    Ok(days as u32 + 1)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn first_hour_is_zero() {
        assert_eq!(water_year_hour(at(1985, 10, 1, 0, 0), 10).unwrap(), 0);
    }

    #[test]
    fn partial_hours_are_floored() {
        assert_eq!(water_year_hour(at(1985, 10, 1, 0, 59), 10).unwrap(), 0);
        assert_eq!(water_year_hour(at(1985, 10, 1, 1, 30), 10).unwrap(), 1);
    }

    #[test]
    fn rme_run_window() {
        // Oct(31) + Nov(30) + Dec(31) + Jan(31) + 16 days = 139 days before Feb 17.
        assert_eq!(water_year_hour(at(1986, 2, 17, 1, 0), 10).unwrap(), 3337);
        assert_eq!(water_year_hour(at(1986, 2, 17, 8, 0), 10).unwrap(), 3344);
    }

    #[test]
    fn last_hour_of_leap_water_year() {
        // WY 2000 contains Feb 29 2000, so it has 366 * 24 hours.
        assert_eq!(
            water_year_hour(at(2000, 9, 30, 23, 0), 10).unwrap(),
            366 * 24 - 1
        );
    }

    #[test]
    fn hour_in_earlier_water_year_exceeds_year_length() {
        let t = at(1986, 10, 1, 2, 0);
        assert_eq!(water_year_hour(t, 10).unwrap(), 2);
        assert_eq!(water_year_hour_in(t, 1986, 10).unwrap(), 365 * 24 + 2);
    }

    #[test]
    fn hour_before_water_year_is_negative() {
        let t = at(1985, 9, 30, 23, 30);
        assert_eq!(water_year_hour_in(t, 1986, 10).unwrap(), -1);
    }

    #[test]
    fn water_day_bounds() {
        assert_eq!(water_day(at(1985, 10, 1, 12, 0), 10).unwrap(), 1);
        assert_eq!(water_day(at(1986, 2, 17, 1, 0), 10).unwrap(), 140);
        assert_eq!(water_day(at(1986, 9, 30, 23, 0), 10).unwrap(), 365);
        assert_eq!(water_day(at(2000, 9, 30, 0, 0), 10).unwrap(), 366);
    }

    #[test]
    fn bad_start_month_propagates() {
        assert_eq!(
            water_year_hour(at(1986, 2, 17, 1, 0), 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }
}
