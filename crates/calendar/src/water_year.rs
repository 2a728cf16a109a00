//! Water year computation.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

/// Conventional start month of the hydrological water year (October).
pub const DEFAULT_START_MONTH: u8 = 10;

fn check_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Computes the water year for a given calendar year and month.
///
/// A water year is defined by its `start_month`. All months from `start_month`
/// onward belong to the *next* calendar year's water year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` or `start_month` is
/// outside 1..=12.
///
/// # Examples
///
/// ```
/// use snowrun_calendar::water_year;
///
/// // October-start water year (standard US hydrological convention):
/// assert_eq!(water_year(2000, 10, 10).unwrap(), 2001); // Oct 2000 -> WY 2001
/// assert_eq!(water_year(2001, 9, 10).unwrap(), 2001);  // Sep 2001 -> WY 2001
///
/// // Calendar year (start_month = 1):
/// assert_eq!(water_year(2000, 6, 1).unwrap(), 2000);
/// ```
pub fn water_year(year: i32, month: u8, start_month: u8) -> Result<i32, CalendarError> {
    check_month(month)?;
    check_month(start_month)?;
    if start_month == 1 {
        return Ok(year);
    }
    if month >= start_month {
        Ok(year + 1)
    } else {
        Ok(year)
    }
}

/// Computes the water year containing `datetime`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside 1..=12.
pub fn water_year_of(datetime: NaiveDateTime, start_month: u8) -> Result<i32, CalendarError> {
    // chrono months are always 1..=12
    water_year(datetime.year(), datetime.month() as u8, start_month)
}

/// Returns midnight on the first day of `water_year`.
///
/// With an October start, water year 1986 begins at 1985-10-01 00:00.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a bad `start_month` and
/// [`CalendarError::WaterYearOutOfRange`] when the start date cannot be
/// represented.
pub fn water_year_start(water_year: i32, start_month: u8) -> Result<NaiveDateTime, CalendarError> {
    check_month(start_month)?;
    let out_of_range = CalendarError::WaterYearOutOfRange { water_year };
    let year = if start_month == 1 {
        water_year
    } else {
        water_year.checked_sub(1).ok_or_else(|| out_of_range.clone())?
    };
    NaiveDate::from_ymd_opt(year, u32::from(start_month), 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(out_of_range)
}
