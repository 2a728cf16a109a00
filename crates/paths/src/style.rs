//! Folder date styles: how a run's date range is encoded in directory names.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use snowrun_calendar::water_year_hour;

use crate::error::PathError;

const DAY_FORMAT: &str = "%Y%m%d";

/// Encoding of the run's date range in the data and run directory names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FolderDateStyle {
    /// `<start_wyhr>_<end_wyhr>`: water-year hours of the start and end.
    #[default]
    WaterYearHour,
    /// `<YYYYMMDD>_<YYYYMMDD>`: calendar days of the start and end.
    StartEnd,
    /// `<YYYYMMDD>`: calendar day of the start only.
    Day,
}

impl FolderDateStyle {
    /// All styles, in configuration order.
    pub const ALL: [FolderDateStyle; 3] = [Self::WaterYearHour, Self::StartEnd, Self::Day];

    /// Returns the configuration string for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WaterYearHour => "wyhr",
            Self::StartEnd => "start_end",
            Self::Day => "day",
        }
    }

    /// Builds the directory-name suffix for a run from `start` to `end`.
    ///
    /// Each water-year hour is measured from the start of the water year
    /// containing that end of the range, so a run crossing into a new water
    /// year ends on a small hour value.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Calendar`] if the water-year arithmetic fails.
    pub fn suffix(
        self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        start_month: u8,
    ) -> Result<String, PathError> {
        let suffix = match self {
            Self::WaterYearHour => {
                let from = water_year_hour(start, start_month)?;
                let to = water_year_hour(end, start_month)?;
                format!("{from}_{to}")
            }
            Self::StartEnd => format!(
                "{}_{}",
                start.format(DAY_FORMAT),
                end.format(DAY_FORMAT)
            ),
            Self::Day => start.format(DAY_FORMAT).to_string(),
        };
        Ok(suffix)
    }
}

impl fmt::Display for FolderDateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderDateStyle {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wyhr" => Ok(Self::WaterYearHour),
            "start_end" => Ok(Self::StartEnd),
            "day" => Ok(Self::Day),
            other => Err(PathError::UnknownDateStyle {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_known_styles() {
        for style in FolderDateStyle::ALL {
            assert_eq!(style.as_str().parse::<FolderDateStyle>().unwrap(), style);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "WYHR".parse::<FolderDateStyle>().unwrap_err(),
            PathError::UnknownDateStyle {
                value: "WYHR".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(
            "".parse::<FolderDateStyle>(),
            Err(PathError::UnknownDateStyle { .. })
        ));
    }

    #[test]
    fn default_is_wyhr() {
        assert_eq!(FolderDateStyle::default(), FolderDateStyle::WaterYearHour);
    }

    #[test]
    fn display_matches_config_string() {
        assert_eq!(FolderDateStyle::StartEnd.to_string(), "start_end");
    }

    #[test]
    fn wyhr_suffix() {
        let s = FolderDateStyle::WaterYearHour
            .suffix(at(1986, 2, 17, 1), at(1986, 2, 17, 8), 10)
            .unwrap();
        assert_eq!(s, "3337_3344");
    }

    #[test]
    fn wyhr_suffix_spanning_water_years_restarts_at_end() {
        // The end falls in WY 1987, one hour after it begins.
        let s = FolderDateStyle::WaterYearHour
            .suffix(at(1986, 9, 30, 0), at(1986, 10, 1, 1), 10)
            .unwrap();
        assert_eq!(s, format!("{}_1", 364 * 24));
    }

    #[test]
    fn start_end_suffix() {
        let s = FolderDateStyle::StartEnd
            .suffix(at(1986, 2, 17, 1), at(1986, 3, 2, 8), 10)
            .unwrap();
        assert_eq!(s, "19860217_19860302");
    }

    #[test]
    fn day_suffix_ignores_end() {
        let s = FolderDateStyle::Day
            .suffix(at(1986, 2, 17, 1), at(1986, 3, 2, 8), 10)
            .unwrap();
        assert_eq!(s, "19860217");
    }
}
