//! Reporting periods
//!
//! Every report aggregates over a closed date range: both `start` and `end`
//! are included. Quarter and year windows end on the true last day of their
//! final month.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for stored dates and for input on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lower bound used to approximate "all time" in the balance sheet
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// An inclusive date range
///
/// An inverted range (start after end) is allowed and matches no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Everything from `1900-01-01` through `as_of`
    pub fn through(as_of: NaiveDate) -> Self {
        Self::new(earliest_date(), as_of)
    }

    /// The month leading up to and including `today`
    pub fn trailing_month(today: NaiveDate) -> Self {
        let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        Self::new(start, today)
    }

    /// Calendar quarter `quarter` (1-4) of `year`
    pub fn quarter(year: i32, quarter: u32) -> Result<Self, PeriodError> {
        if !(1..=4).contains(&quarter) {
            return Err(PeriodError::InvalidQuarter(quarter));
        }

        let first_month = 3 * quarter - 2;
        let last_month = 3 * quarter;

        let start = NaiveDate::from_ymd_opt(year, first_month, 1)
            .ok_or(PeriodError::InvalidYear(year))?;
        let end = last_day_of_month(year, last_month).ok_or(PeriodError::InvalidYear(year))?;

        Ok(Self::new(start, end))
    }

    /// January 1 through December 31 of `year`
    pub fn year(year: i32) -> Result<Self, PeriodError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PeriodError::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PeriodError::InvalidYear(year))?;
        Ok(Self::new(start, end))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Last calendar day of `month` in `year`
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    next_month.pred_opt()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, PeriodError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| PeriodError::InvalidDate(s.to_string()))
}

/// Error type for period construction and date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    InvalidDate(String),
    InvalidQuarter(u32),
    InvalidYear(i32),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodError::InvalidDate(s) => {
                write!(f, "Invalid date '{}', expected YYYY-MM-DD", s)
            }
            PeriodError::InvalidQuarter(q) => write!(f, "Quarter must be 1-4, got {}", q),
            PeriodError::InvalidYear(y) => write!(f, "Year out of range: {}", y),
        }
    }
}

impl std::error::Error for PeriodError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quarters_2024() {
        let q1 = DateRange::quarter(2024, 1).unwrap();
        assert_eq!(q1.start, date(2024, 1, 1));
        assert_eq!(q1.end, date(2024, 3, 31));

        let q2 = DateRange::quarter(2024, 2).unwrap();
        assert_eq!(q2.start, date(2024, 4, 1));
        assert_eq!(q2.end, date(2024, 6, 30));

        let q3 = DateRange::quarter(2024, 3).unwrap();
        assert_eq!(q3.end, date(2024, 9, 30));

        let q4 = DateRange::quarter(2024, 4).unwrap();
        assert_eq!(q4.start, date(2024, 10, 1));
        assert_eq!(q4.end, date(2024, 12, 31));
    }

    #[test]
    fn test_invalid_quarter() {
        assert_eq!(
            DateRange::quarter(2024, 5),
            Err(PeriodError::InvalidQuarter(5))
        );
        assert!(DateRange::quarter(2024, 0).is_err());
    }

    #[test]
    fn test_last_day_of_month_leap_years() {
        assert_eq!(last_day_of_month(2024, 2), Some(date(2024, 2, 29)));
        assert_eq!(last_day_of_month(2023, 2), Some(date(2023, 2, 28)));
        assert_eq!(last_day_of_month(1900, 2), Some(date(1900, 2, 28)));
        assert_eq!(last_day_of_month(2024, 12), Some(date(2024, 12, 31)));
        assert_eq!(last_day_of_month(2024, 13), None);
    }

    #[test]
    fn test_year_range() {
        let range = DateRange::year(2023).unwrap();
        assert_eq!(range, DateRange::new(date(2023, 1, 1), date(2023, 12, 31)));
    }

    #[test]
    fn test_through_starts_in_1900() {
        let range = DateRange::through(date(2024, 6, 15));
        assert_eq!(range.start, date(1900, 1, 1));
        assert_eq!(range.end, date(2024, 6, 15));
    }

    #[test]
    fn test_trailing_month_clamps_day() {
        let range = DateRange::trailing_month(date(2024, 3, 31));
        assert_eq!(range.start, date(2024, 2, 29));
    }

    #[test]
    fn test_contains_is_closed() {
        let range = DateRange::single_day(date(2024, 3, 1));
        assert!(range.contains(date(2024, 3, 1)));
        assert!(!range.contains(date(2024, 3, 2)));

        let inverted = DateRange::new(date(2024, 3, 2), date(2024, 3, 1));
        assert!(!inverted.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-01").unwrap(), date(2024, 3, 1));
        assert!(parse_date("03/01/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_display() {
        let range = DateRange::quarter(2024, 1).unwrap();
        assert_eq!(range.to_string(), "2024-01-01 to 2024-03-31");
    }
}
