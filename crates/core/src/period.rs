//! Calendar month period: the base granularity for ratio results.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A calendar month (`year`, `month`). Ratio results are keyed by month;
/// coarser roll-ups (quarter, year) are derived downstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> DomainResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!(
                "month must be 1..=12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Period containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar quarter (1..=4) this month falls in.
    pub fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }

    /// Same month one year later.
    pub fn next_year(&self) -> Self {
        Self {
            year: self.year + 1,
            month: self.month,
        }
    }
}

impl ValueObject for Period {}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_date_takes_year_and_month() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert_eq!(Period::from_date(d), Period::new(2025, 3).unwrap());
    }

    #[test]
    fn month_zero_is_rejected() {
        assert!(Period::new(2025, 0).is_err());
        assert!(Period::new(2025, 13).is_err());
    }

    #[test]
    fn periods_order_chronologically() {
        let jan = Period::new(2025, 1).unwrap();
        let mar = Period::new(2025, 3).unwrap();
        let dec_prev = Period::new(2024, 12).unwrap();
        assert!(dec_prev < jan);
        assert!(jan < mar);
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(Period::new(2025, 1).unwrap().quarter(), 1);
        assert_eq!(Period::new(2025, 3).unwrap().quarter(), 1);
        assert_eq!(Period::new(2025, 4).unwrap().quarter(), 2);
        assert_eq!(Period::new(2025, 12).unwrap().quarter(), 4);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(Period::new(2025, 3).unwrap().to_string(), "2025-03");
    }

    #[test]
    fn period_round_trips_through_json() {
        let period = Period::new(2025, 3).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, back);
    }
}
