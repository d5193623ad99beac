//! Monthly revenue history as supplied by the order aggregation layer.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month identifier, printed and parsed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodKey {
    year: i32,
    /// 1-based month.
    month: u32,
}

impl PeriodKey {
    /// Create a key from a year and a 1-based month.
    ///
    /// The year must lie within the range of [`NaiveDate`].
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
        if !years.contains(&year) {
            return Err(ForecastError::InvalidParameter(format!(
                "year must be in {}..={}, got {}",
                years.start(),
                years.end(),
                year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidParameter(format!(
                "month must be in 1..=12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// 0-based month index (January = 0).
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    /// The key `months` months after this one.
    pub fn plus_months(&self, months: u32) -> Self {
        let total = self.year as i64 * 12 + self.month_index() as i64 + months as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// The key `months` months before this one.
    pub fn minus_months(&self, months: u32) -> Self {
        let total = self.year as i64 * 12 + self.month_index() as i64 - months as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ForecastError::InvalidPeriodKey(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Revenue and order count for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    /// Month identifier, e.g. `"2024-03"`.
    pub period_key: String,
    pub revenue: f64,
    pub order_count: u64,
}

impl HistoricalPoint {
    pub fn new(period_key: impl Into<String>, revenue: f64, order_count: u64) -> Self {
        Self {
            period_key: period_key.into(),
            revenue,
            order_count,
        }
    }

    /// Parse the period key.
    pub fn period(&self) -> Result<PeriodKey> {
        self.period_key.parse()
    }
}
