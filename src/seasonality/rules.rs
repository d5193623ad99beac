//! Holiday and vacation rules.

use crate::error::{ForecastError, Result};
use std::borrow::Cow;

/// A day of the year, 1-based month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) || !(1..=31).contains(&self.day) {
            return Err(ForecastError::InvalidParameter(format!(
                "invalid calendar day {:02}-{:02}",
                self.month, self.day
            )));
        }
        Ok(())
    }
}

/// A single public holiday and its demand impact.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayRule {
    pub name: Cow<'static, str>,
    pub date: MonthDay,
    pub impact_factor: f64,
    /// Restricts the rule to one year; `None` repeats every year.
    pub year: Option<i32>,
}

impl HolidayRule {
    /// A holiday falling on the same date every year.
    pub const fn fixed(name: &'static str, month: u32, day: u32, impact_factor: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            date: MonthDay::new(month, day),
            impact_factor,
            year: None,
        }
    }

    /// A holiday whose date is only valid for `year` (moving holidays).
    pub const fn in_year(
        name: &'static str,
        year: i32,
        month: u32,
        day: u32,
        impact_factor: f64,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            date: MonthDay::new(month, day),
            impact_factor,
            year: Some(year),
        }
    }

    /// Rename the rule, e.g. with a name read from configuration.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    fn applies_to(&self, month: u32, year: i32) -> bool {
        self.date.month == month && self.year.map_or(true, |y| y == year)
    }
}

/// A school vacation window. Windows may wrap around the new year.
#[derive(Debug, Clone, PartialEq)]
pub struct VacationRule {
    pub name: Cow<'static, str>,
    pub start: MonthDay,
    pub end: MonthDay,
    pub impact_factor: f64,
}

impl VacationRule {
    pub const fn new(name: &'static str, start: MonthDay, end: MonthDay, impact_factor: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            start,
            end,
            impact_factor,
        }
    }

    /// Rename the rule, e.g. with a name read from configuration.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether any part of the 1-based `month` falls inside the window.
    pub fn covers_month(&self, month: u32) -> bool {
        let (start, end) = (self.start.month, self.end.month);
        if start <= end {
            (start..=end).contains(&month)
        } else {
            month >= start || month <= end
        }
    }
}

/// A calendar rule contributing a multiplicative demand factor.
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonalRule {
    Holiday(HolidayRule),
    Vacation(VacationRule),
}

impl SeasonalRule {
    pub fn name(&self) -> &str {
        match self {
            SeasonalRule::Holiday(h) => &h.name,
            SeasonalRule::Vacation(v) => &v.name,
        }
    }

    pub fn impact_factor(&self) -> f64 {
        match self {
            SeasonalRule::Holiday(h) => h.impact_factor,
            SeasonalRule::Vacation(v) => v.impact_factor,
        }
    }

    /// Whether the rule affects the 1-based `month` of `year`.
    pub fn applies_to(&self, month: u32, year: i32) -> bool {
        match self {
            SeasonalRule::Holiday(h) => h.applies_to(month, year),
            SeasonalRule::Vacation(v) => v.covers_month(month),
        }
    }

    /// Check dates are real calendar days and the impact is a positive multiplier.
    pub fn validate(&self) -> Result<()> {
        match self {
            SeasonalRule::Holiday(h) => h.date.validate()?,
            SeasonalRule::Vacation(v) => {
                v.start.validate()?;
                v.end.validate()?;
            }
        }
        let impact = self.impact_factor();
        if !impact.is_finite() || impact <= 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "impact factor of {} must be positive, got {}",
                self.name(),
                impact
            )));
        }
        Ok(())
    }
}

impl From<HolidayRule> for SeasonalRule {
    fn from(rule: HolidayRule) -> Self {
        SeasonalRule::Holiday(rule)
    }
}

impl From<VacationRule> for SeasonalRule {
    fn from(rule: VacationRule) -> Self {
        SeasonalRule::Vacation(rule)
    }
}
