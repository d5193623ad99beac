//! Holiday and school vacation tables.

use super::rules::{HolidayRule, MonthDay, SeasonalRule, VacationRule};
use crate::error::Result;

const HOLIDAYS: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1, 1.10),
    HolidayRule::fixed("Valentine's Day", 2, 14, 1.15),
    HolidayRule::fixed("Spring Festival", 4, 10, 1.30),
    HolidayRule::fixed("Labour Day", 5, 1, 1.05),
    HolidayRule::fixed("Mother's Day", 5, 26, 1.20),
    HolidayRule::fixed("Back to School", 9, 1, 1.25),
    HolidayRule::fixed("Black Friday", 11, 29, 1.40),
    HolidayRule::fixed("Christmas", 12, 25, 1.50),
    HolidayRule::fixed("New Year's Eve", 12, 31, 1.20),
];

const VACATIONS: &[VacationRule] = &[
    VacationRule::new("Winter break", MonthDay::new(12, 20), MonthDay::new(1, 3), 1.20),
    VacationRule::new("Spring break", MonthDay::new(3, 22), MonthDay::new(4, 7), 1.10),
    VacationRule::new("Summer vacation", MonthDay::new(7, 1), MonthDay::new(8, 31), 0.90),
];

/// The set of calendar rules used for seasonal adjustment.
///
/// [`SeasonalCalendar::default`] carries the built-in retail calendar;
/// [`SeasonalCalendar::empty`] has no rules at all.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalCalendar {
    rules: Vec<SeasonalRule>,
}

impl SeasonalCalendar {
    /// Build a calendar from custom rules, validating each one.
    pub fn new(rules: Vec<SeasonalRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    /// A calendar without holidays or vacations.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[SeasonalRule] {
        &self.rules
    }

    /// Rules affecting the 1-based `month` of `year`.
    pub fn rules_for(&self, month: u32, year: i32) -> impl Iterator<Item = &SeasonalRule> {
        self.rules.iter().filter(move |r| r.applies_to(month, year))
    }

    /// Product of the impact factors of every rule affecting the month.
    /// Several rules in the same month compound.
    pub fn multiplier(&self, month: u32, year: i32) -> f64 {
        self.rules_for(month, year).map(|r| r.impact_factor()).product()
    }
}

impl Default for SeasonalCalendar {
    fn default() -> Self {
        let rules = HOLIDAYS
            .iter()
            .cloned()
            .map(SeasonalRule::Holiday)
            .chain(VACATIONS.iter().cloned().map(SeasonalRule::Vacation))
            .collect();
        Self { rules }
    }
}
