//! Calendar-driven seasonal adjustment.
//!
//! This module maps a target month to a multiplicative demand factor:
//! - [`SeasonalIndices`]: per-month base index, usually loaded from a model artifact
//! - [`SeasonalCalendar`]: public holiday and school vacation rules
//! - [`seasonal_factor`]: combines both with the fixed regional peak boosts

mod calendar;
mod factor;
mod rules;

pub use calendar::SeasonalCalendar;
pub use factor::{seasonal_factor, SeasonalIndices, APRIL_PEAK_BOOST, DECEMBER_PEAK_BOOST};
pub use rules::{HolidayRule, MonthDay, SeasonalRule, VacationRule};
