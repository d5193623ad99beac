//! Seasonal factor lookup.

use super::calendar::SeasonalCalendar;
use crate::error::{ForecastError, Result};

/// Fixed regional peak-season boost for April.
pub const APRIL_PEAK_BOOST: f64 = 1.5;
/// Fixed retail peak boost for December.
pub const DECEMBER_PEAK_BOOST: f64 = 1.8;

const APRIL: u32 = 3;
const DECEMBER: u32 = 11;

/// Base seasonal index per 0-based month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalIndices([f64; 12]);

impl SeasonalIndices {
    /// Indices from twelve positive multipliers, January first.
    pub fn new(indices: [f64; 12]) -> Result<Self> {
        if let Some((month, value)) = indices
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(ForecastError::InvalidParameter(format!(
                "seasonal index for month {} must be positive, got {}",
                month, value
            )));
        }
        Ok(Self(indices))
    }

    pub fn get(&self, month_index: u32) -> Option<f64> {
        self.0.get(month_index as usize).copied()
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }
}

impl Default for SeasonalIndices {
    fn default() -> Self {
        Self([1.0; 12])
    }
}

/// Multiplicative demand factor for a 0-based month of `year`.
///
/// Starts from the loaded seasonal index (1.0 without one), compounds every
/// calendar rule affecting the month, then applies the April and December
/// peak boosts on top. The result is always positive.
pub fn seasonal_factor(
    calendar: &SeasonalCalendar,
    indices: Option<&SeasonalIndices>,
    month_index: u32,
    year: i32,
) -> Result<f64> {
    if month_index > 11 {
        return Err(ForecastError::InvalidParameter(format!(
            "month index must be in 0..12, got {}",
            month_index
        )));
    }

    let base = indices.and_then(|i| i.get(month_index)).unwrap_or(1.0);
    let mut factor = base * calendar.multiplier(month_index + 1, year);

    // Applied in addition to the Christmas/Spring Festival calendar entries.
    match month_index {
        APRIL => factor *= APRIL_PEAK_BOOST,
        DECEMBER => factor *= DECEMBER_PEAK_BOOST,
        _ => {}
    }

    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_month_without_indices_is_one() {
        let calendar = SeasonalCalendar::default();
        assert_relative_eq!(seasonal_factor(&calendar, None, 5, 2024).unwrap(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn peak_boosts_apply_with_empty_calendar() {
        let calendar = SeasonalCalendar::empty();
        assert_relative_eq!(
            seasonal_factor(&calendar, None, 3, 2024).unwrap(),
            APRIL_PEAK_BOOST,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            seasonal_factor(&calendar, None, 11, 2024).unwrap(),
            DECEMBER_PEAK_BOOST,
            epsilon = 1e-10
        );
    }

    #[test]
    fn december_stacks_rules_and_boost() {
        let calendar = SeasonalCalendar::default();
        let expected = calendar.multiplier(12, 2024) * DECEMBER_PEAK_BOOST;
        assert_relative_eq!(seasonal_factor(&calendar, None, 11, 2024).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn loaded_index_scales_the_factor() {
        let mut raw = [1.0; 12];
        raw[5] = 0.8;
        let indices = SeasonalIndices::new(raw).unwrap();
        let calendar = SeasonalCalendar::empty();
        assert_relative_eq!(
            seasonal_factor(&calendar, Some(&indices), 5, 2024).unwrap(),
            0.8,
            epsilon = 1e-10
        );
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let calendar = SeasonalCalendar::default();
        assert!(seasonal_factor(&calendar, None, 12, 2024).is_err());

        let mut raw = [1.0; 12];
        raw[0] = 0.0;
        assert!(SeasonalIndices::new(raw).is_err());
        raw[0] = f64::NAN;
        assert!(SeasonalIndices::new(raw).is_err());
    }
}
