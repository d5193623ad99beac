//! Revenue level estimates used as forecast bases.

use crate::core::HistoricalPoint;
use crate::error::Result;
use crate::utils::{mean, Estimate};

/// Average monthly revenue assumed for an empty history.
pub const DEFAULT_AVERAGE_REVENUE: f64 = 1000.0;

/// Mean revenue across all points.
pub fn mean_revenue(history: &[HistoricalPoint]) -> Estimate {
    mean(history.iter().map(|p| p.revenue))
}

/// Mean revenue across all points, [`DEFAULT_AVERAGE_REVENUE`] when empty.
pub fn average_revenue(history: &[HistoricalPoint]) -> f64 {
    mean_revenue(history).value_or(DEFAULT_AVERAGE_REVENUE)
}

/// Mean revenue of the points falling in the given 0-based calendar month,
/// across all years.
///
/// Fails if any period key is malformed.
pub fn month_revenue(history: &[HistoricalPoint], month_index: u32) -> Result<Estimate> {
    let mut matching = Vec::new();
    for point in history {
        if point.period()?.month_index() == month_index {
            matching.push(point.revenue);
        }
    }
    Ok(mean(matching))
}

/// Same-month mean revenue, falling back to the overall average.
pub fn revenue_for_month(history: &[HistoricalPoint], month_index: u32) -> Result<f64> {
    Ok(month_revenue(history, month_index)?.value_or(average_revenue(history)))
}
