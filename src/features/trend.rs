//! Month-over-month growth estimation.

use crate::core::HistoricalPoint;
use crate::utils::{clamp, mean, Estimate};

/// Growth rate assumed when the history cannot support an estimate.
pub const DEFAULT_GROWTH_RATE: f64 = 0.05;
/// Lower bound on the estimated monthly growth rate.
pub const MIN_GROWTH_RATE: f64 = -0.15;
/// Upper bound on the estimated monthly growth rate.
pub const MAX_GROWTH_RATE: f64 = 0.25;
/// Number of most recent points the growth rate is computed over.
pub const GROWTH_WINDOW: usize = 6;

/// Unbounded mean of month-over-month relative changes over the last
/// [`GROWTH_WINDOW`] points.
///
/// Pairs whose earlier revenue is not positive are skipped. Returns
/// [`Estimate::NoData`] with fewer than two points or when no pair qualifies.
pub fn mean_growth(history: &[HistoricalPoint]) -> Estimate {
    if history.len() < 2 {
        return Estimate::NoData;
    }

    let recent = &history[history.len().saturating_sub(GROWTH_WINDOW)..];
    mean(recent.windows(2).filter_map(|pair| {
        let (prev, next) = (pair[0].revenue, pair[1].revenue);
        (prev > 0.0).then(|| (next - prev) / prev)
    }))
}

/// Monthly growth rate used to compound forecasts, always within
/// `[MIN_GROWTH_RATE, MAX_GROWTH_RATE]`.
pub fn growth_rate(history: &[HistoricalPoint]) -> f64 {
    clamp(
        mean_growth(history).value_or(DEFAULT_GROWTH_RATE),
        MIN_GROWTH_RATE,
        MAX_GROWTH_RATE,
    )
}
