//! Folding individual orders into the monthly history the engine consumes.

use super::history::{HistoricalPoint, PeriodKey};
use crate::error::{ensure_finite, ForecastError, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Number of months of history usually fed to the engine.
pub const DEFAULT_HISTORY_MONTHS: u32 = 36;
/// Longest window [`monthly_history`] accepts (100 years).
pub const MAX_HISTORY_MONTHS: u32 = 1200;

/// A single order as seen by the aggregation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderRecord {
    pub placed_on: NaiveDate,
    pub total: f64,
}

impl OrderRecord {
    pub fn new(placed_on: NaiveDate, total: f64) -> Self {
        Self { placed_on, total }
    }
}

/// Aggregate orders into one point per calendar month.
///
/// The window covers `months` consecutive months ending with the month of
/// `as_of`, in ascending order. Months without orders get zero revenue and
/// zero orders; orders outside the window are ignored. `months` must be
/// within `1..=MAX_HISTORY_MONTHS`.
pub fn monthly_history(
    orders: &[OrderRecord],
    as_of: NaiveDate,
    months: u32,
) -> Result<Vec<HistoricalPoint>> {
    if !(1..=MAX_HISTORY_MONTHS).contains(&months) {
        return Err(ForecastError::InvalidParameter(format!(
            "history window must cover 1..={} months, got {}",
            MAX_HISTORY_MONTHS, months
        )));
    }

    let last = PeriodKey::from_date(as_of);
    let first = last.minus_months(months - 1);

    let mut buckets: BTreeMap<PeriodKey, (f64, u64)> = (0..months)
        .map(|offset| (first.plus_months(offset), (0.0, 0)))
        .collect();

    for order in orders {
        let total = ensure_finite("order total", order.total)?;
        if let Some((revenue, count)) = buckets.get_mut(&PeriodKey::from_date(order.placed_on)) {
            *revenue += total;
            *count += 1;
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(key, (revenue, count))| HistoricalPoint::new(key.to_string(), revenue, count))
        .collect())
}
