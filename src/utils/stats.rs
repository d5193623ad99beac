//! Statistical utility functions.

/// Outcome of a statistic that may have nothing to work with.
///
/// Estimators return this instead of a sentinel so that the substitution of
/// defaults happens in one visible place (see [`Estimate::value_or`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// No input contributed to the statistic.
    NoData,
    /// The computed value.
    Value(f64),
}

impl Estimate {
    /// The computed value, or `default` when there was no data.
    pub fn value_or(self, default: f64) -> f64 {
        match self {
            Estimate::NoData => default,
            Estimate::Value(v) => v,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Estimate::NoData)
    }

    /// The computed value as an `Option`.
    pub fn value(self) -> Option<f64> {
        match self {
            Estimate::NoData => None,
            Estimate::Value(v) => Some(v),
        }
    }
}

impl From<Option<f64>> for Estimate {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Estimate::NoData, Estimate::Value)
    }
}

/// Arithmetic mean of the values yielded by `values`.
///
/// # Example
/// ```
/// use revenue_forecast::utils::{mean, Estimate};
///
/// assert_eq!(mean([1.0, 2.0, 3.0]), Estimate::Value(2.0));
/// assert_eq!(mean(std::iter::empty()), Estimate::NoData);
/// ```
pub fn mean<I>(values: I) -> Estimate
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        Estimate::NoData
    } else {
        Estimate::Value(sum / count as f64)
    }
}

/// Clamp `value` to `[lower, upper]`; NaN maps to `lower`.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        lower
    } else {
        value.max(lower).min(upper)
    }
}
