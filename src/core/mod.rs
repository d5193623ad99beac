//! Core data structures for revenue forecasting.

mod aggregate;
mod forecast;
mod history;

pub use aggregate::{monthly_history, OrderRecord, DEFAULT_HISTORY_MONTHS, MAX_HISTORY_MONTHS};
pub use forecast::{month_name, Prediction, RevenueForecast};
pub use history::{HistoricalPoint, PeriodKey};
