//! # revenue-forecast
//!
//! Short-horizon revenue forecasting for a storefront backend.
//!
//! Combines monthly revenue history, an optional precomputed forecast table
//! and a calendar model (public holidays, school vacations, retail peaks)
//! into a three-month forecast with decaying confidence. Prediction never
//! fails outward: degraded inputs yield degraded forecasts.

pub mod artifacts;
pub mod core;
pub mod error;
pub mod features;
pub mod models;
pub mod seasonality;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::artifacts::ArtifactConfig;
    pub use crate::core::{HistoricalPoint, PeriodKey, Prediction, RevenueForecast};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::ForecastEngine;
    pub use crate::seasonality::SeasonalCalendar;
}
