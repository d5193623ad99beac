//! Revenue forecasting engine.

mod engine;

pub use engine::{
    ForecastEngine, FORECAST_HORIZON, MAX_CONFIDENCE, MIN_CONFIDENCE, MIN_PREDICTED_REVENUE,
};
