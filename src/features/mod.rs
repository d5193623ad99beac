//! Summary statistics over the monthly revenue history.
//!
//! - [`trend`]: bounded month-over-month growth rate
//! - [`revenue`]: overall and same-month revenue levels

pub mod revenue;
pub mod trend;

pub use revenue::{
    average_revenue, mean_revenue, month_revenue, revenue_for_month, DEFAULT_AVERAGE_REVENUE,
};
pub use trend::{
    growth_rate, mean_growth, DEFAULT_GROWTH_RATE, GROWTH_WINDOW, MAX_GROWTH_RATE,
    MIN_GROWTH_RATE,
};
