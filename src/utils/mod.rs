//! Utility functions shared by the estimators.

pub mod stats;

pub use stats::{clamp, mean, Estimate};
