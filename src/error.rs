//! Error types for the revenue-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while loading artifacts or computing forecasts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// A period key is not of the form `YYYY-MM`.
    #[error("invalid period key: {0:?}")]
    InvalidPeriodKey(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A numeric input or intermediate is NaN or infinite.
    #[error("non-finite value in {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    /// An artifact file exists but could not be read.
    #[error("failed to read artifact {path}: {message}")]
    ArtifactIo { path: String, message: String },

    /// An artifact file was read but its content is malformed.
    #[error("malformed artifact {path}: {message}")]
    ArtifactParse { path: String, message: String },

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

/// Fails with [`ForecastError::NonFiniteValue`] unless `value` is finite.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ForecastError::NonFiniteValue { field, value })
    }
}
