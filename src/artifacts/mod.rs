//! Loading of the optional model artifacts.
//!
//! Two files feed the engine, both optional:
//! - a precomputed forecast table (CSV with `ds` and `yhat` columns)
//! - model components (JSON with monthly seasonal indices)
//!
//! A missing file is an expected state and yields `Ok(None)`.

mod components;
mod config;
mod forecast_table;

pub use components::ModelComponents;
pub use config::ArtifactConfig;
pub use forecast_table::{PrecomputedForecast, PrecomputedForecastRow};

use crate::error::{ForecastError, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Open `path` for reading, mapping "not found" to `Ok(None)`.
pub(crate) fn open_optional(path: &Path) -> Result<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ForecastError::ArtifactIo {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}
