//! Precomputed forecast table.

use super::open_optional;
use crate::error::{ForecastError, Result};
use crate::utils::{mean, Estimate};
use chrono::{Datelike, NaiveDate};
use std::io::Read;
use std::path::Path;

const DATE_COLUMN: &str = "ds";
const VALUE_COLUMN: &str = "yhat";

/// One row of the precomputed forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecomputedForecastRow {
    pub date: NaiveDate,
    pub predicted_value: f64,
}

/// Externally generated forecast, read-only once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrecomputedForecast {
    rows: Vec<PrecomputedForecastRow>,
}

impl PrecomputedForecast {
    pub fn new(rows: Vec<PrecomputedForecastRow>) -> Self {
        Self { rows }
    }

    /// Load the table at `path`; `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match open_optional(path)? {
            Some(reader) => Self::from_reader(reader, &path.display().to_string()).map(Some),
            None => Ok(None),
        }
    }

    /// Parse CSV content. `source` names the input in diagnostics.
    ///
    /// The header must contain `ds` and `yhat`; other columns are ignored.
    /// Rows with the wrong number of fields, an unparseable date or a
    /// non-finite value are skipped individually.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let parse_error = |message: String| ForecastError::ArtifactParse {
            path: source.to_string(),
            message,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| parse_error(e.to_string()))?
            .clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| parse_error(format!("missing column {}", name)))
        };
        let date_idx = column(DATE_COLUMN)?;
        let value_idx = column(VALUE_COLUMN)?;

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for (i, record) in reader.records().enumerate() {
            // Header is line 1.
            let line = i + 2;
            let parsed = record
                .map_err(|e| e.to_string())
                .and_then(|record| {
                    if record.len() != headers.len() {
                        return Err(format!(
                            "expected {} fields, found {}",
                            headers.len(),
                            record.len()
                        ));
                    }
                    let date = parse_date(&record[date_idx])?;
                    let predicted_value = parse_value(&record[value_idx])?;
                    Ok(PrecomputedForecastRow {
                        date,
                        predicted_value,
                    })
                });

            match parsed {
                Ok(row) => rows.push(row),
                Err(reason) => {
                    skipped += 1;
                    log::warn!("{}: skipping line {}: {}", source, line, reason);
                }
            }
        }

        log::debug!("{}: parsed {} rows, skipped {}", source, rows.len(), skipped);
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[PrecomputedForecastRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean predicted value over the rows dated in the given 0-based month
    /// of `year`.
    pub fn mean_for_month(&self, month_index: u32, year: i32) -> Estimate {
        mean(
            self.rows
                .iter()
                .filter(|r| r.date.month0() == month_index && r.date.year() == year)
                .map(|r| r.predicted_value),
        )
    }
}

/// Parse `YYYY-MM-DD`, ignoring any trailing time part.
fn parse_date(field: &str) -> std::result::Result<NaiveDate, String> {
    let day = field.split(['T', ' ']).next().unwrap_or(field);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| format!("bad date {:?}: {}", field, e))
}

fn parse_value(field: &str) -> std::result::Result<f64, String> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("bad value {:?}", field)),
    }
}
