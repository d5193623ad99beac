//! Model components document (seasonal indices).

use super::open_optional;
use crate::error::{ForecastError, Result};
use crate::seasonality::SeasonalIndices;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ComponentsFile {
    #[serde(default)]
    seasonal_indices: Option<SeasonalIndicesSection>,
}

#[derive(Debug, Deserialize)]
struct SeasonalIndicesSection {
    #[serde(default)]
    monthly: HashMap<String, f64>,
}

/// Components of the offline-fitted model the engine makes use of.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelComponents {
    pub seasonal_indices: SeasonalIndices,
}

impl ModelComponents {
    /// Load the document at `path`; `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match open_optional(path)? {
            Some(reader) => Self::from_reader(reader, &path.display().to_string()).map(Some),
            None => Ok(None),
        }
    }

    /// Parse a JSON document of the form
    /// `{"seasonal_indices": {"monthly": {"0": 0.9, ..., "11": 1.3}}}`.
    ///
    /// Months not listed default to 1.0.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let parse_error = |message: String| ForecastError::ArtifactParse {
            path: source.to_string(),
            message,
        };

        let file: ComponentsFile =
            serde_json::from_reader(reader).map_err(|e| parse_error(e.to_string()))?;

        let mut indices = [1.0; 12];
        let mut seen = [false; 12];
        if let Some(section) = file.seasonal_indices {
            for (key, value) in section.monthly {
                let month = key
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|m| *m < 12)
                    .ok_or_else(|| parse_error(format!("invalid month key {:?}", key)))?;
                if std::mem::replace(&mut seen[month], true) {
                    return Err(parse_error(format!("duplicate month {}", month)));
                }
                indices[month] = value;
            }
        }

        let seasonal_indices =
            SeasonalIndices::new(indices).map_err(|e| parse_error(e.to_string()))?;
        Ok(Self { seasonal_indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_monthly_indices_with_defaults() {
        let json = r#"{"seasonal_indices": {"monthly": {"0": 0.9, "11": 1.3}}, "trend": {"slope": 2.0}}"#;
        let components = ModelComponents::from_reader(json.as_bytes(), "c.json").unwrap();
        let indices = components.seasonal_indices;
        assert_relative_eq!(indices.get(0).unwrap(), 0.9, epsilon = 1e-12);
        assert_relative_eq!(indices.get(11).unwrap(), 1.3, epsilon = 1e-12);
        assert_relative_eq!(indices.get(5).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn document_without_indices_is_neutral() {
        let components = ModelComponents::from_reader("{}".as_bytes(), "c.json").unwrap();
        assert_eq!(components, ModelComponents::default());
    }

    #[test]
    fn month_spelled_twice_is_rejected() {
        let json = r#"{"seasonal_indices": {"monthly": {"1": 0.5, " 1": 2.0}}}"#;
        for _ in 0..20 {
            let err = ModelComponents::from_reader(json.as_bytes(), "c.json").unwrap_err();
            assert_eq!(
                err,
                ForecastError::ArtifactParse {
                    path: "c.json".to_string(),
                    message: "duplicate month 1".to_string(),
                }
            );
        }
    }

    #[test]
    fn malformed_documents_are_rejected() {
        for json in [
            "not json",
            r#"{"seasonal_indices": {"monthly": {"12": 1.0}}}"#,
            r#"{"seasonal_indices": {"monthly": {"jan": 1.0}}}"#,
            r#"{"seasonal_indices": {"monthly": {"3": -0.5}}}"#,
            r#"{"seasonal_indices": {"monthly": {"3": "high"}}}"#,
            r#"{"seasonal_indices": {"monthly": {"0": 0.5, "00": 2.0}}}"#,
        ] {
            assert!(
                matches!(
                    ModelComponents::from_reader(json.as_bytes(), "c.json"),
                    Err(ForecastError::ArtifactParse { .. })
                ),
                "{json} should be rejected"
            );
        }
    }
}
