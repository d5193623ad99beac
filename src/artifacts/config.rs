//! Artifact location settings.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the engine looks for its artifacts.
///
/// Deserializable so it can be embedded in the host application's config;
/// omitted fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Directory holding both artifacts.
    pub directory: PathBuf,
    /// File name of the precomputed forecast table.
    pub forecast_file: String,
    /// File name of the model components document.
    pub components_file: String,
}

impl ArtifactConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn with_forecast_file(mut self, name: impl Into<String>) -> Self {
        self.forecast_file = name.into();
        self
    }

    pub fn with_components_file(mut self, name: impl Into<String>) -> Self {
        self.components_file = name.into();
        self
    }

    pub fn forecast_path(&self) -> PathBuf {
        self.directory.join(&self.forecast_file)
    }

    pub fn components_path(&self) -> PathBuf {
        self.directory.join(&self.components_file)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("models"),
            forecast_file: "revenue_forecast.csv".to_string(),
            components_file: "model_components.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = ArtifactConfig::default();
        assert_eq!(config.forecast_path(), Path::new("models/revenue_forecast.csv"));
        assert_eq!(config.components_path(), Path::new("models/model_components.json"));
    }

    #[test]
    fn builder_overrides_file_names() {
        let config = ArtifactConfig::new("/srv/ml")
            .with_forecast_file("prophet.csv")
            .with_components_file("components.json");
        assert_eq!(config.directory(), Path::new("/srv/ml"));
        assert_eq!(config.forecast_path(), Path::new("/srv/ml/prophet.csv"));
        assert_eq!(config.components_path(), Path::new("/srv/ml/components.json"));
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: ArtifactConfig = serde_json::from_str(r#"{"directory": "artifacts"}"#).unwrap();
        assert_eq!(config.directory, PathBuf::from("artifacts"));
        assert_eq!(config.forecast_file, "revenue_forecast.csv");
        assert_eq!(config.components_file, "model_components.json");
    }
}
