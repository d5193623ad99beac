//! Forecast result structures handed back to the caller.

use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a 0-based month index; `None` outside 0..12.
pub fn month_name(month_index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month_index as usize).copied()
}

/// Forecast for a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Month name, e.g. `"July"`.
    pub month: String,
    pub year: i32,
    /// Predicted revenue, never below the revenue floor.
    pub revenue: f64,
    /// Confidence in percent, within `[40, 100]`.
    pub confidence: f64,
}

/// Result of a prediction call: one entry per forecast horizon plus the
/// growth rate shared by all of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueForecast {
    pub predictions: Vec<Prediction>,
    pub growth_rate: f64,
}

impl RevenueForecast {
    /// The terminal fallback: no predictions and zero growth.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Number of forecast months.
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
    }

    #[test]
    fn empty_forecast_has_zero_growth() {
        let forecast = RevenueForecast::empty();
        assert!(forecast.is_empty());
        assert_eq!(forecast.horizon(), 0);
        assert_eq!(forecast.growth_rate, 0.0);
    }

    #[test]
    fn forecast_serializes_with_api_field_names() {
        let forecast = RevenueForecast {
            predictions: vec![Prediction {
                month: "July".to_string(),
                year: 2024,
                revenue: 1500.0,
                confidence: 60.0,
            }],
            growth_rate: 0.05,
        };
        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "predictions": [
                    {"month": "July", "year": 2024, "revenue": 1500.0, "confidence": 60.0}
                ],
                "growthRate": 0.05
            })
        );
    }
}
