//! Integration tests for artifact loading and end-to-end forecasting.
//!
//! Artifacts are written to temporary directories so every test gets a
//! fresh engine and a fresh filesystem state.

use chrono::NaiveDate;
use revenue_forecast::artifacts::ArtifactConfig;
use revenue_forecast::core::{monthly_history, HistoricalPoint, OrderRecord};
use revenue_forecast::models::ForecastEngine;
use revenue_forecast::seasonality::SeasonalCalendar;
use std::fs;
use std::path::Path;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2024-01 .. 2024-06, revenue 1000 rising by 100 per month.
fn linear_history() -> Vec<HistoricalPoint> {
    (1..=6u64)
        .map(|m| HistoricalPoint::new(format!("2024-{:02}", m), 900.0 + 100.0 * m as f64, 9 + m))
        .collect()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn linear_history_without_artifacts() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let mut engine = ForecastEngine::new(ArtifactConfig::new(dir.path()));
    assert!(engine.initialize());

    let forecast = engine.revenue_predictions_at(&linear_history(), date(2024, 6, 15));

    assert!(
        (0.08..=0.10).contains(&forecast.growth_rate),
        "growth rate {} outside expected range",
        forecast.growth_rate
    );

    let targets: Vec<_> = forecast
        .predictions
        .iter()
        .map(|p| (p.month.as_str(), p.year))
        .collect();
    assert_eq!(targets, [("July", 2024), ("August", 2024), ("September", 2024)]);

    let confidences: Vec<_> = forecast.predictions.iter().map(|p| p.confidence).collect();
    assert_eq!(confidences, vec![70.0, 65.0, 60.0]);

    assert!(forecast.predictions.iter().all(|p| p.revenue >= 10.0));
    // July and August share the summer vacation factor, so growth shows through.
    assert!(forecast.predictions[1].revenue > forecast.predictions[0].revenue);
}

#[test]
fn artifacts_on_disk_drive_the_forecast() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "revenue_forecast.csv",
        "ds,yhat,yhat_lower,yhat_upper\n\
         2024-07-01,4000.0,3500.0,4500.0\n\
         2024-08-01,4200.0,3600.0,4800.0\n\
         2024-09-01,4400.0,3700.0,5100.0\n",
    );
    write(
        dir.path(),
        "model_components.json",
        r#"{"seasonal_indices": {"monthly": {"6": 1.0, "7": 1.0, "8": 1.0}}}"#,
    );

    let mut engine = ForecastEngine::new(ArtifactConfig::new(dir.path()))
        .with_calendar(SeasonalCalendar::empty());
    assert!(engine.initialize());
    assert!(engine.has_precomputed_forecast());
    assert!(engine.has_model_components());

    let forecast = engine.revenue_predictions_at(&linear_history(), date(2024, 6, 1));
    let confidences: Vec<_> = forecast.predictions.iter().map(|p| p.confidence).collect();
    assert_eq!(confidences, vec![80.0, 75.0, 70.0]);

    let g = forecast.growth_rate;
    let expected = [4000.0 * (1.0 + g), 4200.0 * (1.0 + g).powi(2), 4400.0 * (1.0 + g).powi(3)];
    for (p, e) in forecast.predictions.iter().zip(expected) {
        assert!((p.revenue - e).abs() < 1e-6, "{} != {}", p.revenue, e);
    }
}

#[test]
fn corrupt_artifact_degrades_gracefully() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "model_components.json", "{ this is not json");

    let mut engine = ForecastEngine::new(ArtifactConfig::new(dir.path()));
    assert!(!engine.initialize());
    assert!(!engine.has_model_components());

    let forecast = engine.revenue_predictions_at(&linear_history(), date(2024, 6, 15));
    assert_eq!(forecast.predictions.len(), 3);
    assert!(forecast.predictions.iter().all(|p| p.revenue >= 10.0));
    assert!(forecast
        .predictions
        .iter()
        .all(|p| (40.0..=100.0).contains(&p.confidence)));
}

#[test]
fn one_failed_artifact_keeps_the_other() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "revenue_forecast.csv", "when,what\n2024-07-01,1\n");
    write(
        dir.path(),
        "model_components.json",
        r#"{"seasonal_indices": {"monthly": {"0": 1.1}}}"#,
    );

    let mut engine = ForecastEngine::new(ArtifactConfig::new(dir.path()));
    assert!(!engine.initialize());
    assert!(!engine.has_precomputed_forecast());
    assert!(engine.has_model_components());
}

#[test]
fn reinitialize_replaces_previous_artifacts() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "revenue_forecast.csv", "ds,yhat\n2024-07-01,4000.0\n");

    let mut engine = ForecastEngine::new(ArtifactConfig::new(dir.path()));
    assert!(engine.initialize());
    assert!(engine.has_precomputed_forecast());

    fs::remove_file(dir.path().join("revenue_forecast.csv")).unwrap();
    assert!(engine.initialize());
    assert!(!engine.has_precomputed_forecast());

    // Loading twice from the same files gives the same forecast.
    write(dir.path(), "revenue_forecast.csv", "ds,yhat\n2024-07-01,4000.0\n");
    assert!(engine.initialize());
    let first = engine.revenue_predictions_at(&linear_history(), date(2024, 6, 1));
    assert!(engine.initialize());
    let second = engine.revenue_predictions_at(&linear_history(), date(2024, 6, 1));
    assert_eq!(first, second);
}

#[test]
fn aggregated_orders_feed_the_engine() {
    init_logging();
    let orders: Vec<_> = (1..=6u32)
        .flat_map(|m| (0..m).map(move |d| OrderRecord::new(date(2024, m, d + 1), 100.0)))
        .collect();
    let history = monthly_history(&orders, date(2024, 6, 30), 6).unwrap();
    assert_eq!(history.len(), 6);
    assert_eq!(history[5].order_count, 6);

    let engine = ForecastEngine::default();
    let forecast = engine.revenue_predictions_at(&history, date(2024, 6, 30));
    assert_eq!(forecast.predictions.len(), 3);
    // Mean growth of 100 -> 600 is well above the cap.
    assert_eq!(forecast.growth_rate, 0.25);
}

#[test]
fn forecast_serializes_for_the_api() {
    let engine = ForecastEngine::default();
    let forecast = engine.revenue_predictions_at(&[], date(2024, 6, 1));
    let json = serde_json::to_value(&forecast).unwrap();

    assert_eq!(json["growthRate"], serde_json::json!(0.05));
    let first = &json["predictions"][0];
    assert_eq!(first["month"], "July");
    assert_eq!(first["year"], 2024);
    assert!(first["revenue"].as_f64().unwrap() >= 10.0);
    assert_eq!(first["confidence"], serde_json::json!(70.0));
}
