//! Blending of precomputed, historical and calendar signals into a
//! short-horizon revenue forecast.

use crate::artifacts::{ArtifactConfig, ModelComponents, PrecomputedForecast};
use crate::core::{month_name, HistoricalPoint, PeriodKey, Prediction, RevenueForecast};
use crate::error::{ensure_finite, ForecastError, Result};
use crate::features::{average_revenue, growth_rate, revenue_for_month};
use crate::seasonality::{seasonal_factor, SeasonalCalendar};
use crate::utils::{clamp, Estimate};
use chrono::{NaiveDate, Utc};

/// Number of months forecast per call.
pub const FORECAST_HORIZON: u32 = 3;
/// Floor applied to every predicted revenue.
pub const MIN_PREDICTED_REVENUE: f64 = 10.0;
/// Lower bound of the confidence percentage.
pub const MIN_CONFIDENCE: f64 = 40.0;
/// Upper bound of the confidence percentage.
pub const MAX_CONFIDENCE: f64 = 100.0;

const BLENDED_BASE_CONFIDENCE: f64 = 85.0;
const BLENDED_CONFIDENCE_DECAY: f64 = 5.0;
/// Deducted when a horizon is estimated from history instead of the precomputed table.
const HISTORICAL_SOURCE_PENALTY: f64 = 10.0;
const FALLBACK_BASE_CONFIDENCE: f64 = 80.0;
const FALLBACK_CONFIDENCE_DECAY: f64 = 10.0;

/// Three-month revenue forecaster.
///
/// Holds the optional artifacts loaded by [`ForecastEngine::initialize`] and
/// the seasonal calendar. Construct once and share by reference; prediction
/// only reads the engine, reloading requires `&mut self`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use revenue_forecast::prelude::*;
///
/// let engine = ForecastEngine::default();
/// let history: Vec<_> = (1..=6)
///     .map(|m| HistoricalPoint::new(format!("2024-{:02}", m), 900.0 + 100.0 * m as f64, 10))
///     .collect();
///
/// let forecast = engine.revenue_predictions_at(&history, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// assert_eq!(forecast.predictions.len(), 3);
/// assert_eq!(forecast.predictions[0].month, "July");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ArtifactConfig,
    calendar: SeasonalCalendar,
    components: Option<ModelComponents>,
    precomputed: Option<PrecomputedForecast>,
}

impl ForecastEngine {
    /// An engine reading artifacts from `config`. Nothing is loaded until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(config: ArtifactConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the holiday and vacation rules.
    pub fn with_calendar(mut self, calendar: SeasonalCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Use an in-memory precomputed forecast instead of loading one.
    pub fn with_precomputed_forecast(mut self, forecast: PrecomputedForecast) -> Self {
        self.precomputed = Some(forecast);
        self
    }

    /// Use in-memory model components instead of loading them.
    pub fn with_model_components(mut self, components: ModelComponents) -> Self {
        self.components = Some(components);
        self
    }

    pub fn config(&self) -> &ArtifactConfig {
        &self.config
    }

    pub fn calendar(&self) -> &SeasonalCalendar {
        &self.calendar
    }

    pub fn has_precomputed_forecast(&self) -> bool {
        self.precomputed.is_some()
    }

    pub fn has_model_components(&self) -> bool {
        self.components.is_some()
    }

    /// (Re)load both artifacts, replacing whatever was loaded before.
    ///
    /// Each artifact is optional and loaded independently; a missing file
    /// only logs a warning. Returns `false` if a file exists but cannot be
    /// read or parsed, in which case that artifact is treated as absent.
    pub fn initialize(&mut self) -> bool {
        let mut ok = true;

        let path = self.config.components_path();
        self.components = match ModelComponents::load(&path) {
            Ok(Some(components)) => {
                log::info!("loaded model components from {}", path.display());
                Some(components)
            }
            Ok(None) => {
                log::warn!(
                    "model components not found at {}, using neutral seasonal indices",
                    path.display()
                );
                None
            }
            Err(e) => {
                log::error!("failed to load model components: {}", e);
                ok = false;
                None
            }
        };

        let path = self.config.forecast_path();
        self.precomputed = match PrecomputedForecast::load(&path) {
            Ok(Some(forecast)) => {
                log::info!(
                    "loaded precomputed forecast from {} ({} rows)",
                    path.display(),
                    forecast.len()
                );
                Some(forecast)
            }
            Ok(None) => {
                log::warn!(
                    "precomputed forecast not found at {}, forecasting from history only",
                    path.display()
                );
                None
            }
            Err(e) => {
                log::error!("failed to load precomputed forecast: {}", e);
                ok = false;
                None
            }
        };

        ok
    }

    /// Seasonal demand multiplier for a 0-based month of `year`.
    pub fn seasonal_factor(&self, month_index: u32, year: i32) -> Result<f64> {
        seasonal_factor(
            &self.calendar,
            self.components.as_ref().map(|c| &c.seasonal_indices),
            month_index,
            year,
        )
    }

    /// Forecast the three months following the current UTC month.
    pub fn revenue_predictions(&self, history: &[HistoricalPoint]) -> RevenueForecast {
        self.revenue_predictions_at(history, Utc::now().date_naive())
    }

    /// Forecast the three months following the month of `as_of`.
    ///
    /// Never fails: if blending fails the simplified average-and-growth
    /// procedure is used, and if that fails too the result is empty with a
    /// zero growth rate.
    pub fn revenue_predictions_at(
        &self,
        history: &[HistoricalPoint],
        as_of: NaiveDate,
    ) -> RevenueForecast {
        match self.blended_predictions(history, as_of) {
            Ok(forecast) => forecast,
            Err(e) => {
                log::warn!("blended forecast failed ({}), using fallback", e);
                match self.fallback_predictions(history, as_of) {
                    Ok(forecast) => forecast,
                    Err(e) => {
                        log::error!("fallback forecast failed: {}", e);
                        RevenueForecast::empty()
                    }
                }
            }
        }
    }

    /// Primary procedure: per horizon, take the precomputed table's value for
    /// the target month if there is one, else the same-month historical mean
    /// at reduced confidence, then compound growth and apply seasonality.
    pub fn blended_predictions(
        &self,
        history: &[HistoricalPoint],
        as_of: NaiveDate,
    ) -> Result<RevenueForecast> {
        validate_history(history)?;
        let growth = growth_rate(history);
        let current = PeriodKey::from_date(as_of);

        let mut predictions = Vec::with_capacity(FORECAST_HORIZON as usize);
        let mut ceiling = MAX_CONFIDENCE;
        for horizon in 1..=FORECAST_HORIZON {
            let target = current.plus_months(horizon);
            let mut confidence =
                BLENDED_BASE_CONFIDENCE - BLENDED_CONFIDENCE_DECAY * horizon as f64;

            let precomputed = self
                .precomputed
                .as_ref()
                .map_or(Estimate::NoData, |table| {
                    table.mean_for_month(target.month_index(), target.year())
                });
            let base = match precomputed {
                Estimate::Value(v) => v,
                Estimate::NoData => {
                    confidence -= HISTORICAL_SOURCE_PENALTY;
                    revenue_for_month(history, target.month_index())?
                }
            };

            // A later month never reads as more certain than an earlier one.
            let confidence = confidence.min(ceiling);
            ceiling = confidence;

            predictions.push(self.prediction(target, base, growth, horizon, confidence)?);
        }

        Ok(RevenueForecast {
            predictions,
            growth_rate: growth,
        })
    }

    /// Simplified procedure: overall average revenue, compounded growth and
    /// seasonality, without per-month lookups.
    pub fn fallback_predictions(
        &self,
        history: &[HistoricalPoint],
        as_of: NaiveDate,
    ) -> Result<RevenueForecast> {
        let growth = growth_rate(history);
        let base = average_revenue(history);
        let current = PeriodKey::from_date(as_of);

        let predictions = (1..=FORECAST_HORIZON)
            .map(|horizon| {
                let confidence =
                    FALLBACK_BASE_CONFIDENCE - FALLBACK_CONFIDENCE_DECAY * horizon as f64;
                self.prediction(current.plus_months(horizon), base, growth, horizon, confidence)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RevenueForecast {
            predictions,
            growth_rate: growth,
        })
    }

    fn prediction(
        &self,
        target: PeriodKey,
        base: f64,
        growth: f64,
        horizon: u32,
        confidence: f64,
    ) -> Result<Prediction> {
        let grown = base * (1.0 + growth).powi(horizon as i32);
        let adjusted = grown * self.seasonal_factor(target.month_index(), target.year())?;
        let revenue = ensure_finite("predicted revenue", adjusted)?;

        let month = month_name(target.month_index()).ok_or_else(|| {
            ForecastError::ComputationError(format!("no month name for {}", target))
        })?;

        Ok(Prediction {
            month: month.to_string(),
            year: target.year(),
            revenue: revenue.max(MIN_PREDICTED_REVENUE),
            confidence: clamp(confidence, MIN_CONFIDENCE, MAX_CONFIDENCE),
        })
    }
}

fn validate_history(history: &[HistoricalPoint]) -> Result<()> {
    for point in history {
        ensure_finite("historical revenue", point.revenue)?;
    }
    Ok(())
}
