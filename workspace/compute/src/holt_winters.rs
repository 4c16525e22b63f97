//! Fitted Holt-Winters (triple exponential smoothing) model.
//!
//! Only the fitted state is represented here: the smoothing parameters and
//! the final level, trend, and seasonal components produced by the offline
//! training pipeline. Forecasting extrapolates from that state; there is no
//! fitting code in this crate.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ModelLoadError, Result};
use crate::forecaster::Forecaster;

/// Type of seasonality the model was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalType {
    Additive,
    Multiplicative,
}

/// Fitted Holt-Winters state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoltWintersModel {
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
    /// Seasonal smoothing parameter
    gamma: f64,
    /// Type of seasonality
    seasonal_type: SeasonalType,
    /// Final level estimate
    level: f64,
    /// Final trend estimate
    trend: f64,
    /// Final seasonal components, one per period step
    seasonal: Vec<f64>,
}

impl HoltWintersModel {
    /// Build a model from already-fitted components.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        alpha: f64,
        beta: f64,
        gamma: f64,
        seasonal_type: SeasonalType,
        level: f64,
        trend: f64,
        seasonal: Vec<f64>,
    ) -> std::result::Result<Self, ModelLoadError> {
        let model = Self {
            alpha,
            beta,
            gamma,
            seasonal_type,
            level,
            trend,
            seasonal,
        };
        model.validate()?;
        Ok(model)
    }

    /// Check the fitted state for structural consistency.
    pub(crate) fn validate(&self) -> std::result::Result<(), ModelLoadError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ModelLoadError::Invalid(format!(
                    "smoothing parameter {name} out of range: {value}"
                )));
            }
        }
        if self.seasonal.is_empty() {
            return Err(ModelLoadError::Invalid(
                "seasonal components must not be empty".to_string(),
            ));
        }
        if !self.level.is_finite()
            || !self.trend.is_finite()
            || self.seasonal.iter().any(|s| !s.is_finite())
        {
            return Err(ModelLoadError::Invalid(
                "fitted components contain non-finite values".to_string(),
            ));
        }
        Ok(())
    }

    /// Seasonal period length.
    pub fn period(&self) -> usize {
        self.seasonal.len()
    }

    /// All fitted components: (level, trend, seasonal).
    pub fn components(&self) -> (f64, f64, &[f64]) {
        (self.level, self.trend, &self.seasonal)
    }
}

impl Forecaster for HoltWintersModel {
    fn label(&self) -> &'static str {
        "Holt-Winters Forecast"
    }

    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon);
        }

        let period = self.seasonal.len();
        let mut forecasts = Vec::with_capacity(horizon);

        for h in 1..=horizon {
            let seasonal = self.seasonal[(h - 1) % period];
            let value = match self.seasonal_type {
                SeasonalType::Additive => self.level + h as f64 * self.trend + seasonal,
                SeasonalType::Multiplicative => (self.level + h as f64 * self.trend) * seasonal,
            };
            if !value.is_finite() {
                return Err(ForecastError::Numerical(format!(
                    "non-finite forecast value at step {h}"
                )));
            }
            forecasts.push(value);
        }

        Ok(forecasts)
    }
}
