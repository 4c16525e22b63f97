//! Fitted auto-ARIMA model.
//!
//! The offline pipeline selects the (p, d, q) orders and estimates the
//! coefficients; the artifact carries those together with the tail of the
//! differenced series and of the in-sample residuals, which is all the ARMA
//! recursion needs to extrapolate. Forecasts are produced on the differenced
//! scale (future residuals are zero) and re-integrated `d` times.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ModelLoadError, Result};
use crate::forecaster::Forecaster;

/// The (p, d, q) orders the model was selected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArimaOrder {
    /// Autoregressive order
    pub p: usize,
    /// Degree of differencing
    pub d: usize,
    /// Moving-average order
    pub q: usize,
}

/// Fitted auto-ARIMA state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoArimaModel {
    /// Model orders
    order: ArimaOrder,
    /// AR coefficients, `order.p` of them
    ar: Vec<f64>,
    /// MA coefficients, `order.q` of them
    ma: Vec<f64>,
    /// Constant term of the differenced series
    intercept: f64,
    /// Most recent values of the `d`-times differenced series, oldest first
    diff_tail: Vec<f64>,
    /// Most recent in-sample residuals, oldest first
    residual_tail: Vec<f64>,
    /// Last observed value of the series at each integration level:
    /// `last_levels[k]` belongs to the `k`-times differenced series
    last_levels: Vec<f64>,
}

impl AutoArimaModel {
    /// Build a model from already-fitted components.
    pub fn from_components(
        order: ArimaOrder,
        ar: Vec<f64>,
        ma: Vec<f64>,
        intercept: f64,
        diff_tail: Vec<f64>,
        residual_tail: Vec<f64>,
        last_levels: Vec<f64>,
    ) -> std::result::Result<Self, ModelLoadError> {
        let model = Self {
            order,
            ar,
            ma,
            intercept,
            diff_tail,
            residual_tail,
            last_levels,
        };
        model.validate()?;
        Ok(model)
    }

    /// Check the fitted state for structural consistency.
    pub(crate) fn validate(&self) -> std::result::Result<(), ModelLoadError> {
        let ArimaOrder { p, d, q } = self.order;

        if p > 10 || q > 10 {
            return Err(ModelLoadError::Invalid(format!(
                "orders out of range: p={p}, q={q} (maximum 10)"
            )));
        }
        if d > 2 {
            return Err(ModelLoadError::Invalid(format!(
                "differencing order d={d} out of range (maximum 2)"
            )));
        }
        if self.ar.len() != p {
            return Err(ModelLoadError::Invalid(format!(
                "expected {p} AR coefficients, found {}",
                self.ar.len()
            )));
        }
        if self.ma.len() != q {
            return Err(ModelLoadError::Invalid(format!(
                "expected {q} MA coefficients, found {}",
                self.ma.len()
            )));
        }
        if self.diff_tail.len() < p {
            return Err(ModelLoadError::Invalid(format!(
                "history tail holds {} values, AR order {p} needs at least {p}",
                self.diff_tail.len()
            )));
        }
        if self.residual_tail.len() < q {
            return Err(ModelLoadError::Invalid(format!(
                "residual tail holds {} values, MA order {q} needs at least {q}",
                self.residual_tail.len()
            )));
        }
        if self.last_levels.len() != d {
            return Err(ModelLoadError::Invalid(format!(
                "expected {d} integration seeds, found {}",
                self.last_levels.len()
            )));
        }

        let mut all_values = self
            .ar
            .iter()
            .chain(&self.ma)
            .chain(&self.diff_tail)
            .chain(&self.residual_tail)
            .chain(&self.last_levels)
            .chain(std::iter::once(&self.intercept));
        if all_values.any(|v| !v.is_finite()) {
            return Err(ModelLoadError::Invalid(
                "fitted components contain non-finite values".to_string(),
            ));
        }

        Ok(())
    }

    /// Model orders.
    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// AR coefficients.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    /// MA coefficients.
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    /// Reverse the `d` differencing passes, integrating the forecasts back
    /// to the original scale.
    fn undifference(&self, forecasts: Vec<f64>) -> Result<Vec<f64>> {
        let mut result = forecasts;
        for seed in self.last_levels.iter().rev() {
            let mut integrated = Vec::with_capacity(result.len());
            let mut previous = *seed;
            for value in result {
                previous += value;
                if !previous.is_finite() {
                    return Err(ForecastError::Numerical(
                        "non-finite value produced while re-integrating forecasts".to_string(),
                    ));
                }
                integrated.push(previous);
            }
            result = integrated;
        }
        Ok(result)
    }
}

impl Forecaster for AutoArimaModel {
    fn label(&self) -> &'static str {
        "Auto ARIMA Forecast"
    }

    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon);
        }

        let n = self.diff_tail.len();
        let mut extended = self.diff_tail.clone();
        let mut residuals = self.residual_tail.clone();

        for step in 1..=horizon {
            let mut value = self.intercept;

            for (j, coeff) in self.ar.iter().enumerate() {
                let idx = extended.len() - j - 1;
                value += coeff * (extended[idx] - self.intercept);
            }
            for (j, coeff) in self.ma.iter().enumerate() {
                let idx = residuals.len() - j - 1;
                value += coeff * residuals[idx];
            }

            if !value.is_finite() {
                return Err(ForecastError::Numerical(format!(
                    "non-finite forecast value at step {step}"
                )));
            }

            extended.push(value);
            // Future residuals are zero
            residuals.push(0.0);
        }

        self.undifference(extended.split_off(n))
    }
}
