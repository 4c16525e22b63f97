//! Forecasting capabilities behind the dashboard: the pretrained model
//! store, the two fitted model families, and the [`Forecaster`] boundary
//! the request handler calls through.
//!
//! Nothing here trains a model. The fitted state arrives in JSON artifacts
//! written by the offline pipeline; this crate deserializes it, validates
//! it, and extrapolates from it.

pub mod artifact;
pub mod auto_arima;
pub mod error;
pub mod forecaster;
pub mod holt_winters;
pub mod store;

pub use artifact::{ModelArtifact, ARTIFACT_VERSION};
pub use auto_arima::{ArimaOrder, AutoArimaModel};
pub use error::{ForecastError, ModelLoadError};
pub use forecaster::Forecaster;
pub use holt_winters::{HoltWintersModel, SeasonalType};
pub use store::ModelStore;
