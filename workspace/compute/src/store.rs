use std::path::Path;

use tracing::info;

use crate::artifact::ModelArtifact;
use crate::auto_arima::AutoArimaModel;
use crate::error::ModelLoadError;
use crate::forecaster::Forecaster;
use crate::holt_winters::HoltWintersModel;

use common::ModelSelection;

/// The pretrained models the service answers requests with.
///
/// Loaded once at startup and never mutated afterward; handlers hold it by
/// shared reference and only ever call [`Forecaster::forecast`] on it.
#[derive(Debug, Clone)]
pub struct ModelStore {
    holt_winters: HoltWintersModel,
    auto_arima: AutoArimaModel,
}

impl ModelStore {
    /// Load both pretrained models from their artifact files.
    ///
    /// Any failure here is fatal: the service cannot answer forecast
    /// requests without its models and refuses to start.
    pub fn load(
        holt_winters_path: impl AsRef<Path>,
        auto_arima_path: impl AsRef<Path>,
    ) -> Result<Self, ModelLoadError> {
        let holt_winters = match ModelArtifact::from_file(holt_winters_path)? {
            ModelArtifact::HoltWinters { model, .. } => model,
            other => {
                return Err(ModelLoadError::WrongFamily {
                    expected: "holt_winters",
                    found: other.family(),
                });
            }
        };
        info!(period = holt_winters.period(), "Holt-Winters model loaded");

        let auto_arima = match ModelArtifact::from_file(auto_arima_path)? {
            ModelArtifact::AutoArima { model, .. } => model,
            other => {
                return Err(ModelLoadError::WrongFamily {
                    expected: "auto_arima",
                    found: other.family(),
                });
            }
        };
        info!(order = ?auto_arima.order(), "Auto ARIMA model loaded");

        Ok(Self::new(holt_winters, auto_arima))
    }

    /// Build a store from already-loaded models.
    pub fn new(holt_winters: HoltWintersModel, auto_arima: AutoArimaModel) -> Self {
        Self {
            holt_winters,
            auto_arima,
        }
    }

    /// The fitted Holt-Winters model.
    pub fn holt_winters(&self) -> &HoltWintersModel {
        &self.holt_winters
    }

    /// The fitted auto-ARIMA model.
    pub fn auto_arima(&self) -> &AutoArimaModel {
        &self.auto_arima
    }

    /// Number of models held by the store.
    pub fn model_count(&self) -> usize {
        2
    }

    /// Resolve a selection to the forecasters to invoke, Holt-Winters first.
    pub fn selected(&self, selection: ModelSelection) -> Vec<&dyn Forecaster> {
        match selection {
            ModelSelection::HoltWinters => vec![&self.holt_winters],
            ModelSelection::AutoArima => vec![&self.auto_arima],
            ModelSelection::Both => vec![&self.holt_winters, &self.auto_arima],
        }
    }
}
