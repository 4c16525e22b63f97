use std::sync::Arc;

use anyhow::Result;
use compute::ModelStore;

use crate::schemas::AppState;

/// Initialize application state from the model artifact paths.
///
/// Loading the pretrained models is the one fatal startup step: an error
/// here aborts the process before the server binds.
pub fn initialize_app_state_with_paths(
    hw_model_path: &str,
    sarima_model_path: &str,
) -> Result<AppState> {
    tracing::info!(
        "Loading pretrained models: {} / {}",
        hw_model_path,
        sarima_model_path
    );
    let models = ModelStore::load(hw_model_path, sarima_model_path)?;

    Ok(AppState {
        models: Arc::new(models),
    })
}
