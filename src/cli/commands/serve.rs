use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::initialize_app_state_with_paths;
use crate::router::create_router;

pub async fn serve(hw_model_path: &str, sarima_model_path: &str, bind_address: &str) -> Result<()> {
    trace!("Entering serve function");
    info!("ForecastBoard application starting up");
    debug!("Holt-Winters artifact: {}", hw_model_path);
    debug!("Auto-ARIMA artifact: {}", sarima_model_path);
    debug!("Bind address: {}", bind_address);

    // Load the pretrained models; the server refuses to start without them
    trace!("Initializing application state");
    let state = match initialize_app_state_with_paths(hw_model_path, sarima_model_path) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to load pretrained models: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("ForecastBoard API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
