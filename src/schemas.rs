use std::sync::Arc;

use chrono::NaiveDate;
use common::{DateRange, ForecastChart, ForecastPoint, ForecastTrace, ModelSelection};
use compute::ModelStore;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The pretrained models, loaded once at startup and read-only afterward
    pub models: Arc<ModelStore>,
}

/// Query parameters for the forecast endpoint
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ForecastQuery {
    /// First forecasted day (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Last forecasted day, inclusive (YYYY-MM-DD)
    pub end_date: NaiveDate,
    /// Which pretrained model(s) to invoke
    #[serde(default)]
    pub model: ModelSelection,
    /// The UI's trigger count; zero means the forecast button was never
    /// activated and the response is a blank chart
    #[serde(default)]
    pub n_clicks: u64,
}

/// API response wrapper
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of pretrained models held by the store
    pub models_loaded: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::get_forecast,
    ),
    components(
        schemas(
            ApiResponse<ForecastChart>,
            ErrorResponse,
            HealthResponse,
            ForecastQuery,
            ForecastChart,
            ForecastTrace,
            ForecastPoint,
            ModelSelection,
            DateRange,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Forecast chart endpoints"),
    ),
    info(
        title = "ForecastBoard API",
        description = "Customer complaints forecasting dashboard - serves forecast charts from pretrained time-series models",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
