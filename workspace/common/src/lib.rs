//! Common transport-layer types shared between the backend and any frontend.
//! These structs mirror the forecast handler's request/response payloads so
//! a rendering widget can deserialize chart descriptions without duplicating
//! shapes.

mod chart;
mod range;
mod selection;

pub use chart::{ForecastChart, ForecastPoint, ForecastTrace, TRACE_MODE_LINES_MARKERS};
pub use range::DateRange;
pub use selection::ModelSelection;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
