use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::{DateRange, ForecastChart, ForecastTrace};
use compute::ModelStore;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState, ForecastQuery};

/// Title of the chart returned for an inverted or empty date range.
const INVALID_RANGE_TITLE: &str = "End date must be later than start date.";

/// Build the forecast chart for one request.
///
/// Every outcome of a request is a chart: a blank one while the trigger
/// count is still zero, a title-only one for an invalid range or a model
/// failure, and a data chart otherwise. Model errors are caught here at the
/// Forecaster boundary and never propagate past this function.
pub(crate) fn forecast_chart(models: &ModelStore, query: &ForecastQuery) -> ForecastChart {
    // Only forecast once the user has activated the trigger
    if query.n_clicks == 0 {
        return ForecastChart::empty();
    }

    let range = DateRange::new(query.start_date, query.end_date);
    let Some(horizon) = range.horizon() else {
        return ForecastChart::titled(INVALID_RANGE_TITLE);
    };

    let mut chart =
        ForecastChart::titled(query.model.chart_title()).with_axis_titles("Date", "Forecasted Value");

    for forecaster in models.selected(query.model) {
        match forecaster.forecast(horizon) {
            Ok(values) => {
                chart.push_trace(ForecastTrace::daily(forecaster.label(), range.start, &values));
            }
            // Any model failure blanks the whole response, traces already
            // computed for the other model included.
            Err(e) => return ForecastChart::titled(format!("Error generating forecast: {e}")),
        }
    }

    chart
}

/// Get a forecast chart for a date range and model selection
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    responses(
        (status = 200, description = "Forecast chart generated successfully", body = ApiResponse<ForecastChart>),
        (status = 400, description = "Malformed query parameters", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_forecast(
    Query(query): Query<ForecastQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastChart>>, StatusCode> {
    let chart = forecast_chart(&state.models, &query);

    let response = ApiResponse {
        data: chart,
        message: "Forecast chart generated successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
