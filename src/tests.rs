#[cfg(test)]
mod integration_tests {
    use crate::schemas::ForecastQuery;
    use crate::test_utils::test_utils::{setup_failing_app, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use common::{ApiResponse, ForecastChart, ModelSelection};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn forecast_query(
        start: NaiveDate,
        end: NaiveDate,
        model: ModelSelection,
        n_clicks: u64,
    ) -> ForecastQuery {
        ForecastQuery {
            start_date: start,
            end_date: end,
            model,
            n_clicks,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // Send GET request to health endpoint
        let response = server.get("/health").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["models_loaded"], 2);
    }

    #[tokio::test]
    async fn test_forecast_before_first_trigger_is_blank() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let query = forecast_query(
            date(2024, 1, 1),
            date(2024, 1, 5),
            ModelSelection::HoltWinters,
            0,
        );

        let response = server.get("/api/v1/forecast").add_query_params(&query).await;

        // Verify response: a blank chart, not an error
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastChart> = response.json();
        assert!(body.success);
        assert!(body.data.title.is_none());
        assert_eq!(body.data.trace_count(), 0);
    }

    #[tokio::test]
    async fn test_forecast_holt_winters_five_day_range() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let query = forecast_query(
            date(2024, 1, 1),
            date(2024, 1, 5),
            ModelSelection::HoltWinters,
            1,
        );

        let response = server.get("/api/v1/forecast").add_query_params(&query).await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastChart> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Forecast chart generated successfully");

        let chart = &body.data;
        assert_eq!(chart.title.as_deref(), Some("Holt Winters Forecast"));
        assert_eq!(chart.trace_count(), 1);

        // Five points, end date inclusive
        let trace = &chart.traces[0];
        assert_eq!(trace.name, "Holt-Winters Forecast");
        assert_eq!(trace.len(), 5);
        assert_eq!(trace.points[0].date, date(2024, 1, 1));
        assert_eq!(trace.points[4].date, date(2024, 1, 5));
    }

    #[tokio::test]
    async fn test_forecast_inverted_range_returns_titled_empty_chart() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let query = forecast_query(
            date(2024, 1, 5),
            date(2024, 1, 1),
            ModelSelection::HoltWinters,
            1,
        );

        let response = server.get("/api/v1/forecast").add_query_params(&query).await;

        // A user-visible outcome, not an HTTP error
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastChart> = response.json();
        assert_eq!(
            body.data.title.as_deref(),
            Some("End date must be later than start date.")
        );
        assert_eq!(body.data.trace_count(), 0);
    }

    #[tokio::test]
    async fn test_forecast_both_models_comparison_chart() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let query = forecast_query(date(2024, 6, 1), date(2024, 6, 14), ModelSelection::Both, 1);

        let response = server.get("/api/v1/forecast").add_query_params(&query).await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastChart> = response.json();

        let chart = &body.data;
        assert_eq!(chart.title.as_deref(), Some("Comparison of Forecasts"));
        assert_eq!(chart.trace_count(), 2);

        // One series per model, covering identical date ranges
        assert_eq!(chart.traces[0].name, "Holt-Winters Forecast");
        assert_eq!(chart.traces[1].name, "Auto ARIMA Forecast");
        assert_eq!(chart.traces[0].len(), 14);

        let dates_a: Vec<_> = chart.traces[0].points.iter().map(|p| p.date).collect();
        let dates_b: Vec<_> = chart.traces[1].points.iter().map(|p| p.date).collect();
        assert_eq!(dates_a, dates_b);
    }

    #[tokio::test]
    async fn test_forecast_model_failure_is_reported_in_the_chart() {
        // Setup test server whose Holt-Winters model overflows
        let app = setup_failing_app();
        let server = TestServer::new(app).unwrap();

        let query = forecast_query(date(2024, 1, 1), date(2024, 1, 10), ModelSelection::Both, 1);

        let response = server.get("/api/v1/forecast").add_query_params(&query).await;

        // The failure never escapes the handler as an HTTP error
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastChart> = response.json();

        let title = body.data.title.as_ref().expect("failure chart must carry a title");
        assert!(title.starts_with("Error generating forecast:"));
        assert!(title.contains("non-finite forecast value"));
        assert_eq!(body.data.trace_count(), 0);
    }

    #[tokio::test]
    async fn test_forecast_is_deterministic_across_requests() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let query = forecast_query(date(2024, 2, 1), date(2024, 2, 20), ModelSelection::Both, 2);

        let first = server.get("/api/v1/forecast").add_query_params(&query).await;
        let second = server.get("/api/v1/forecast").add_query_params(&query).await;

        first.assert_status(StatusCode::OK);
        second.assert_status(StatusCode::OK);

        let first_body: ApiResponse<ForecastChart> = first.json();
        let second_body: ApiResponse<ForecastChart> = second.json();
        assert_eq!(first_body.data, second_body.data);
    }

    #[tokio::test]
    async fn test_forecast_defaults_to_holt_winters() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // No model parameter: the dropdown default applies
        let response = server
            .get("/api/v1/forecast")
            .add_query_param("start_date", "2024-01-01")
            .add_query_param("end_date", "2024-01-03")
            .add_query_param("n_clicks", "1")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastChart> = response.json();
        assert_eq!(body.data.title.as_deref(), Some("Holt Winters Forecast"));
    }

    #[tokio::test]
    async fn test_forecast_with_malformed_date_is_rejected() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // Date parsing happens in the hosting layer, before the handler
        let response = server
            .get("/api/v1/forecast")
            .add_query_param("start_date", "not-a-date")
            .add_query_param("end_date", "2024-01-03")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prometheus_metrics_endpoint() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // In test mode, Prometheus metrics are disabled to avoid conflicts
        // on the process-wide recorder, so the route does not exist.
        let response = server.get("/metrics").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
