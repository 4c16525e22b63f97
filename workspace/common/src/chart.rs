use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trace mode understood by the rendering widget: a line with point markers.
pub const TRACE_MODE_LINES_MARKERS: &str = "lines+markers";

/// A single forecasted value on a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    /// Calendar date of the forecasted value
    pub date: NaiveDate,
    /// Forecasted value
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// One labeled data series of a forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastTrace {
    /// Legend label of the series (e.g. "Holt-Winters Forecast")
    pub name: String,
    /// Rendering mode of the series
    pub mode: String,
    /// Ordered (date, value) points, one per day
    pub points: Vec<ForecastPoint>,
}

impl ForecastTrace {
    /// Build a line+marker trace from forecasted values indexed over
    /// consecutive calendar days starting at `start`.
    pub fn daily(name: impl Into<String>, start: NaiveDate, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(offset, &value)| ForecastPoint::new(start + Duration::days(offset as i64), value))
            .collect();

        Self {
            name: name.into(),
            mode: TRACE_MODE_LINES_MARKERS.to_string(),
            points,
        }
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A chart description consumed by the rendering widget.
///
/// A blank chart (no title, no traces) is the idle response before the user
/// ever triggers a forecast. A titled chart without traces communicates a
/// request-level failure; data charts carry one trace per selected model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct ForecastChart {
    /// Chart title, absent on the idle chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// X axis label, set on data charts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_title: Option<String>,
    /// Y axis label, set on data charts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
    /// Data series, empty on idle and failure charts
    pub traces: Vec<ForecastTrace>,
}

impl ForecastChart {
    /// Blank chart: no title, no traces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Chart carrying only a title, used for request-level failures.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set both axis labels.
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_title = Some(x.into());
        self.y_axis_title = Some(y.into());
        self
    }

    pub fn push_trace(&mut self, trace: ForecastTrace) {
        self.traces.push(trace);
    }

    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_trace_indexes_consecutive_days() {
        let trace = ForecastTrace::daily("test", date(2024, 1, 1), &[1.0, 2.0, 3.0]);

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.points[0].date, date(2024, 1, 1));
        assert_eq!(trace.points[1].date, date(2024, 1, 2));
        assert_eq!(trace.points[2].date, date(2024, 1, 3));
        assert_eq!(trace.mode, TRACE_MODE_LINES_MARKERS);
    }

    #[test]
    fn daily_trace_crosses_month_boundary() {
        let trace = ForecastTrace::daily("test", date(2024, 1, 31), &[1.0, 2.0]);

        assert_eq!(trace.points[1].date, date(2024, 2, 1));
    }

    #[test]
    fn empty_chart_has_no_title_and_no_traces() {
        let chart = ForecastChart::empty();

        assert!(chart.title.is_none());
        assert_eq!(chart.trace_count(), 0);
    }

    #[test]
    fn titled_chart_carries_no_traces() {
        let chart = ForecastChart::titled("End date must be later than start date.");

        assert_eq!(
            chart.title.as_deref(),
            Some("End date must be later than start date.")
        );
        assert_eq!(chart.trace_count(), 0);
    }

    #[test]
    fn idle_chart_serializes_without_optional_fields() {
        let json = serde_json::to_value(ForecastChart::empty()).unwrap();

        assert_eq!(json, serde_json::json!({ "traces": [] }));
    }
}
