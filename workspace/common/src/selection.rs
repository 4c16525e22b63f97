use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which pretrained model(s) a forecast request targets.
///
/// Wire values match the dashboard dropdown: `holt_winters`, `auto_arima`,
/// `both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModelSelection {
    /// The Holt-Winters exponential smoothing model
    #[default]
    HoltWinters,
    /// The auto-SARIMA model
    AutoArima,
    /// Both models, rendered on one comparison chart
    Both,
}

impl ModelSelection {
    /// Chart title for this selection: the title-cased model name, or a
    /// fixed comparison title when both models are selected.
    pub fn chart_title(&self) -> &'static str {
        match self {
            ModelSelection::HoltWinters => "Holt Winters Forecast",
            ModelSelection::AutoArima => "Auto Arima Forecast",
            ModelSelection::Both => "Comparison of Forecasts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_dropdown() {
        assert_eq!(
            serde_json::from_str::<ModelSelection>("\"holt_winters\"").unwrap(),
            ModelSelection::HoltWinters
        );
        assert_eq!(
            serde_json::from_str::<ModelSelection>("\"auto_arima\"").unwrap(),
            ModelSelection::AutoArima
        );
        assert_eq!(
            serde_json::from_str::<ModelSelection>("\"both\"").unwrap(),
            ModelSelection::Both
        );
    }

    #[test]
    fn default_selection_is_holt_winters() {
        assert_eq!(ModelSelection::default(), ModelSelection::HoltWinters);
    }

    #[test]
    fn single_model_titles_are_title_cased() {
        assert_eq!(
            ModelSelection::HoltWinters.chart_title(),
            "Holt Winters Forecast"
        );
        assert_eq!(ModelSelection::AutoArima.chart_title(), "Auto Arima Forecast");
    }

    #[test]
    fn comparison_title_is_fixed() {
        assert_eq!(ModelSelection::Both.chart_title(), "Comparison of Forecasts");
    }
}
