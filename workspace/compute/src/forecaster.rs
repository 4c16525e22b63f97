use crate::error::Result;

/// Common interface over the pretrained forecasting models.
///
/// The offline pipeline's model families expose their extrapolation under
/// different method names; this trait unifies them behind a single request
/// contract: a horizon length in whole days in, one numeric value per day
/// out.
pub trait Forecaster: Send + Sync {
    /// Legend label for chart traces produced by this model.
    fn label(&self) -> &'static str;

    /// Extrapolate `horizon` future values from the fitted state.
    ///
    /// The returned sequence always has exactly `horizon` elements, all of
    /// them finite.
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>>;
}
