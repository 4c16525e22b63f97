use anyhow::Result;
use compute::ModelStore;
use tracing::{error, info};

/// Load both artifacts and report the fitted parameters they carry.
pub fn check_models(hw_model_path: &str, sarima_model_path: &str) -> Result<()> {
    info!("Checking model artifacts");

    let store = match ModelStore::load(hw_model_path, sarima_model_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Model artifact check failed: {}", e);
            return Err(e.into());
        }
    };

    let hw = store.holt_winters();
    let (level, trend, seasonal) = hw.components();
    println!("Holt-Winters: {}", hw_model_path);
    println!("  period:   {}", hw.period());
    println!("  level:    {level}");
    println!("  trend:    {trend}");
    println!("  seasonal: {seasonal:?}");

    let arima = store.auto_arima();
    let order = arima.order();
    println!("Auto ARIMA: {}", sarima_model_path);
    println!("  order: ({}, {}, {})", order.p, order.d, order.q);
    println!("  ar:    {:?}", arima.ar_coefficients());
    println!("  ma:    {:?}", arima.ma_coefficients());

    info!("Both model artifacts loaded successfully");
    Ok(())
}
