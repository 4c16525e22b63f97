use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{check_models, serve};

#[derive(Parser)]
#[command(name = "forecastboard")]
#[command(about = "Customer complaints forecasting dashboard backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the pretrained Holt-Winters model artifact
        #[arg(
            long,
            env = "HW_MODEL_PATH",
            default_value = "saved_models/hw_fitted_model.json"
        )]
        hw_model_path: String,

        /// Path to the pretrained auto-ARIMA model artifact
        #[arg(
            long,
            env = "SARIMA_MODEL_PATH",
            default_value = "saved_models/auto_sarima_model.json"
        )]
        sarima_model_path: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Load both model artifacts and report their fitted parameters
    ///
    /// Exits non-zero if either artifact is missing, corrupt, or written
    /// for a different format revision. Useful after the offline training
    /// pipeline publishes new artifacts.
    CheckModels {
        /// Path to the pretrained Holt-Winters model artifact
        #[arg(
            long,
            env = "HW_MODEL_PATH",
            default_value = "saved_models/hw_fitted_model.json"
        )]
        hw_model_path: String,

        /// Path to the pretrained auto-ARIMA model artifact
        #[arg(
            long,
            env = "SARIMA_MODEL_PATH",
            default_value = "saved_models/auto_sarima_model.json"
        )]
        sarima_model_path: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                hw_model_path,
                sarima_model_path,
                bind_address,
            } => {
                serve(&hw_model_path, &sarima_model_path, &bind_address).await?;
            }
            Commands::CheckModels {
                hw_model_path,
                sarima_model_path,
            } => {
                check_models(&hw_model_path, &sarima_model_path)?;
            }
        }
        Ok(())
    }
}
