//! Serialized model artifacts.
//!
//! The offline training pipeline writes one JSON artifact per model, tagged
//! with its family so an artifact cannot be loaded into the wrong slot:
//!
//! ```json
//! { "family": "holt_winters", "version": 1, "model": { ... } }
//! { "family": "auto_arima",   "version": 1, "model": { ... } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auto_arima::AutoArimaModel;
use crate::error::ModelLoadError;
use crate::holt_winters::HoltWintersModel;

/// Artifact format revision this build understands.
pub const ARTIFACT_VERSION: u32 = 1;

/// A deserialized model artifact of either family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ModelArtifact {
    HoltWinters { version: u32, model: HoltWintersModel },
    AutoArima { version: u32, model: AutoArimaModel },
}

impl ModelArtifact {
    /// Deserialize an artifact from a file path.
    ///
    /// Fails if the file is missing or unreadable, is not a valid artifact
    /// of any known family, was written for a different format revision, or
    /// carries an inconsistent fitted state.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading model artifact");

        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Deserialize an artifact from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ModelLoadError> {
        let artifact: ModelArtifact = serde_json::from_str(raw)?;

        let version = artifact.version();
        if version != ARTIFACT_VERSION {
            return Err(ModelLoadError::UnsupportedVersion {
                expected: ARTIFACT_VERSION,
                found: version,
            });
        }

        match &artifact {
            ModelArtifact::HoltWinters { model, .. } => model.validate()?,
            ModelArtifact::AutoArima { model, .. } => model.validate()?,
        }

        Ok(artifact)
    }

    /// Artifact format revision the file was written with.
    pub fn version(&self) -> u32 {
        match self {
            ModelArtifact::HoltWinters { version, .. } => *version,
            ModelArtifact::AutoArima { version, .. } => *version,
        }
    }

    /// Human-readable family name, as spelled in the `family` tag.
    pub fn family(&self) -> &'static str {
        match self {
            ModelArtifact::HoltWinters { .. } => "holt_winters",
            ModelArtifact::AutoArima { .. } => "auto_arima",
        }
    }
}
