use thiserror::Error;

/// Failure to deserialize a pretrained model artifact.
///
/// Always fatal: the service cannot answer any forecast request without its
/// models, so these errors are raised once at startup and abort it.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    /// The artifact file is missing or unreadable
    #[error("cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact is not valid JSON for any known model family
    #[error("cannot parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact was produced for a different format revision
    #[error("unsupported artifact version {found}, expected {expected}")]
    UnsupportedVersion { expected: u32, found: u32 },

    /// The artifact holds a model of a different family than the slot it
    /// was loaded into
    #[error("expected a {expected} artifact, found {found}")]
    WrongFamily {
        expected: &'static str,
        found: &'static str,
    },

    /// The artifact deserialized but its fitted state is inconsistent
    #[error("invalid fitted state: {0}")]
    Invalid(String),
}

/// Error types for forecast computation.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The requested horizon has no steps to forecast
    #[error("horizon length must be at least 1")]
    InvalidHorizon,

    /// Extrapolation produced a non-finite value
    #[error("numerical error: {0}")]
    Numerical(String),
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
