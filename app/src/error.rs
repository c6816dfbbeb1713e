//! Error types shared across the crate.

use std::num::ParseFloatError;
use std::path::PathBuf;

/// A valid-looking form that could not be turned into a record
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Amount {value:?} is not a number")]
    InvalidAmount {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Amount {value:?} is not a finite number")]
    NonFiniteAmount { value: String },
}

/// Why a submission did not reach a successful save.
///
/// Only ever logged; the user sees the configured failure message.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Could not convert form: {0}")]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Failures raised by repository implementations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} repository is unavailable")]
    Unavailable { entity: String },
    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
