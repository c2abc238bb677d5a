//! Crate error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading, validating or rendering a plan.
///
/// The scheduler itself never fails; every variant comes from the
/// layers around it.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Input rejected by [`validate_form`](crate::validation::validate_form).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Plan file could not be read.
    #[error("failed to read plan file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Plan file is not valid TOML or has the wrong shape.
    #[error("invalid plan file: {0}")]
    Config(#[from] toml::de::Error),

    /// A `NAME=HOURS` subject argument could not be parsed.
    #[error("invalid subject '{0}': expected NAME=HOURS")]
    InvalidSubject(String),

    #[error("failed to encode plan as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
