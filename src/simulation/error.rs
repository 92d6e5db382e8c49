use thiserror::Error;

use crate::core::BlotkarzError;

use super::config::Side;

/// Errors that can occur while configuring or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("num_rounds must be greater than 0")]
    InvalidRoundCount,

    #[error("workers must be greater than 0")]
    InvalidWorkerCount,

    #[error("Invalid {side} rank pool: {source}")]
    InvalidPool {
        side: Side,
        #[source]
        source: BlotkarzError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Failed to parse simulation config from {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
