//! Error types for the sorein-ml crate.

use thiserror::Error;

/// Top-level error type for data pipeline operations.
#[derive(Debug, Error)]
pub enum MlError {
    #[error("Pipeline not initialized")]
    NotInitialized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] Box<figment::Error>),
}

impl MlError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
