//! Error types for configuration loading and viewport handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid viewport {width}x{height}: dimensions must be positive and finite")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
