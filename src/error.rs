//! Error types for guest-init-rs

use thiserror::Error;

/// Main error type for guest-init-rs operations
#[derive(Error, Debug)]
pub enum GuestInitError {
    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Network data error: {0}")]
    NetworkData(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OS configuration error: {0}")]
    OsConfig(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
