//! Error type for subnet calculations.

use thiserror::Error;

/// Errors raised while building a [`crate::models::Subnet`] or running the prompt harness.
#[derive(Debug, Error)]
pub enum SubnetError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(String),

    #[error("Leading octet {0} does not map to an address class")]
    InvalidAddressClass(u16),

    #[error("Invalid setting: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error serializing report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubnetError>;
