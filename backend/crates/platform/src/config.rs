//! Configuration Helpers
//!
//! Decoding of secrets and flags read from the environment.

use base64::{Engine, engine::general_purpose};
use thiserror::Error;

/// Configuration decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} is not valid base64")]
    InvalidBase64 { name: &'static str },

    #[error("{name} must decode to exactly {expected} bytes (got {actual})")]
    InvalidLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{name} must be a boolean (true/false/1/0), got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Decode a base64 (standard alphabet) 32-byte secret
///
/// `name` is only used in the error message.
pub fn decode_secret(name: &'static str, encoded: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| ConfigError::InvalidBase64 { name })?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ConfigError::InvalidLength {
            name,
            expected: 32,
            actual: bytes.len(),
        })
}

/// Parse a boolean flag
pub fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
