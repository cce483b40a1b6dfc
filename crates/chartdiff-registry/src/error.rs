//! Error types for registry operations

use thiserror::Error;

/// Registry client errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid registry URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Invalid response from registry: {message}")]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RegistryError::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            RegistryError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
