//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to decode template {name}: {message}")]
    Decode { name: String, message: String },

    #[error("Template {name} is not valid UTF-8")]
    InvalidUtf8 { name: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
