//! Error types for htmark operations.

use thiserror::Error;

/// Errors that can occur while configuring or running a conversion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for option {name}: {value:?}")]
    InvalidOption { name: String, value: String },
}

impl Error {
    pub(crate) fn invalid_option(name: &str, value: impl Into<String>) -> Self {
        Error::InvalidOption {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
