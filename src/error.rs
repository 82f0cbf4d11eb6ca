//! Crate-level errors for client setup and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormsError {
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FormsError>;
