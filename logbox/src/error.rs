//!
//!  Errors produced by this crate.
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("logger is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error("invalid uri: {0}")]
    InvalidUri(String),
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::Custom(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::Custom(err.to_string())
    }
}
