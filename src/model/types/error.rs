use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Error from the transport layer: {0}")]
    Http(String),
    #[error("Error decoding a response body: {0}")]
    Decode(String),
    #[error("Your request is incorrect: {0}")]
    InvalidRequest(String),
    #[error("A env was not found: {0}")]
    EnvNotFound(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Decode(e.to_string())
        } else {
            Error::Http(e.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
impl From<std::env::VarError> for Error {
    fn from(value: std::env::VarError) -> Self {
        Error::EnvNotFound(value.to_string())
    }
}
