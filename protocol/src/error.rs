use minefield_core::GameError;
use thiserror::Error;

use crate::ErrorCode;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Could not encode or decode message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Transport failed: {0}")]
    Transport(String),
    #[error("Remote rejected the request ({code:?}): {message}")]
    Remote { code: ErrorCode, message: String },
    #[error("Unexpected response to {0} request")]
    UnexpectedResponse(&'static str),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
