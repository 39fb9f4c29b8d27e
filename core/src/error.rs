use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid configuration, the board needs a positive size and at least one safe cell")]
    InvalidConfiguration,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    GameAlreadyOver,
    #[error("Mines were already placed for this session")]
    AlreadyPlaced,
    #[error("No game in progress, start a new session first")]
    NoSession,
}

pub type Result<T> = core::result::Result<T, GameError>;
