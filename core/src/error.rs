use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move index {0}, expected 0, 1 or 2")]
    InvalidMove(u8),
    #[error("Unknown move name")]
    UnknownMove,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Previous outcome has not been acknowledged yet")]
    AwaitingAcknowledgement,
}

pub type Result<T> = core::result::Result<T, GameError>;
