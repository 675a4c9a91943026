use feint_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
