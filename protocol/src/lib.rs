//! Messages exchanged between a presentation layer and a [`feint_core::GameSession`].
//!
//! Everything here is plain data with serde support, so a frontend can drive a game over
//! JSON without linking against the engine types directly.

pub use dispatch::*;
pub use error::*;
pub use settings::*;
pub use view::*;

mod dispatch;
mod error;
mod settings;
mod view;

pub fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn decode<'a, T: serde::Deserialize<'a>>(json: &'a str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
