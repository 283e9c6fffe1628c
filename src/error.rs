//! Error type shared by the whole crate
//!
//! Failing to find a SET is not an error: searches return `None` for that.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetError {
    #[error("value {value} at property {position} is out of range (expected 0, 1 or 2)")]
    InvalidValue { position: usize, value: u8 },

    #[error("a card needs at least one property")]
    NoProperties,

    #[error("card index {index} is out of range (deck of {size} cards)")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("cards have different property counts: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("property count {count} is not supported (expected 1..={max})")]
    InvalidPropertyCount { count: usize, max: usize },

    #[error("cannot deal {requested} cards from a deck of {available}")]
    NotEnoughCards { requested: usize, available: usize },

    #[error("cannot parse card: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SetError>;
