//! Error types for deck construction, flipping and custom content.

use thiserror::Error;

use crate::card::ContentId;

/// Failure to build a game or accept a custom board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("need {required} distinct faces but only {available} are available")]
    InsufficientContent { required: usize, available: usize },

    #[error("board needs {expected} images, got {actual}")]
    ContentCountMismatch { expected: usize, actual: usize },

    #[error("image reference {reference:?} is used more than once")]
    DuplicateContent { reference: String },

    #[error("image reference {reference:?} collides with earlier reference {earlier:?}")]
    ContentCollision { reference: String, earlier: String },

    #[error("deck has {actual} cards, board needs {expected}")]
    DeckSizeMismatch { expected: usize, actual: usize },

    #[error("{content:?} appears {count} times in the deck")]
    UnpairedContent { content: ContentId, count: usize },

    #[error("no board holds {pairs} pairs")]
    UnsupportedPairCount { pairs: usize },

    #[error("game name {name:?} must be {min} to {max} characters")]
    InvalidGameName { name: String, min: usize, max: usize },

    #[error("custom game {name:?} has no images")]
    EmptyGame { name: String },
}

/// A flip the engine refused; the game state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    #[error("position {position} is off the board ({card_count} cards)")]
    InvalidPosition { position: usize, card_count: usize },

    #[error("card {0} is already matched")]
    AlreadyMatched(usize),

    #[error("card {0} is already face up")]
    AlreadyFaceUp(usize),
}

/// Failure to fetch or publish a custom game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("couldn't find any such game, {0:?}")]
    NotFound(String),

    #[error("Name taken: {0:?}. Please choose another")]
    NameTaken(String),

    #[error("game {name:?} is unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error(transparent)]
    Invalid(#[from] GameError),
}
