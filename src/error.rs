//! Error types for card and pile operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Typeable name has the wrong number of characters.
    #[error("typeable name must be 2 characters (3 for a ten), got {0}")]
    InvalidLength(usize),
    /// Face token does not name a face.
    #[error("invalid face token")]
    UnknownFace,
    /// Suit letter does not name a suit.
    #[error("invalid suit letter: '{0}'")]
    UnknownSuit(char),
}

/// Errors that can occur when taking cards from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards.
    #[error("pile is empty")]
    Empty,
    /// The card is not in the pile.
    #[error("cannot remove {0}: not in the pile")]
    NotPresent(Card),
}

/// A position outside the bounds of a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {index} out of bounds for pile of {len} cards")]
pub struct IndexError {
    /// Requested position.
    pub index: usize,
    /// Number of cards in the pile.
    pub len: usize,
}
