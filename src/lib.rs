//! Playing cards, piles, and a standard 52-card deck, with optional `no_std`
//! support.
//!
//! The crate provides a [`Card`] value type built from a [`Face`] and a
//! [`Suit`], a [`Pile`] of cards with stack access, set algebra and dealing,
//! and [`Pile::deck`] to build a full deck in canonical order.
//!
//! # Example
//!
//! ```
//! use cardpile::{Card, Pile};
//!
//! let mut deck = Pile::deck();
//! deck.shuffle_seeded(42);
//! let hands = deck.deal(3, 5);
//! assert_eq!(hands.len(), 3);
//!
//! let card: Card = "10h".parse().unwrap();
//! assert_eq!(card.to_string(), "10♥");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod pile;

// Re-export main types
pub use card::{Card, Face, Suit};
pub use deck::{DECK_SIZE, new_deck};
pub use error::{CardError, IndexError, PileError};
pub use pile::Pile;
