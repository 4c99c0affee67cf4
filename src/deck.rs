//! The standard 52-card deck.

use alloc::vec::Vec;

use crate::card::{Card, Face, Suit};
use crate::pile::Pile;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Creates a full deck, ordered by suit and then by face.
///
/// The top of the returned pile is the King of Spades.
#[must_use]
pub fn new_deck() -> Pile {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for face in Face::ALL {
            cards.push(Card::new(face, suit));
        }
    }

    Pile::from_cards(cards)
}

impl Pile {
    /// Creates a full deck, ordered by suit and then by face.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{DECK_SIZE, Pile};
    ///
    /// let deck = Pile::deck();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.peek().unwrap().typeable_name(), "KS");
    /// ```
    #[must_use]
    pub fn deck() -> Self {
        new_deck()
    }

    /// Creates a full deck shuffled with the given seed.
    #[must_use]
    pub fn shuffled_deck(seed: u64) -> Self {
        let mut deck = new_deck();
        deck.shuffle_seeded(seed);
        deck
    }
}
