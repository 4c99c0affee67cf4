//! Ordered piles of cards.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Index, Sub};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::{IndexError, PileError};

/// An ordered, mutable sequence of cards.
///
/// The top of the pile is the last card. Duplicates are allowed, and the order
/// only changes through [`sort`](Self::sort), [`reverse`](Self::reverse) or
/// [`shuffle`](Self::shuffle).
///
/// A pile is not internally synchronized: concurrent mutation needs external
/// locking.
///
/// Equality and hashing are order-sensitive. Comparison is by size only:
/// piles of different length order by length, and distinct piles of the same
/// length are unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    /// Cards in the pile, bottom first.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding the given cards, the last one on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the contents of the pile.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Consumes the pile and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Puts a card on top of the pile.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Inserts a card at `position`, where `0` is the bottom and `len()` the top.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is greater than the number of cards.
    pub fn insert(&mut self, position: usize, card: Card) -> Result<(), IndexError> {
        let len = self.len();
        if position > len {
            return Err(IndexError {
                index: position,
                len,
            });
        }
        self.cards.insert(position, card);
        Ok(())
    }

    /// Inserts a card on top of the pile.
    pub fn insert_top(&mut self, card: Card) {
        self.append(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn peek(&self) -> Result<Card, PileError> {
        self.cards.last().copied().ok_or(PileError::Empty)
    }

    /// Returns the card at `position` without removing it.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is out of bounds.
    pub fn peek_at(&self, position: usize) -> Result<Card, IndexError> {
        self.at(position)
    }

    /// Returns the card at `index`, counting from the bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn at(&self, index: usize) -> Result<Card, IndexError> {
        self.cards.get(index).copied().ok_or(IndexError {
            index,
            len: self.len(),
        })
    }

    /// Removes the first occurrence of `card`, counting from the bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the pile.
    pub fn remove(&mut self, card: Card) -> Result<(), PileError> {
        let position = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(PileError::NotPresent(card))?;
        self.cards.remove(position);
        Ok(())
    }

    /// Removes every card from the pile.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns how many times `card` occurs in the pile.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns an iterator over the cards, bottom first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Shuffles the pile with the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        #[cfg(feature = "tracing")]
        tracing::trace!(cards = self.len(), "shuffling pile");

        self.cards.shuffle(rng);
    }

    /// Shuffles the pile with a `ChaCha8` generator seeded from `seed`.
    ///
    /// The same seed always produces the same order for the same pile.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Sorts the pile in ascending card order.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Reverses the order of the pile in place.
    pub fn reverse(&mut self) {
        self.cards.reverse();
    }

    /// Returns a new pile with the cards in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.cards.iter().rev().copied().collect()
    }

    /// Puts all of `other`'s cards on top of this pile, in order.
    pub fn extend_from_pile(&mut self, other: &Self) {
        self.cards.extend_from_slice(&other.cards);
    }

    /// Deals cards round-robin from the top of this pile into `num_sets` new
    /// piles of up to `cards_per_set` cards each.
    ///
    /// Dealing stops as soon as this pile runs out, so the returned piles may
    /// be short.
    ///
    /// ```
    /// use cardpile::Pile;
    ///
    /// let mut deck = Pile::deck();
    /// let hands = deck.deal(3, 5);
    /// assert!(hands.iter().all(|hand| hand.len() == 5));
    /// assert_eq!(deck.len(), 37);
    /// ```
    pub fn deal(&mut self, num_sets: usize, cards_per_set: usize) -> Vec<Self> {
        let mut sets: Vec<Self> = (0..num_sets).map(|_| Self::new()).collect();

        'rounds: for _ in 0..cards_per_set {
            for set in &mut sets {
                let Ok(card) = self.pop() else {
                    break 'rounds;
                };
                set.append(card);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            num_sets,
            cards_per_set,
            remaining = self.len(),
            "dealt cards from pile"
        );

        sets
    }

    fn card_set(&self) -> HashSet<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns the cards of this pile that are not in `other`, in order.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let other = other.card_set();
        self.iter().copied().filter(|card| !other.contains(card)).collect()
    }

    /// Returns the cards of this pile that are also in `other`, in order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let other = other.card_set();
        self.iter().copied().filter(|card| other.contains(card)).collect()
    }

    /// Returns every distinct card of both piles.
    ///
    /// Each card appears once, at its first occurrence in this pile followed
    /// by `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut seen = HashSet::new();
        self.iter()
            .chain(other.iter())
            .copied()
            .filter(|&card| seen.insert(card))
            .collect()
    }

    /// Returns the distinct cards that are in exactly one of the two piles.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.union(other).difference(&self.intersection(other))
    }

    /// Compares the sizes of two piles.
    #[must_use]
    pub fn cmp_size(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len())
    }
}

impl PartialOrd for Pile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_size(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Pile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> Extend<&'a Card> for Pile {
    fn extend<I: IntoIterator<Item = &'a Card>>(&mut self, iter: I) {
        self.cards.extend(iter.into_iter().copied());
    }
}

impl IntoIterator for Pile {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Index<usize> for Pile {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Add for &Pile {
    type Output = Pile;

    fn add(self, rhs: Self) -> Pile {
        let mut pile = self.clone();
        pile.extend_from_pile(rhs);
        pile
    }
}

impl Sub for &Pile {
    type Output = Pile;

    fn sub(self, rhs: Self) -> Pile {
        self.difference(rhs)
    }
}

impl BitAnd for &Pile {
    type Output = Pile;

    fn bitand(self, rhs: Self) -> Pile {
        self.intersection(rhs)
    }
}

impl BitOr for &Pile {
    type Output = Pile;

    fn bitor(self, rhs: Self) -> Pile {
        self.union(rhs)
    }
}

impl BitXor for &Pile {
    type Output = Pile;

    fn bitxor(self, rhs: Self) -> Pile {
        self.symmetric_difference(rhs)
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
