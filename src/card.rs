//! Card types and their textual encodings.

use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::CardError;

/// Card suit, ordered Diamonds < Clubs < Hearts < Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Diamonds (♦).
    Diamonds = 1,
    /// Clubs (♣).
    Clubs = 2,
    /// Hearts (♥).
    Hearts = 3,
    /// Spades (♠).
    Spades = 4,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Returns the rank of the suit, from 1 (Diamonds) to 4 (Spades).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the suit with the given rank, if any.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Diamonds),
            2 => Some(Self::Clubs),
            3 => Some(Self::Hearts),
            4 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the display glyph of the suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Returns the letter used in typeable names.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// Looks up a suit by its letter, ignoring case.
    ///
    /// ```
    /// use cardpile::Suit;
    ///
    /// assert_eq!(Suit::from_letter('h'), Some(Suit::Hearts));
    /// assert_eq!(Suit::from_letter('B'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card face, ordered Ace < Two < ... < King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Face {
    /// All faces in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank of the face, from 1 (Ace) to 13 (King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the face with the given rank, if any.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1..=13 => Some(Self::ALL[rank as usize - 1]),
            _ => None,
        }
    }

    /// Returns the token used both for display and in typeable names.
    ///
    /// Pip cards use their number, picture cards and the ace their initial.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Looks up a face by its token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.token() == token)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A playing card.
///
/// Cards are immutable: the face and suit are only reachable through
/// accessors. Ordering compares the face first and the suit second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    /// Returns the face of the card.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the plain-text name of the card, such as `"AH"` or `"10C"`.
    ///
    /// ```
    /// use cardpile::{Card, Face, Suit};
    ///
    /// assert_eq!(Card::new(Face::Five, Suit::Clubs).typeable_name(), "5C");
    /// ```
    #[must_use]
    pub fn typeable_name(&self) -> String {
        let mut name = String::with_capacity(3);
        name.push_str(self.face.token());
        name.push(self.suit.letter());
        name
    }

    /// Parses a card from its typeable name.
    ///
    /// The face token must match exactly; the suit letter is case-insensitive.
    /// Only the ten has a three-character name.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has the wrong length or either token is
    /// unknown.
    ///
    /// ```
    /// use cardpile::{Card, CardError, Face, Suit};
    ///
    /// assert_eq!(Card::parse("Qs"), Ok(Card::new(Face::Queen, Suit::Spades)));
    /// assert_eq!(Card::parse("5B"), Err(CardError::UnknownSuit('B')));
    /// ```
    pub fn parse(text: &str) -> Result<Self, CardError> {
        let len = text.chars().count();
        let Some((split, suit_char)) = text.char_indices().last() else {
            return Err(CardError::InvalidLength(0));
        };

        let face_token = &text[..split];
        if len != 2 && !(len == 3 && face_token == Face::Ten.token()) {
            return Err(CardError::InvalidLength(len));
        }

        let face = Face::from_token(face_token).ok_or(CardError::UnknownFace)?;
        let suit = Suit::from_letter(suit_char).ok_or(CardError::UnknownSuit(suit_char))?;

        Ok(Self::new(face, suit))
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.face.rank(), self.suit.rank()).hash(state);
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}
