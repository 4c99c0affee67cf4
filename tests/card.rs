//! Card integration tests.

use std::collections::HashSet;

use cardpile::{Card, CardError, Face, Suit};

const fn card(face: Face, suit: Suit) -> Card {
    Card::new(face, suit)
}

fn all_cards() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Face::ALL.into_iter().map(move |face| card(face, suit)))
}

#[test]
fn accessors_return_fields() {
    let c = card(Face::Six, Suit::Hearts);
    assert_eq!(c.face(), Face::Six);
    assert_eq!(c.suit(), Suit::Hearts);
}

#[test]
fn enum_ranks_follow_declaration_order() {
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(suit.rank()), i + 1);
        assert_eq!(Suit::from_rank(suit.rank()), Some(suit));
    }
    for (i, face) in Face::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(face.rank()), i + 1);
        assert_eq!(Face::from_rank(face.rank()), Some(face));
    }

    assert!(Suit::Diamonds < Suit::Clubs);
    assert!(Suit::Hearts < Suit::Spades);
    assert!(Face::Ace < Face::Two);
    assert!(Face::Queen < Face::King);
    assert_eq!(Suit::from_rank(0), None);
    assert_eq!(Face::from_rank(14), None);
}

#[test]
fn tokens_are_unique() {
    let letters: HashSet<char> = Suit::ALL.into_iter().map(Suit::letter).collect();
    assert_eq!(letters.len(), Suit::ALL.len());

    let tokens: HashSet<&str> = Face::ALL.into_iter().map(Face::token).collect();
    assert_eq!(tokens.len(), Face::ALL.len());
}

#[test]
fn typeable_names() {
    assert_eq!(card(Face::Ace, Suit::Hearts).typeable_name(), "AH");
    assert_eq!(card(Face::Five, Suit::Clubs).typeable_name(), "5C");
    assert_eq!(card(Face::Six, Suit::Spades).typeable_name(), "6S");
    assert_eq!(card(Face::Ten, Suit::Diamonds).typeable_name(), "10D");
    assert_eq!(card(Face::King, Suit::Diamonds).typeable_name(), "KD");
}

#[test]
fn display_uses_glyphs() {
    assert_eq!(card(Face::Six, Suit::Spades).to_string(), "6♠");
    assert_eq!(card(Face::Ace, Suit::Diamonds).to_string(), "A♦");
    assert_eq!(card(Face::Ten, Suit::Hearts).to_string(), "10♥");
    assert_eq!(card(Face::Jack, Suit::Clubs).to_string(), "J♣");
}

#[test]
fn parse_typeable_names() {
    assert_eq!(Card::parse("5C"), Ok(card(Face::Five, Suit::Clubs)));
    assert_eq!(Card::parse("10h"), Ok(card(Face::Ten, Suit::Hearts)));
    assert_eq!(Card::parse("qd"), Err(CardError::UnknownFace));
    assert_eq!("Js".parse::<Card>(), Ok(card(Face::Jack, Suit::Spades)));
}

#[test]
fn parse_rejects_malformed_input() {
    assert_eq!(Card::parse("5B"), Err(CardError::UnknownSuit('B')));
    assert_eq!(Card::parse("abcd"), Err(CardError::InvalidLength(4)));
    assert_eq!(Card::parse(""), Err(CardError::InvalidLength(0)));
    assert_eq!(Card::parse("A"), Err(CardError::InvalidLength(1)));
    assert_eq!(Card::parse("11H"), Err(CardError::InvalidLength(3)));
    assert_eq!(Card::parse("1H"), Err(CardError::UnknownFace));
    assert_eq!(Card::parse("TH"), Err(CardError::UnknownFace));
    assert_eq!(Card::parse("♦H"), Err(CardError::UnknownFace));
    assert_eq!(Card::parse("A♦"), Err(CardError::UnknownSuit('♦')));
}

#[test]
fn parse_round_trips_every_card() {
    for c in all_cards() {
        assert_eq!(Card::parse(&c.typeable_name()), Ok(c));

        let mut lower_suit = String::from(c.face().token());
        lower_suit.push(c.suit().letter().to_ascii_lowercase());
        assert_eq!(Card::parse(&lower_suit), Ok(c));
    }
}

#[test]
fn ordering_compares_face_then_suit() {
    let six_hearts = card(Face::Six, Suit::Hearts);
    let seven_hearts = card(Face::Seven, Suit::Hearts);
    let six_spades = card(Face::Six, Suit::Spades);

    assert!(seven_hearts > six_hearts);
    assert!(six_hearts < seven_hearts);
    assert!(seven_hearts > six_spades);
    assert!(six_hearts < six_spades);
}

#[test]
fn ordering_is_a_strict_total_order() {
    for a in all_cards() {
        for b in all_cards() {
            let expected = a.face() < b.face() || (a.face() == b.face() && a.suit() < b.suit());
            assert_eq!(a < b, expected);

            let relations = [a < b, a == b, a > b];
            assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        }
    }
}

#[test]
fn equal_cards_hash_identically() {
    let set: HashSet<Card> = all_cards().chain(all_cards()).collect();
    assert_eq!(set.len(), 52);
    assert!(set.contains(&card(Face::Six, Suit::Hearts)));

    let c = card(Face::Six, Suit::Hearts);
    let copy = c;
    assert_eq!(c, copy);
    assert_ne!(c, card(Face::Seven, Suit::Clubs));
}
