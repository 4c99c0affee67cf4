//! CLI cards example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardpile::{Card, Face, Pile, Suit};

fn main() {
    println!("Cards CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut deck = Pile::deck();
    println!("\nDeck: {deck}");
    deck.shuffle_seeded(seed);
    println!("\nShuffled (seed {seed}): {deck}");

    let hands = deck.deal(3, 5);
    for (i, hand) in hands.iter().enumerate() {
        println!("Hand {}: {hand}", i + 1);
    }
    println!("{} cards left in the deck", deck.len());

    deck.sort();
    println!("\nSorted: {deck}");

    let mut pile = Pile::from_cards(vec![
        Card::new(Face::Ace, Suit::Hearts),
        Card::new(Face::Five, Suit::Clubs),
    ]);
    let other = Pile::from_cards(vec![Card::new(Face::Five, Suit::Clubs)]);
    println!("\nPile: {pile}");
    println!("Pile - [{other}]: {}", &pile - &other);

    pile.insert_top(Card::new(Face::Jack, Suit::Spades));
    println!("After insert: {pile}");
    if let Ok(card) = pile.peek() {
        println!("Top card: {card}");
    }
    if let Ok(card) = pile.pop() {
        println!("Popped {card}, left: {pile}");
    }

    if let Some(card) = prompt_card("\nEnter the typeable name of a card (e.g. 10H, empty to quit): ") {
        println!("{card} (typeable name {})", card.typeable_name());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_card(prompt: &str) -> Option<Card> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() {
            return None;
        }
        match input.parse::<Card>() {
            Ok(card) => return Some(card),
            Err(err) => println!("Invalid card: {err}"),
        }
    }
}
