//! The standard 108-card deck.
//!
//! Per concrete color: one 0, two each of 1-9, two each of Skip, Reverse
//! and Draw Two (25 cards). Plus four Wild and four Wild Draw Four.

use super::card::{Card, Color};

/// Number of cards in the standard deck.
pub const STANDARD_DECK_SIZE: usize = 108;

/// Wild and Wild Draw Four cards combined.
pub const WILD_CARDS: usize = 8;

/// Build the standard deck in a fixed, unshuffled order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);

    for color in Color::CONCRETE {
        cards.push(Card::number(color, 0));

        for n in 1..=9 {
            cards.push(Card::number(color, n));
            cards.push(Card::number(color, n));
        }

        for _ in 0..2 {
            cards.push(Card::skip(color));
            cards.push(Card::reverse(color));
            cards.push(Card::draw_two(color));
        }
    }

    for _ in 0..WILD_CARDS / 2 {
        cards.push(Card::wild());
        cards.push(Card::wild_draw_four());
    }

    debug_assert_eq!(cards.len(), STANDARD_DECK_SIZE);
    cards
}
