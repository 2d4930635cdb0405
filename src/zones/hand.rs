//! A player's private hand.
//!
//! Insertion order is kept for display only; it has no rules meaning.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameError;

/// Cards owned by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Look at a card without removing it.
    pub fn get(&self, index: usize) -> Result<&Card, GameError> {
        self.cards.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.cards.len(),
        })
    }

    /// Remove and return the card at `index`.
    pub fn play_card(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Whether any card in hand can be played on `top`.
    #[must_use]
    pub fn has_playable_card(&self, top: &Card) -> bool {
        self.cards.iter().any(|card| card.matches(top))
    }

    /// Indices of every card that can be played on `top`.
    #[must_use]
    pub fn playable_indices(&self, top: &Card) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(top))
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn test_add_and_play() {
        let mut hand = Hand::new();
        hand.add_card(Card::number(Color::Red, 1));
        hand.add_cards([Card::skip(Color::Blue), Card::wild()]);
        assert_eq!(hand.len(), 3);

        let played = hand.play_card(1).unwrap();
        assert_eq!(played, Card::skip(Color::Blue));
        assert_eq!(hand.cards(), &[Card::number(Color::Red, 1), Card::wild()]);
    }

    #[test]
    fn test_play_invalid_index() {
        let mut hand = Hand::new();
        hand.add_card(Card::number(Color::Red, 1));

        assert_eq!(
            hand.play_card(1),
            Err(GameError::InvalidIndex { index: 1, len: 1 })
        );
        assert_eq!(hand.len(), 1);
        assert!(hand.get(5).is_err());
    }

    #[test]
    fn test_playability() {
        let mut hand = Hand::new();
        hand.add_cards([
            Card::number(Color::Red, 1),
            Card::number(Color::Blue, 7),
            Card::number(Color::Green, 3),
        ]);

        let top = Card::number(Color::Yellow, 7);
        assert!(hand.has_playable_card(&top));
        assert_eq!(hand.playable_indices(&top), vec![1]);

        let top = Card::number(Color::Yellow, 9);
        assert!(!hand.has_playable_card(&top));
        assert!(hand.playable_indices(&top).is_empty());

        hand.add_card(Card::wild());
        assert!(hand.has_playable_card(&top));
        assert_eq!(hand.playable_indices(&top), vec![3]);
    }
}
