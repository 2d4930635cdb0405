//! Draw pile and discard pile.
//!
//! The `Deck` owns both shared piles and the shuffler. Cards move between
//! piles (and hands) by value; a card is in exactly one place at a time.
//!
//! ## Replenishment
//!
//! When a draw finds the draw pile empty, everything in the discard pile
//! except its top card is moved back, unbound (wilds lose their chosen
//! color) and shuffled. The top card stays where it is, so the card new
//! plays must match is never lost.

use log::{debug, warn};
use smallvec::SmallVec;

use crate::cards::{standard_deck, Card};
use crate::core::{GameError, Shuffler};

/// Cards returned by a single draw. Draws are 1, 2 or 4 cards in practice.
pub type Drawn = SmallVec<[Card; 4]>;

/// The shared draw and discard piles.
///
/// Both piles are ordered with their top at the end of the vec.
#[derive(Clone, Debug)]
pub struct Deck<S> {
    draw: Vec<Card>,
    discard: Vec<Card>,
    shuffler: S,
}

impl<S: Shuffler> Deck<S> {
    /// Build the standard 108-card deck and shuffle it.
    pub fn new(shuffler: S) -> Self {
        Self::from_cards(standard_deck(), shuffler)
    }

    /// Build a deck from an arbitrary set of cards and shuffle it.
    pub fn from_cards(cards: Vec<Card>, mut shuffler: S) -> Self {
        let mut draw = cards;
        shuffler.shuffle(&mut draw);
        Self {
            draw,
            discard: Vec::new(),
            shuffler,
        }
    }

    // === Piles ===

    /// Cards left to draw, top last.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw
    }

    /// Played cards, top last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// The shuffle source used for replenishment.
    #[must_use]
    pub fn shuffler(&self) -> &S {
        &self.shuffler
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards held by the deck across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many cards a draw could deliver right now, counting the
    /// discard pile minus its top.
    #[must_use]
    pub fn available(&self) -> usize {
        self.draw.len() + self.discard.len().saturating_sub(1)
    }

    // === Operations ===

    /// Draw `count` cards from the top of the draw pile.
    ///
    /// Replenishes from the discard pile whenever the draw pile runs dry.
    /// Fails with `DeckExhausted` before touching either pile if `count`
    /// cards cannot be produced.
    pub fn draw(&mut self, count: usize) -> Result<Drawn, GameError> {
        if count > self.available() {
            warn!(
                "Cannot draw {} card(s): {} in draw pile, {} in discard pile",
                count,
                self.draw.len(),
                self.discard.len()
            );
            return Err(GameError::DeckExhausted { requested: count });
        }

        let mut drawn = Drawn::new();
        for _ in 0..count {
            if self.draw.is_empty() {
                self.replenish()?;
            }
            let card = self
                .draw
                .pop()
                .ok_or(GameError::DeckExhausted { requested: count })?;
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Recycle the discard pile (minus its top card) into the draw pile
    /// and shuffle.
    pub fn replenish(&mut self) -> Result<(), GameError> {
        let top = self
            .discard
            .pop()
            .ok_or(GameError::DeckExhausted { requested: 0 })?;

        let mut buried = std::mem::replace(&mut self.discard, vec![top]);
        for card in &mut buried {
            card.unbind();
        }

        warn!(
            "Draw pile empty: recycling {} discarded card(s), keeping {} on top",
            buried.len(),
            top
        );

        self.draw.extend(buried);
        self.shuffler.shuffle(&mut self.draw);
        Ok(())
    }

    /// Place a card on the discard pile. It becomes the new top card.
    pub fn play_card(&mut self, card: Card) {
        debug!("Discard pile top is now {}", card);
        self.discard.push(card);
    }

    /// The card new plays must match.
    pub fn top_card(&self) -> Result<Card, GameError> {
        self.discard.last().copied().ok_or(GameError::EmptyDiscardPile)
    }
}
