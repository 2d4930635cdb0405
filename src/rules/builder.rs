//! Builder for creating a `Game`.

use crate::cards::{standard_deck, Card};
use crate::core::{GameConfig, GameError, GameRng, ScriptedShuffle, Shuffler};

use super::engine::Game;

/// Collects seats and configuration, then deals.
///
/// ```
/// use match_cards::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .players(["Alice", "Bob", "Carol"])
///     .hand_size(5)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.player_count(), 3);
/// assert_eq!(game.players()[2].hand().len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    names: Vec<String>,
    config: GameConfig,
    upcoming: Vec<Card>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one seat.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add seats in turn order.
    pub fn players<N>(mut self, names: N) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn wild_draw_four_penalty(mut self, enabled: bool) -> Self {
        self.config.wild_draw_four_penalty = enabled;
        self
    }

    /// Cards to stack right under the starter for a rigged deal, first
    /// listed drawn first.
    pub fn upcoming_draws(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.upcoming.extend(cards);
        self
    }

    /// Deal with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<Game<GameRng>, GameError> {
        self.build_with_shuffler(GameRng::new(seed))
    }

    /// Deal with any shuffle source.
    pub fn build_with_shuffler<S: Shuffler>(self, shuffler: S) -> Result<Game<S>, GameError> {
        Game::new(self.names, self.config, shuffler)
    }

    /// Deal exactly `hands` (one per seat, in seat order) and turn over
    /// `starter`, followed by any `upcoming_draws`. The rest of the deck
    /// stays in its unshuffled order.
    ///
    /// Every hand must hold `hand_size` cards, and the cards must exist in
    /// the standard deck in the requested quantities.
    pub fn build_rigged(
        self,
        hands: &[Vec<Card>],
        starter: Card,
    ) -> Result<Game<ScriptedShuffle>, GameError> {
        if hands.len() != self.names.len() {
            return Err(GameError::InvalidConfig(format!(
                "{} rigged hands for {} players",
                hands.len(),
                self.names.len()
            )));
        }
        if let Some(bad) = hands.iter().find(|h| h.len() != self.config.hand_size) {
            return Err(GameError::InvalidConfig(format!(
                "rigged hand has {} cards, hand size is {}",
                bad.len(),
                self.config.hand_size
            )));
        }

        // Hands are dealt round-robin, one card per seat per round.
        let mut script =
            Vec::with_capacity(hands.len() * self.config.hand_size + 1 + self.upcoming.len());
        for round in 0..self.config.hand_size {
            script.extend(hands.iter().map(|h| h[round]));
        }
        script.push(starter);
        script.extend(self.upcoming.iter().copied());

        let mut pool = standard_deck();
        for card in &script {
            match pool.iter().position(|c| c == card) {
                Some(pos) => {
                    pool.swap_remove(pos);
                }
                None => {
                    return Err(GameError::InvalidConfig(format!(
                        "not enough {} in the deck",
                        card
                    )))
                }
            }
        }

        self.build_with_shuffler(ScriptedShuffle::new(script))
    }
}
