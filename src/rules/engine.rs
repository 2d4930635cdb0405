//! The turn state machine.
//!
//! `Game` is the only thing that mutates a match. It is either awaiting a
//! move from the current player or finished with a winner; drawing is a
//! transition, not a state.
//!
//! ## Turn atomicity
//!
//! Every check (game over, turn, card index, match, chosen color, deck
//! capacity for forced draws) runs before the first mutation, so a
//! rejected move leaves the game untouched.
//!
//! ## Observed rules worth knowing
//!
//! - Reverse flips the direction and the turn still advances once. With
//!   two players the other player moves next.
//! - Wild Draw Four only binds a color unless
//!   `GameConfig::wild_draw_four_penalty` is set.

use im::Vector;
use log::{debug, info};

use crate::cards::{Card, Color};
use crate::core::{
    Direction, GameConfig, GameError, GameRng, GameRngState, Move, MoveRecord, Player, PlayerId,
    Shuffler, TurnOrder,
};
use crate::effects::{effects_for, EffectResolver, Penalty, ResolverContext};
use crate::zones::Deck;

use super::view::{GameStateView, PlayerSummary};

/// Where the state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for this player to play or draw.
    AwaitingMove(PlayerId),
    /// Terminal: this player emptied their hand.
    Finished(PlayerId),
}

/// Outcome of an accepted play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    /// The game goes on.
    Played {
        next_player: PlayerId,
        /// Set when the card forced someone to draw.
        penalty: Option<Penalty>,
    },
    /// The acting player emptied their hand.
    Won { winner: PlayerId, name: String },
}

impl TurnResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, TurnResult::Won { .. })
    }
}

impl std::fmt::Display for TurnResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnResult::Played { .. } => f.write_str("Turn completed successfully"),
            TurnResult::Won { name, .. } => write!(f, "{} wins!", name),
        }
    }
}

/// A drawn card offered back to the player because it can be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Card,
    /// Where the card sits in the player's hand (always the last slot).
    pub hand_index: usize,
}

/// One match in progress.
///
/// Callers must serialize access: the engine assumes one writer per game.
#[derive(Clone, Debug)]
pub struct Game<S = GameRng> {
    config: GameConfig,
    deck: Deck<S>,
    players: Vec<Player>,
    turn: TurnOrder,
    winner: Option<PlayerId>,
    history: Vector<MoveRecord>,
}

impl<S: Shuffler> Game<S> {
    /// Set up a new game: shuffle, deal, and turn over a starter card.
    ///
    /// Hands are dealt one card at a time round-robin. Wild cards turned
    /// over while looking for a starter go to the discard pile beneath it.
    pub fn new<N>(names: N, config: GameConfig, shuffler: S) -> Result<Self, GameError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut players: Vec<Player> = names.into_iter().map(|name| Player::new(name)).collect();
        config.validate(players.len())?;

        let mut deck = Deck::new(shuffler);

        for _ in 0..config.hand_size {
            for player in players.iter_mut() {
                let drawn = deck.draw(1)?;
                player.hand_mut().add_cards(drawn);
            }
        }

        if deck.draw_pile().iter().all(|c| c.color().is_wild()) {
            return Err(GameError::DeckExhausted { requested: 1 });
        }
        loop {
            let drawn = deck.draw(1)?;
            let card = drawn[0];
            deck.play_card(card);
            if !card.color().is_wild() {
                break;
            }
            debug!("Turned over {} as starter, drawing again", card);
        }

        let game = Self {
            turn: TurnOrder::new(players.len()),
            config,
            deck,
            players,
            winner: None,
            history: Vector::new(),
        };

        info!(
            "New game: {} players, starter {}",
            game.players.len(),
            game.deck.top_card()?
        );
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck<S> {
        &self.deck
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A seated player.
    pub fn player(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.players.get(player.index()).ok_or(GameError::InvalidIndex {
            index: player.index(),
            len: self.players.len(),
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.turn.direction()
    }

    pub fn top_card(&self) -> Result<Card, GameError> {
        self.deck.top_card()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Finished(winner),
            None => GameStatus::AwaitingMove(self.turn.current()),
        }
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Cards across both piles and every hand. Constant for a game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    /// Indices of the cards `player` could legally play right now.
    pub fn legal_plays(&self, player: PlayerId) -> Result<Vec<usize>, GameError> {
        let top = self.deck.top_card()?;
        Ok(self.player(player)?.hand().playable_indices(&top))
    }

    // === Moves ===

    /// Play the card at `card_index` from `player`'s hand.
    ///
    /// `chosen_color` is required for wild cards and ignored otherwise.
    pub fn play_turn(
        &mut self,
        player: PlayerId,
        card_index: usize,
        chosen_color: Option<Color>,
    ) -> Result<TurnResult, GameError> {
        self.ensure_turn(player)?;

        let top = self.deck.top_card()?;
        let card = *self.players[player.index()].hand().get(card_index)?;

        if !card.matches(&top) {
            return Err(GameError::CardDoesNotMatch {
                card: card.to_string(),
                top: top.to_string(),
            });
        }

        let batch = effects_for(&card, &self.config);
        EffectResolver::check(&batch, chosen_color, self.deck.available())?;

        // Validation done: from here on the turn is applied in full.
        let mut card = self.players[player.index()].hand_mut().play_card(card_index)?;
        let chosen_color = if card.is_wild() { chosen_color } else { None };

        let mut ctx = ResolverContext {
            turn: &mut self.turn,
            deck: &mut self.deck,
            players: &mut self.players,
            card: &mut card,
            chosen_color,
        };
        let penalty = EffectResolver::resolve(&batch, &mut ctx)?;

        self.deck.play_card(card);
        self.turn.advance();
        self.record(player, Move::Play { card, chosen_color });

        debug!("{} played {} on {}", player, card, top);

        let acting = &self.players[player.index()];
        if acting.hand().is_empty() {
            self.winner = Some(player);
            info!("{} ({}) wins", acting.name(), player);
            return Ok(TurnResult::Won {
                winner: player,
                name: acting.name().to_string(),
            });
        }

        Ok(TurnResult::Played {
            next_player: self.turn.current(),
            penalty,
        })
    }

    /// Draw one card for `player`.
    ///
    /// A drawn card that matches the top card is returned and the turn
    /// stays with the player. Otherwise the turn passes and `None` is
    /// returned.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<Option<DrawnCard>, GameError> {
        self.ensure_turn(player)?;

        let top = self.deck.top_card()?;
        let drawn = self.deck.draw(1)?;
        let card = drawn[0];

        let hand = self.players[player.index()].hand_mut();
        hand.add_card(card);
        let hand_index = hand.len() - 1;

        let playable = card.matches(&top);
        self.record(player, Move::Draw { card, playable });

        if playable {
            debug!("{} drew playable {}", player, card);
            Ok(Some(DrawnCard { card, hand_index }))
        } else {
            let next = self.turn.advance();
            debug!("{} drew {}, turn passes to {}", player, card, next);
            Ok(None)
        }
    }

    /// Read-only projection of the game.
    ///
    /// Every player's name and hand size is public; the hand contents of
    /// `for_player` are included when given.
    pub fn game_state(&self, for_player: Option<PlayerId>) -> Result<GameStateView, GameError> {
        let hand = match for_player {
            Some(id) => Some(self.player(id)?.hand().cards().to_vec()),
            None => None,
        };

        Ok(GameStateView {
            current_player: self.turn.current(),
            top_card: self.deck.top_card()?.to_string(),
            direction: self.turn.direction().label().to_string(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    name: p.name().to_string(),
                    hand_size: p.hand().len(),
                })
                .collect(),
            hand,
            game_over: self.is_over(),
            winner: self.winner,
            draw_pile_size: self.deck.draw_len(),
            discard_pile_size: self.deck.discard_len(),
        })
    }

    // === Internals ===

    fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let current = self.turn.current();
        if player != current {
            return Err(GameError::NotYourTurn { player, current });
        }
        Ok(())
    }

    fn record(&mut self, player: PlayerId, action: Move) {
        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord {
            sequence,
            player,
            action,
        });
    }
}

impl Game<GameRng> {
    /// Checkpoint of the shuffle RNG.
    ///
    /// Restoring it with `GameRng::from_state` gives a shuffler that will
    /// produce the same future replenish shuffles as this game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.deck.shuffler().state()
    }
}
