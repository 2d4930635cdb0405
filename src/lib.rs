//! # match-cards
//!
//! Rules engine for a multiplayer color/number matching card game.
//!
//! ## Design Principles
//!
//! 1. **One writer per game**: a `Game` is mutated only through its own
//!    methods, and callers serialize access to it. Games share nothing.
//!
//! 2. **Validate, then apply**: a rejected move never changes state.
//!
//! 3. **Injected randomness**: every shuffle goes through a `Shuffler`
//!    handed in at creation, so any game can be replayed from a seed.
//!
//! ## Modules
//!
//! - `core`: player ids, turn order, RNG, configuration, errors, history
//! - `cards`: card values, the match predicate, the standard deck
//! - `zones`: draw/discard piles and hands
//! - `effects`: skip, reverse, forced draws, color choice
//! - `rules`: the turn state machine and its views
//!
//! ## Example
//!
//! ```
//! use match_cards::{GameBuilder, PlayerId};
//!
//! let mut game = GameBuilder::new().players(["Alice", "Bob"]).build(42).unwrap();
//!
//! let me = game.current_player();
//! match game.legal_plays(me).unwrap().first() {
//!     Some(&index) => {
//!         let color = Some(match_cards::Color::Red);
//!         game.play_turn(me, index, color).unwrap();
//!     }
//!     None => {
//!         game.draw_card(me).unwrap();
//!     }
//! }
//! assert_eq!(game.total_cards(), 108);
//! assert!(game.game_state(Some(PlayerId::new(0))).unwrap().hand.is_some());
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameError, GameRng, GameRngState, Move, MoveRecord, Player, PlayerId,
    ScriptedShuffle, Shuffler, TurnOrder,
};

pub use crate::cards::{
    matches, standard_deck, Card, Color, Rank, STANDARD_DECK_SIZE, WILD_CARDS,
};

pub use crate::zones::{Deck, Drawn, Hand};

pub use crate::effects::{Effect, EffectBatch, EffectResolver, Penalty};

pub use crate::rules::{DrawnCard, Game, GameBuilder, GameStateView, GameStatus, PlayerSummary, TurnResult};
