//! Classified failures surfaced by the engine.
//!
//! Errors are returned to the caller, never retried internally. A rejected
//! move leaves the game exactly as it was.

use thiserror::Error;

use super::player::PlayerId;

/// Every way an engine operation can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    // === User errors ===

    /// A move was attempted after a player already won.
    #[error("game is already over")]
    GameAlreadyOver,

    /// The acting player is not the one whose turn it is.
    #[error("not your turn: {player} acted but it is {current}'s turn")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    /// A card index (in a hand) or player index (in the table) is out of range.
    #[error("invalid index {index} (length {len})")]
    InvalidIndex { index: usize, len: usize },

    /// The proposed card does not match the top of the discard pile.
    #[error("card {card} doesn't match the top card {top}")]
    CardDoesNotMatch { card: String, top: String },

    /// A wild card was played without a concrete color.
    #[error("must choose a color for a wild card")]
    ColorRequired,

    /// A color/rank combination that no deck contains.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    // === Setup errors ===

    /// Fewer players than the configured minimum.
    #[error("at least {min} players are required, got {got}")]
    InsufficientPlayers { min: usize, got: usize },

    /// More players than the configured maximum.
    #[error("at most {max} players are supported, got {got}")]
    TooManyPlayers { max: usize, got: usize },

    /// The configuration cannot produce a playable deal.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // === Invariant violations ===

    /// A draw was requested with no cards left in either pile.
    #[error("cannot draw {requested} card(s): deck exhausted")]
    DeckExhausted { requested: usize },

    /// The discard pile was read before any card was played on it.
    #[error("discard pile is empty")]
    EmptyDiscardPile,
}

impl GameError {
    /// Whether this error signals a broken engine invariant rather than a
    /// rejected user move.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::DeckExhausted { .. } | GameError::EmptyDiscardPile)
    }
}
