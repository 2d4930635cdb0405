//! Read-only projections handed to hosts.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// What everyone at the table can see about a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub hand_size: usize,
}

impl std::fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand_size)
    }
}

/// Snapshot of a game, optionally including one player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub current_player: PlayerId,
    /// Display form of the top of the discard pile.
    pub top_card: String,
    /// `"clockwise"` or `"counter-clockwise"`.
    pub direction: String,
    pub players: Vec<PlayerSummary>,
    /// Only present when the view was requested for a specific player.
    pub hand: Option<Vec<Card>>,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
}
