//! Move history records.
//!
//! Every accepted move is appended to the game's history. Rejected moves
//! never appear: a record means the state changed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Color};

/// An accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// A card went from the player's hand to the discard pile.
    /// `chosen_color` is set for wild cards only.
    Play {
        card: Card,
        chosen_color: Option<Color>,
    },
    /// The player drew one card. `playable` records whether it was offered
    /// back (turn not advanced).
    Draw { card: Card, playable: bool },
}

/// Historical record of a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the game's move sequence, starting at 0.
    pub sequence: u32,
    /// Who moved.
    pub player: PlayerId,
    /// What they did.
    pub action: Move,
}

impl MoveRecord {
    /// Whether this record is a play (as opposed to a draw).
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self.action, Move::Play { .. })
    }
}
