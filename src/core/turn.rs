//! Turn pointer and direction of play.
//!
//! `TurnOrder` is the only place seat arithmetic happens. Advancing moves
//! the pointer one seat in the current direction, wrapping around the table.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Rotation sense applied when the turn pointer advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Seat indices increase (+1).
    #[default]
    Clockwise,
    /// Seat indices decrease (-1).
    CounterClockwise,
}

impl Direction {
    /// Signed step applied to the seat index.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counter-clockwise",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whose move it is and which way play rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    player_count: usize,
    current: PlayerId,
    direction: Direction,
}

impl TurnOrder {
    /// Start at seat 0 moving clockwise.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            current: PlayerId::new(0),
            direction: Direction::Clockwise,
        }
    }

    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The seat that would move after the current one, without moving.
    #[must_use]
    pub fn peek_next(&self) -> PlayerId {
        let n = self.player_count as isize;
        let next = (self.current.index() as isize + self.direction.step()).rem_euclid(n);
        PlayerId::new(next as u8)
    }

    /// Move the pointer one seat in the current direction.
    pub fn advance(&mut self) -> PlayerId {
        self.current = self.peek_next();
        self.current
    }

    /// Flip the direction of play. The pointer does not move.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}
