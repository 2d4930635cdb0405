//! Game configuration.
//!
//! Hosts tune the deal and the optional rule variants here; the card
//! composition itself is fixed (see `cards::standard_deck`).

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::{STANDARD_DECK_SIZE, WILD_CARDS};

/// Cards dealt to each player at setup.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Smallest table the turn rules make sense for.
pub const MIN_PLAYERS: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player at setup.
    pub hand_size: usize,

    /// Minimum table size. Never below 2.
    pub min_players: usize,

    /// Maximum table size.
    pub max_players: usize,

    /// When set, a Wild Draw Four also makes the next player draw four
    /// and lose their turn. Off by default: the base rules only bind a color.
    pub wild_draw_four_penalty: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            min_players: MIN_PLAYERS,
            max_players: 10,
            wild_draw_four_penalty: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the allowed table size range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Enable or disable the Wild Draw Four penalty.
    #[must_use]
    pub fn with_wild_draw_four_penalty(mut self, enabled: bool) -> Self {
        self.wild_draw_four_penalty = enabled;
        self
    }

    /// Check that a game with `player_count` players can be dealt.
    ///
    /// The deal needs every hand plus one starter card out of the deck,
    /// with room left for every wild to be turned over before a colored
    /// starter shows up.
    pub fn validate(&self, player_count: usize) -> Result<(), GameError> {
        if self.min_players < MIN_PLAYERS || self.min_players > self.max_players {
            return Err(GameError::InvalidConfig(format!(
                "player range {}..={} must start at {} or more",
                self.min_players, self.max_players, MIN_PLAYERS
            )));
        }
        if self.max_players > u8::MAX as usize {
            return Err(GameError::InvalidConfig(format!(
                "at most {} seats are addressable",
                u8::MAX
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be at least 1".into()));
        }
        if player_count < self.min_players {
            return Err(GameError::InsufficientPlayers {
                min: self.min_players,
                got: player_count,
            });
        }
        if player_count > self.max_players {
            return Err(GameError::TooManyPlayers {
                max: self.max_players,
                got: player_count,
            });
        }
        let needed = player_count
            .checked_mul(self.hand_size)
            .and_then(|dealt| dealt.checked_add(1 + WILD_CARDS));
        if !needed.is_some_and(|n| n <= STANDARD_DECK_SIZE) {
            return Err(GameError::InvalidConfig(format!(
                "{} hands of {} cards do not leave a starter in a {}-card deck",
                player_count, self.hand_size, STANDARD_DECK_SIZE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.min_players, 2);
        assert!(!config.wild_draw_four_penalty);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_hand_size(3)
            .with_player_range(3, 6)
            .with_wild_draw_four_penalty(true);

        assert_eq!(config.hand_size, 3);
        assert_eq!(config.min_players, 3);
        assert_eq!(config.max_players, 6);
        assert!(config.wild_draw_four_penalty);
    }

    #[test]
    fn test_validate_player_counts() {
        let config = GameConfig::new();

        assert_eq!(
            config.validate(1),
            Err(GameError::InsufficientPlayers { min: 2, got: 1 })
        );
        assert!(config.validate(2).is_ok());
        assert!(config.validate(10).is_ok());
        assert_eq!(
            config.validate(11),
            Err(GameError::TooManyPlayers { max: 10, got: 11 })
        );
    }

    #[test]
    fn test_validate_deal_fits_deck() {
        // 14 * 7 + 1 + 8 = 107 fits, 15 * 7 + 1 + 8 = 114 does not
        let config = GameConfig::new().with_player_range(2, 20);
        assert!(config.validate(14).is_ok());
        assert!(matches!(config.validate(15), Err(GameError::InvalidConfig(_))));

        // 2 * 49 + 1 + 8 = 107 is the largest two-player hand
        let big_hands = GameConfig::new().with_hand_size(49);
        assert!(big_hands.validate(2).is_ok());
        assert!(matches!(
            big_hands.with_hand_size(50).validate(2),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_huge_hand_size() {
        let config = GameConfig::new().with_hand_size(usize::MAX / 2 + 1);
        assert!(matches!(config.validate(2), Err(GameError::InvalidConfig(_))));
        assert!(matches!(config.validate(3), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let zero_hand = GameConfig::new().with_hand_size(0);
        assert!(matches!(zero_hand.validate(2), Err(GameError::InvalidConfig(_))));

        let solo = GameConfig::new().with_player_range(1, 4);
        assert!(matches!(solo.validate(2), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_serde() {
        let config = GameConfig::new().with_wild_draw_four_penalty(true);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
