//! The game engine.
//!
//! - `Game`: turn state machine (play, draw, win detection)
//! - `GameBuilder`: seats, configuration, and dealing
//! - `GameStateView`: read-only snapshot for hosts

pub mod builder;
pub mod engine;
pub mod view;

pub use builder::GameBuilder;
pub use engine::{DrawnCard, Game, GameStatus, TurnResult};
pub use view::{GameStateView, PlayerSummary};
