//! Core engine types: players, turn order, RNG, configuration, errors.
//!
//! These are the building blocks the zones and rules layers are made of.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod turn;

pub use action::{Move, MoveRecord};
pub use config::{GameConfig, DEFAULT_HAND_SIZE, MIN_PLAYERS};
pub use error::GameError;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, ScriptedShuffle, Shuffler};
pub use turn::{Direction, TurnOrder};
