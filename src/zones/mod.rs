//! Card locations: the shared draw/discard piles and per-player hands.
//!
//! A card lives in exactly one zone at a time and moves by value.

pub mod deck;
pub mod hand;

pub use deck::{Deck, Drawn};
pub use hand::Hand;
