//! Card model: colors, ranks, the match predicate, and deck composition.
//!
//! ## Key Types
//!
//! - `Color`: four concrete colors plus `Wild`
//! - `Rank`: numbers 0-9 and the action ranks
//! - `Card`: an immutable color/rank pair with `matches`

pub mod card;
pub mod composition;

pub use card::{matches, Card, Color, Rank};
pub use composition::{standard_deck, STANDARD_DECK_SIZE, WILD_CARDS};
