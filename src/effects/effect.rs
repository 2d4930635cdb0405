//! Special-card effects.
//!
//! Each played card maps to a small batch of effects, applied in order
//! before the played card reaches the discard pile and before the normal
//! end-of-turn advance.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::core::GameConfig;

/// An atomic effect of playing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Advance the turn pointer once, passing over the next player.
    SkipNext,

    /// Flip the direction of play.
    ReverseDirection,

    /// The next player draws `count` cards and loses their turn.
    ForceDraw { count: usize },

    /// Bind the played wild card to the color its player chose.
    ChooseColor,
}

/// Effects of one play. Never more than two.
pub type EffectBatch = SmallVec<[Effect; 2]>;

/// The effects `card` triggers under `config`.
#[must_use]
pub fn effects_for(card: &Card, config: &GameConfig) -> EffectBatch {
    let mut batch = EffectBatch::new();
    match card.rank() {
        Rank::Number(_) => {}
        Rank::Skip => batch.push(Effect::SkipNext),
        Rank::Reverse => batch.push(Effect::ReverseDirection),
        Rank::DrawTwo => batch.push(Effect::ForceDraw { count: 2 }),
        Rank::Wild => batch.push(Effect::ChooseColor),
        Rank::WildDrawFour => {
            batch.push(Effect::ChooseColor);
            if config.wild_draw_four_penalty {
                batch.push(Effect::ForceDraw { count: 4 });
            }
        }
    }
    batch
}

/// Total cards the batch will pull from the deck.
#[must_use]
pub fn cards_required(batch: &[Effect]) -> usize {
    batch
        .iter()
        .map(|effect| match effect {
            Effect::ForceDraw { count } => *count,
            _ => 0,
        })
        .sum()
}

/// Whether the batch needs a chosen color.
#[must_use]
pub fn needs_color(batch: &[Effect]) -> bool {
    batch.contains(&Effect::ChooseColor)
}
