//! Special-card effects and their resolution.
//!
//! ## Key Types
//!
//! - `Effect`: atomic effect (skip, reverse, forced draw, color choice)
//! - `EffectBatch`: the effects one card triggers
//! - `EffectResolver`: validates then applies a batch

pub mod effect;
pub mod resolver;

pub use effect::{cards_required, effects_for, needs_color, Effect, EffectBatch};
pub use resolver::{EffectResolver, Penalty, ResolverContext};
