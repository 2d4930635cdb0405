//! Effect validation and resolution.
//!
//! `EffectResolver::check` runs before any mutation; once it passes,
//! `resolve` cannot fail for rules reasons. This keeps a turn atomic.

use log::debug;

use crate::cards::{Card, Color};
use crate::core::{GameError, Player, PlayerId, Shuffler, TurnOrder};
use crate::zones::Deck;

use super::effect::{cards_required, needs_color, Effect};

/// Mutable view of the game handed to the resolver for one play.
pub struct ResolverContext<'a, S> {
    pub turn: &'a mut TurnOrder,
    pub deck: &'a mut Deck<S>,
    pub players: &'a mut [Player],
    /// The card being played. Still out of both hand and discard pile.
    pub card: &'a mut Card,
    pub chosen_color: Option<Color>,
}

/// What a forced draw did, for the turn report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Penalty {
    pub player: PlayerId,
    pub cards: usize,
}

/// Applies effect batches to a game.
pub struct EffectResolver;

impl EffectResolver {
    /// Validate a batch without touching the game.
    ///
    /// A wild needs a concrete chosen color, and every forced draw must be
    /// satisfiable by the deck.
    pub fn check(
        batch: &[Effect],
        chosen_color: Option<Color>,
        available: usize,
    ) -> Result<(), GameError> {
        if needs_color(batch) && !chosen_color.is_some_and(|c| !c.is_wild()) {
            return Err(GameError::ColorRequired);
        }
        let required = cards_required(batch);
        if required > available {
            return Err(GameError::DeckExhausted { requested: required });
        }
        Ok(())
    }

    /// Apply every effect in order.
    pub fn resolve<S: Shuffler>(
        batch: &[Effect],
        ctx: &mut ResolverContext<'_, S>,
    ) -> Result<Option<Penalty>, GameError> {
        let mut penalty = None;
        for effect in batch {
            if let Some(p) = Self::resolve_one(*effect, ctx)? {
                penalty = Some(p);
            }
        }
        Ok(penalty)
    }

    fn resolve_one<S: Shuffler>(
        effect: Effect,
        ctx: &mut ResolverContext<'_, S>,
    ) -> Result<Option<Penalty>, GameError> {
        match effect {
            Effect::SkipNext => {
                let skipped = ctx.turn.advance();
                debug!("Skip: {} loses their turn", skipped);
                Ok(None)
            }
            Effect::ReverseDirection => {
                ctx.turn.reverse();
                debug!("Reverse: play is now {}", ctx.turn.direction());
                Ok(None)
            }
            Effect::ForceDraw { count } => {
                let victim = ctx.turn.peek_next();
                let drawn = ctx.deck.draw(count)?;
                ctx.players[victim.index()].hand_mut().add_cards(drawn);
                ctx.turn.advance();
                debug!("{} draws {} and loses their turn", victim, count);
                Ok(Some(Penalty {
                    player: victim,
                    cards: count,
                }))
            }
            Effect::ChooseColor => {
                let color = ctx.chosen_color.ok_or(GameError::ColorRequired)?;
                ctx.card.bind_color(color);
                debug!("Wild bound to {}", color);
                Ok(None)
            }
        }
    }
}
