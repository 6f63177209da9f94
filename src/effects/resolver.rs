//! Effect resolution - applying a played card to the two players involved.
//!
//! Resolution pays the card's energy cost first, then applies each declared
//! effect in order. Effects are dispatched on their `(kind, target)` pairing,
//! so a pairing with no defined behavior is skipped rather than guessed at.

use smallvec::SmallVec;

use crate::cards::{CardHandle, CardTemplate};
use crate::core::{GameLogger, PlayerState};
use crate::zones::Deck;

use super::{Effect, EffectKind, EffectTarget};

/// Shared match resources the resolver may touch.
pub struct ResolverContext<'a> {
    /// Draw pile for `DRAW_CARD`.
    pub deck: &'a mut Deck,
    pub logger: &'a GameLogger,
}

impl<'a> ResolverContext<'a> {
    pub fn new(deck: &'a mut Deck, logger: &'a GameLogger) -> Self {
        Self { deck, logger }
    }
}

/// Result of resolving a single effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect mutated player state.
    Applied,
    /// Effect kind is reserved and resolves to nothing.
    Reserved,
    /// No behavior for this kind and target pairing.
    Skipped,
}

/// Everything that happened while resolving one card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Energy actually deducted; less than the cost when the player ran short.
    pub energy_spent: i32,
    /// One entry per declared effect, in declaration order.
    pub results: SmallVec<[ResolveResult; 2]>,
    /// Cards drawn into the actor's hand.
    pub drawn: Vec<CardHandle>,
}

impl Resolution {
    /// Number of effects that mutated state.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| **r == ResolveResult::Applied)
            .count()
    }
}

/// Applies card effects to player state.
pub struct EffectResolver;

impl EffectResolver {
    /// Pay for `card` and apply all of its effects.
    pub fn apply_card_effect(
        actor: &mut PlayerState,
        opponent: &mut PlayerState,
        card: &CardTemplate,
        context: &mut ResolverContext<'_>,
    ) -> Resolution {
        let before = actor.energy();
        actor.spend_energy(card.energy_cost);

        let mut resolution = Resolution {
            energy_spent: before - actor.energy(),
            ..Resolution::default()
        };

        for effect in &card.effects {
            let result =
                Self::resolve_single(actor, opponent, effect, context, &mut resolution.drawn);
            context.logger.verbose(
                "effect",
                format!("{} {}: {} ({:?})", actor.name(), card.name, effect, result),
            );
            resolution.results.push(result);
        }

        resolution
    }

    /// Apply one effect. Cards drawn are appended to `drawn`.
    pub fn resolve_single(
        actor: &mut PlayerState,
        opponent: &mut PlayerState,
        effect: &Effect,
        context: &mut ResolverContext<'_>,
        drawn: &mut Vec<CardHandle>,
    ) -> ResolveResult {
        match (effect.kind, effect.target) {
            (EffectKind::Damage, EffectTarget::Opponent) => {
                opponent.take_damage(effect.value);
                ResolveResult::Applied
            }
            (EffectKind::Heal, EffectTarget::SelfPlayer) => {
                actor.heal(effect.value);
                ResolveResult::Applied
            }
            (EffectKind::DrawCard, EffectTarget::SelfPlayer) => {
                for _ in 0..effect.value.max(0) {
                    drawn.push(context.deck.deal_to(actor, context.logger));
                }
                ResolveResult::Applied
            }
            (EffectKind::GainEnergy, EffectTarget::SelfPlayer) => {
                actor.gain_energy(effect.value);
                ResolveResult::Applied
            }
            (EffectKind::ModifyComplexity | EffectKind::TransformCard, _)
            | (EffectKind::CopyCard, EffectTarget::SelfPlayer) => ResolveResult::Reserved,
            _ => ResolveResult::Skipped,
        }
    }
}
