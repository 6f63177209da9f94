//! Effect definitions.
//!
//! An effect is a `(kind, value, target)` triple declared on a card template.
//! The resolver decides what each pairing of kind and target does; pairings it
//! does not handle are skipped.

use serde::{Deserialize, Serialize};

/// What an effect does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    Damage,
    Heal,
    DrawCard,
    GainEnergy,
    /// Reserved for combination building; resolves to nothing.
    ModifyComplexity,
    /// Reserved; resolves to nothing.
    CopyCard,
    /// Reserved; resolves to nothing.
    TransformCard,
}

/// Whose state an effect mutates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectTarget {
    /// The acting player.
    #[serde(rename = "self")]
    SelfPlayer,
    Opponent,
    /// The combination being built; no current effect mutates it.
    Combination,
}

/// An effect as declared in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    pub value: i32,
    pub target: EffectTarget,
}

impl Effect {
    #[must_use]
    pub const fn new(kind: EffectKind, value: i32, target: EffectTarget) -> Self {
        Self { kind, value, target }
    }

    /// Damage the opponent.
    #[must_use]
    pub const fn damage(amount: i32) -> Self {
        Self::new(EffectKind::Damage, amount, EffectTarget::Opponent)
    }

    /// Heal the acting player.
    #[must_use]
    pub const fn heal(amount: i32) -> Self {
        Self::new(EffectKind::Heal, amount, EffectTarget::SelfPlayer)
    }

    /// Draw cards into the acting player's hand.
    #[must_use]
    pub const fn draw(count: i32) -> Self {
        Self::new(EffectKind::DrawCard, count, EffectTarget::SelfPlayer)
    }

    /// Give the acting player energy.
    #[must_use]
    pub const fn gain_energy(amount: i32) -> Self {
        Self::new(EffectKind::GainEnergy, amount, EffectTarget::SelfPlayer)
    }

    /// Add complexity to the combination.
    #[must_use]
    pub const fn modify_complexity(amount: i32) -> Self {
        Self::new(EffectKind::ModifyComplexity, amount, EffectTarget::Combination)
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({}) -> {:?}", self.kind, self.value, self.target)
    }
}
