//! Effect system for card abilities.
//!
//! - `Effect`: A `(kind, value, target)` triple declared on a card
//! - `EffectResolver`: Pays a card's cost and applies its effects
//!
//! Only damage to the opponent, healing, drawing and energy gain for the actor
//! mutate state. The remaining kinds are reserved and resolve to nothing.

mod effect;
mod resolver;

pub use effect::{Effect, EffectKind, EffectTarget};
pub use resolver::{EffectResolver, ResolveResult, Resolution, ResolverContext};
