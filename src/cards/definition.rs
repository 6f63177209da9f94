//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card: its kind, cost,
//! complexity, tags, requirements, synergies and ordered effect list.
//! A template's identity is its `name`; two templates with the same name are
//! the same card for every pile lookup and removal.
//!
//! Piles never hold templates directly, only `CardHandle`s into the catalog.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

use crate::effects::Effect;

/// Handle to a template loaded in a `CardCatalog`.
///
/// Handles are arena indices: they are only meaningful for the catalog that
/// issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardHandle(pub u32);

impl CardHandle {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The five card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardKind {
    ControlStructure,
    Function,
    Variable,
    Operator,
    BuiltInFunction,
}

impl CardKind {
    pub const ALL: [CardKind; 5] = [
        CardKind::ControlStructure,
        CardKind::Function,
        CardKind::Variable,
        CardKind::Operator,
        CardKind::BuiltInFunction,
    ];

    /// Type name as written in card requirements.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::ControlStructure => "CONTROL_STRUCTURE",
            CardKind::Function => "FUNCTION",
            CardKind::Variable => "VARIABLE",
            CardKind::Operator => "OPERATOR",
            CardKind::BuiltInFunction => "BUILT_IN_FUNCTION",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use codeclash::cards::{CardKind, CardTemplate};
/// use codeclash::effects::Effect;
///
/// let print = CardTemplate::new("Print Function", CardKind::Function)
///     .with_energy_cost(1)
///     .with_complexity(1)
///     .with_effect(Effect::damage(1));
///
/// assert_eq!(print.energy_cost, 1);
/// assert_eq!(print, CardTemplate::new("Print Function", CardKind::Variable));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: CardKind,

    #[serde(default)]
    pub complexity: i32,

    #[serde(default)]
    pub energy_cost: i32,

    /// Source snippet shown on the card face.
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: FxHashSet<String>,

    /// Tag or type names that some already-played card must carry.
    #[serde(default)]
    pub requirements: Vec<String>,

    #[serde(default)]
    pub synergies: FxHashSet<CardKind>,

    /// Applied in this order.
    pub effects: SmallVec<[Effect; 2]>,
}

impl CardTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            kind,
            complexity: 0,
            energy_cost: 0,
            code: String::new(),
            description: String::new(),
            tags: FxHashSet::default(),
            requirements: Vec::new(),
            synergies: FxHashSet::default(),
            effects: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_complexity(mut self, complexity: i32) -> Self {
        self.complexity = complexity;
        self
    }

    #[must_use]
    pub fn with_energy_cost(mut self, cost: i32) -> Self {
        self.energy_cost = cost;
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
        self
    }

    #[must_use]
    pub fn with_synergy(mut self, kind: CardKind) -> Self {
        self.synergies.insert(kind);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// True if `requirement` names one of this card's tags or its type.
    #[must_use]
    pub fn satisfies(&self, requirement: &str) -> bool {
        self.tags.contains(requirement) || self.kind.as_str() == requirement
    }

    /// Affinity score of `other` from this card's point of view.
    ///
    /// +2 if `other`'s type is in this card's synergies, +1 per shared tag,
    /// +1 if complexities differ by at most one. Not symmetric: synergy sets
    /// are declared per card, so `a.synergy_with(b)` may differ from
    /// `b.synergy_with(a)`.
    #[must_use]
    pub fn synergy_with(&self, other: &CardTemplate) -> i32 {
        let mut value = 0;

        if self.synergies.contains(&other.kind) {
            value += 2;
        }

        value += self.tags.iter().filter(|tag| other.tags.contains(*tag)).count() as i32;

        if (self.complexity - other.complexity).abs() <= 1 {
            value += 1;
        }

        value
    }

    /// Two cards combine when each satisfies all of the other's requirements.
    #[must_use]
    pub fn can_combine_with(&self, other: &CardTemplate) -> bool {
        other.requirements.iter().all(|req| self.satisfies(req))
            && self.requirements.iter().all(|req| other.satisfies(req))
    }
}

impl PartialEq for CardTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CardTemplate {}

impl Hash for CardTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for CardTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, complexity {}, cost {})",
            self.name, self.kind, self.complexity, self.energy_cost
        )
    }
}
