//! Card catalog: the arena of loaded templates.
//!
//! The `CardCatalog` owns every template for the lifetime of the process and
//! hands out `CardHandle`s into it. It is validated once, at construction;
//! a catalog that exists is well-formed.

use rustc_hash::FxHashMap;
use std::ops::Index;

use super::definition::{CardHandle, CardKind, CardTemplate};
use crate::error::{EngineError, Result};

/// Immutable, validated set of card templates.
///
/// ## Example
///
/// ```
/// use codeclash::cards::{CardCatalog, CardKind, CardTemplate};
/// use codeclash::effects::Effect;
///
/// let catalog = CardCatalog::new(vec![
///     CardTemplate::new("Print Function", CardKind::Function)
///         .with_energy_cost(1)
///         .with_effect(Effect::damage(1)),
/// ])
/// .unwrap();
///
/// let handle = catalog.handle_of("Print Function").unwrap();
/// assert_eq!(catalog[handle].energy_cost, 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<CardTemplate>,
    by_name: FxHashMap<String, CardHandle>,
}

impl CardCatalog {
    /// Build a catalog, rejecting malformed content.
    ///
    /// Fails if there are no templates, a name is empty or repeated, or a cost
    /// or complexity is negative.
    pub fn new(templates: Vec<CardTemplate>) -> Result<Self> {
        if templates.is_empty() {
            return Err(EngineError::MalformedCatalog("catalog has no cards".to_string()));
        }

        let mut by_name = FxHashMap::default();
        for (index, card) in templates.iter().enumerate() {
            if card.name.trim().is_empty() {
                return Err(EngineError::MalformedCatalog(format!(
                    "card at position {} has no name",
                    index
                )));
            }
            if card.energy_cost < 0 || card.complexity < 0 {
                return Err(EngineError::MalformedCatalog(format!(
                    "{} has a negative cost or complexity",
                    card.name
                )));
            }
            if by_name
                .insert(card.name.clone(), CardHandle::new(index as u32))
                .is_some()
            {
                return Err(EngineError::MalformedCatalog(format!(
                    "duplicate card name {}",
                    card.name
                )));
            }
        }

        Ok(Self {
            cards: templates,
            by_name,
        })
    }

    /// Load a catalog from a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self> {
        let templates: Vec<CardTemplate> = serde_json::from_str(json)
            .map_err(|e| EngineError::MalformedCatalog(e.to_string()))?;
        Self::new(templates)
    }

    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&CardTemplate> {
        self.cards.get(handle.index())
    }

    /// Look up a template handle by exact name.
    #[must_use]
    pub fn handle_of(&self, name: &str) -> Option<CardHandle> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardTemplate> {
        self.handle_of(name).map(|h| &self[h])
    }

    /// All handles, in catalog order.
    pub fn handles(&self) -> impl Iterator<Item = CardHandle> {
        (0..self.cards.len() as u32).map(CardHandle::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardHandle, &CardTemplate)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardHandle::new(i as u32), card))
    }

    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardTemplate> {
        self.cards.iter().filter(move |c| c.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Index<CardHandle> for CardCatalog {
    type Output = CardTemplate;

    /// Panics on a handle from another catalog.
    fn index(&self, handle: CardHandle) -> &Self::Output {
        &self.cards[handle.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    fn card(name: &str) -> CardTemplate {
        CardTemplate::new(name, CardKind::Function).with_effect(Effect::damage(1))
    }

    #[test]
    fn test_lookup() {
        let catalog = CardCatalog::new(vec![card("A"), card("B")]).unwrap();

        let b = catalog.handle_of("B").unwrap();
        assert_eq!(b, CardHandle::new(1));
        assert_eq!(catalog[b].name, "B");
        assert_eq!(catalog.by_name("A").map(|c| c.name.as_str()), Some("A"));
        assert!(catalog.handle_of("b").is_none());
        assert!(catalog.get(CardHandle::new(7)).is_none());
    }

    #[test]
    fn test_handles_in_order() {
        let catalog = CardCatalog::new(vec![card("A"), card("B"), card("C")]).unwrap();
        let names: Vec<_> = catalog.handles().map(|h| catalog[h].name.clone()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(catalog.iter().count(), 3);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            CardCatalog::new(Vec::new()),
            Err(EngineError::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = CardCatalog::new(vec![card("A"), card("A")]);
        assert!(matches!(result, Err(EngineError::MalformedCatalog(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_rejects_negative_cost() {
        let result = CardCatalog::new(vec![card("A").with_energy_cost(-1)]);
        assert!(matches!(result, Err(EngineError::MalformedCatalog(_))));
    }

    #[test]
    fn test_rejects_blank_name() {
        let result = CardCatalog::new(vec![card("  ")]);
        assert!(matches!(result, Err(EngineError::MalformedCatalog(_))));
    }

    #[test]
    fn test_find_by_kind() {
        let catalog = CardCatalog::new(vec![
            card("A"),
            CardTemplate::new("V", CardKind::Variable),
            card("B"),
        ])
        .unwrap();
        assert_eq!(catalog.find_by_kind(CardKind::Function).count(), 2);
        assert_eq!(catalog.find_by_kind(CardKind::Operator).count(), 0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "name": "Print Function", "type": "FUNCTION", "energy_cost": 1,
              "effects": [ { "type": "DAMAGE", "value": 1, "target": "opponent" } ] }
        ]"#;
        let catalog = CardCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);

        let missing_effects = r#"[ { "name": "X", "type": "FUNCTION" } ]"#;
        assert!(matches!(
            CardCatalog::from_json(missing_effects),
            Err(EngineError::MalformedCatalog(_))
        ));
    }
}
