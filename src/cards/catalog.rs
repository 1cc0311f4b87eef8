//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition available to readings.
//! It is built once and then only read. Storage is an `im::Vector`, so
//! handing a catalog to another thread or request is an O(1) clone.

use std::path::Path;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{non_blank, Arcana, CardDefinition, CardId, Keywords};
use crate::error::{ReadingError, Result};

/// Numerology as it appears in catalog documents: `"5"` or `5`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    fn into_text(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

/// One raw catalog record, before validation.
///
/// Every field is optional at this stage so that a missing required field
/// surfaces as `MalformedCatalogEntry` rather than a JSON error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arcana: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub numerology: Option<NumberOrText>,
    #[serde(default)]
    pub astrology: Option<String>,
    #[serde(default)]
    pub upright: Option<String>,
    #[serde(default)]
    pub reversed: Option<String>,
}

impl CatalogEntry {
    /// Validate and convert into a definition with the given ID.
    pub fn into_definition(self, id: CardId) -> Result<CardDefinition> {
        let name = self
            .name
            .and_then(non_blank)
            .ok_or_else(|| ReadingError::malformed(id.to_string(), "name"))?;

        let arcana = self
            .arcana
            .as_deref()
            .and_then(Arcana::parse)
            .ok_or_else(|| ReadingError::malformed(&name, "arcana"))?;

        let upright = self
            .upright
            .and_then(non_blank)
            .ok_or_else(|| ReadingError::malformed(&name, "upright"))?;

        let reversed = self
            .reversed
            .and_then(non_blank)
            .ok_or_else(|| ReadingError::malformed(&name, "reversed"))?;

        Ok(CardDefinition {
            id,
            name,
            arcana,
            keywords: self.keywords.into_iter().collect::<Keywords>(),
            element: self.element.and_then(non_blank),
            numerology: self
                .numerology
                .map(NumberOrText::into_text)
                .and_then(non_blank),
            astrology: self.astrology.and_then(non_blank),
            upright,
            reversed,
        })
    }
}

/// Immutable, ordered set of card definitions.
///
/// ## Example
///
/// ```
/// use tarot_reading::cards::{Arcana, CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// let fool = CardDefinition::new(CardId::default(), "The Fool", Arcana::Major)
///     .with_texts("Beginnings.", "Recklessness.");
///
/// let id = catalog.register(fool).unwrap();
///
/// assert_eq!(catalog.get(id).unwrap().name, "The Fool");
/// assert_eq!(catalog.by_name("The Fool").unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vector<CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, assigning it the next ID.
    ///
    /// The definition's own `id` is overwritten. Rejects invalid
    /// definitions and duplicate names.
    pub fn register(&mut self, mut card: CardDefinition) -> Result<CardId> {
        card.validate()?;
        if self.by_name.contains_key(&card.name) {
            return Err(ReadingError::DuplicateCard(card.name));
        }

        let id = CardId::new(self.cards.len() as u32);
        card.id = id;
        self.by_name.insert(card.name.clone(), id);
        self.cards.push_back(card);
        Ok(id)
    }

    /// Build a catalog from raw entries, in order.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            let id = CardId::new(catalog.cards.len() as u32);
            catalog.register(entry.into_definition(id)?)?;
        }
        tracing::debug!(cards = catalog.len(), "catalog built");
        Ok(catalog)
    }

    /// Parse a JSON array of catalog entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.raw() as usize)
    }

    /// Get a card definition by exact name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    pub fn majors(&self) -> impl Iterator<Item = &CardDefinition> {
        self.find(|c| c.arcana == Arcana::Major)
    }

    pub fn minors(&self) -> impl Iterator<Item = &CardDefinition> {
        self.find(|c| c.arcana == Arcana::Minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "The Magician", "arcana": "Major", "keywords": ["will", "skill"],
         "element": "Air", "numerology": "1", "astrology": "Mercury",
         "upright": "Manifestation.", "reversed": "Manipulation."},
        {"name": "Five of Cups", "arcana": "Minor", "keywords": ["loss"],
         "element": "Water", "numerology": 5,
         "upright": "Grief.", "reversed": "Acceptance."}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = CardCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let magician = catalog.get(CardId::new(0)).unwrap();
        assert_eq!(magician.name, "The Magician");
        assert_eq!(magician.numerology.as_deref(), Some("1"));

        let cups = catalog.by_name("Five of Cups").unwrap();
        assert_eq!(cups.id, CardId::new(1));
        assert_eq!(cups.numerology.as_deref(), Some("5"));
        assert_eq!(cups.astrology, None);
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"[{"name": "The Fool", "arcana": "Major", "upright": "Leap."}]"#;
        let err = CardCatalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ReadingError::MalformedCatalogEntry { field: "reversed", .. }
        ));
    }

    #[test]
    fn test_unknown_arcana() {
        let entry = CatalogEntry {
            name: Some("The Fool".into()),
            arcana: Some("Middle".into()),
            upright: Some("a".into()),
            reversed: Some("b".into()),
            ..CatalogEntry::default()
        };
        let err = entry.into_definition(CardId::new(0)).unwrap_err();
        assert!(matches!(
            err,
            ReadingError::MalformedCatalogEntry { field: "arcana", .. }
        ));
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let entry = CatalogEntry {
            name: Some("Two of Wands".into()),
            arcana: Some("Minor".into()),
            element: Some(String::new()),
            numerology: Some(NumberOrText::Text(String::new())),
            upright: Some("a".into()),
            reversed: Some("b".into()),
            ..CatalogEntry::default()
        };
        let card = entry.into_definition(CardId::new(3)).unwrap();
        assert_eq!(card.id, CardId::new(3));
        assert_eq!(card.element, None);
        assert_eq!(card.numerology, None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut catalog = CardCatalog::new();
        let card = CardDefinition::new(CardId::default(), "The Sun", Arcana::Major)
            .with_texts("Joy.", "Gloom.");

        catalog.register(card.clone()).unwrap();
        let err = catalog.register(card).unwrap_err();
        assert!(matches!(err, ReadingError::DuplicateCard(name) if name == "The Sun"));
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut catalog = CardCatalog::new();
        let a = CardDefinition::new(CardId::new(99), "A", Arcana::Major).with_texts("u", "r");
        let b = CardDefinition::new(CardId::new(99), "B", Arcana::Minor).with_texts("u", "r");

        assert_eq!(catalog.register(a).unwrap(), CardId::new(0));
        assert_eq!(catalog.register(b).unwrap(), CardId::new(1));
        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "B");
    }

    #[test]
    fn test_majors_and_minors() {
        let catalog = CardCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.majors().count(), 1);
        assert_eq!(catalog.minors().next().unwrap().name, "Five of Cups");
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let catalog = CardCatalog::from_json(SAMPLE).unwrap();
        let mut copy = catalog.clone();
        copy.register(
            CardDefinition::new(CardId::default(), "The Moon", Arcana::Major).with_texts("u", "r"),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(copy.len(), 3);
        assert!(catalog.by_name("The Moon").is_none());
    }
}
