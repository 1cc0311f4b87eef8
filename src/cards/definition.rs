//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a tarot card.
//! For example, "The Magician" is Major Arcana, numbered 1, and ruled by
//! Mercury - these are part of the definition.
//!
//! Per-draw data (orientation) is stored separately in `DrawnCard`.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::error::{ReadingError, Result};

/// Identifier for a card definition: its position in the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Top-level card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    /// Parse the catalog spelling ("Major" / "Minor").
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Major" => Some(Arcana::Major),
            "Minor" => Some(Arcana::Minor),
            _ => None,
        }
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arcana::Major => f.write_str("Major"),
            Arcana::Minor => f.write_str("Minor"),
        }
    }
}

/// Keyword list. Most cards carry a handful of keywords.
pub type Keywords = SmallVec<[String; 4]>;

/// Suit encoded in a card name: the token following the first "of".
///
/// "Three of Cups" yields `Some("Cups")`. Returns `None` when the name has
/// no standalone "of" token or "of" is the last token.
#[must_use]
pub fn name_suit(name: &str) -> Option<&str> {
    let mut tokens = name.split_whitespace();
    tokens.by_ref().find(|t| *t == "of")?;
    tokens.next()
}

/// Static card definition.
///
/// Optional attributes (`element`, `numerology`, `astrology`) are `None`
/// when the catalog does not supply them; absence is never an error. The
/// fields are public, so readers go through the accessors of the same name,
/// which also treat a blank value as absent.
///
/// ## Example
///
/// ```
/// use tarot_reading::cards::{Arcana, CardDefinition, CardId};
///
/// let cups = CardDefinition::new(CardId::new(1), "Three of Cups", Arcana::Minor)
///     .with_keywords(["celebration", "friendship"])
///     .with_element("Water")
///     .with_numerology("3")
///     .with_texts("Joyful gatherings.", "Overindulgence.");
///
/// assert_eq!(cups.suit(), Some("Cups"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Position in the catalog. Drawn-card records may omit it.
    #[serde(default)]
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub arcana: Arcana,

    #[serde(default)]
    pub keywords: Keywords,

    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// String-encoded number, compared verbatim.
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub numerology: Option<String>,

    /// Comma-separated astrological correspondences.
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub astrology: Option<String>,

    /// Meaning when drawn upright.
    pub upright: String,

    /// Meaning when drawn reversed.
    pub reversed: String,
}

impl CardDefinition {
    /// Create a new card definition with no attributes or texts.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, arcana: Arcana) -> Self {
        Self {
            id,
            name: name.into(),
            arcana,
            keywords: Keywords::new(),
            element: None,
            numerology: None,
            astrology: None,
            upright: String::new(),
            reversed: String::new(),
        }
    }

    /// Set keywords (builder pattern).
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = non_blank(element.into());
        self
    }

    #[must_use]
    pub fn with_numerology(mut self, number: impl Into<String>) -> Self {
        self.numerology = non_blank(number.into());
        self
    }

    #[must_use]
    pub fn with_astrology(mut self, astrology: impl Into<String>) -> Self {
        self.astrology = non_blank(astrology.into());
        self
    }

    /// Set the upright and reversed meanings.
    #[must_use]
    pub fn with_texts(mut self, upright: impl Into<String>, reversed: impl Into<String>) -> Self {
        self.upright = upright.into();
        self.reversed = reversed.into();
        self
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    #[must_use]
    pub fn element(&self) -> Option<&str> {
        present(&self.element)
    }

    #[must_use]
    pub fn numerology(&self) -> Option<&str> {
        present(&self.numerology)
    }

    /// Raw astrology string; see [`astrology_tokens`](Self::astrology_tokens).
    #[must_use]
    pub fn astrology(&self) -> Option<&str> {
        present(&self.astrology)
    }

    /// Suit of a Minor Arcana card, derived from its name.
    ///
    /// Major Arcana cards never have a suit, even when their name contains
    /// "of" ("Wheel of Fortune").
    #[must_use]
    pub fn suit(&self) -> Option<&str> {
        match self.arcana {
            Arcana::Minor => name_suit(&self.name),
            Arcana::Major => None,
        }
    }

    /// Astrology tokens: comma-split, trimmed, empty tokens dropped.
    pub fn astrology_tokens(&self) -> impl Iterator<Item = &str> {
        self.astrology()
            .into_iter()
            .flat_map(|a| a.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Check the required fields are present.
    ///
    /// Name and both meaning texts must be non-blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ReadingError::malformed(format!("{}", self.id), "name"));
        }
        if self.upright.trim().is_empty() {
            return Err(ReadingError::malformed(&self.name, "upright"));
        }
        if self.reversed.trim().is_empty() {
            return Err(ReadingError::malformed(&self.name, "reversed"));
        }
        Ok(())
    }
}

/// Blank optional values are treated as absent.
pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}
