//! Drawn cards - per-reading card state.
//!
//! `DrawnCard` is an owned copy of a catalog definition plus the
//! orientation assigned at draw time. Because the definition is copied,
//! changing a drawn card's orientation never touches the catalog or any
//! other reading's cards.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;

/// Orientation assigned to a drawn card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

impl Orientation {
    /// The opposite orientation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Upright => Orientation::Reversed,
            Orientation::Reversed => Orientation::Upright,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Upright => f.write_str("Upright"),
            Orientation::Reversed => f.write_str("Reversed"),
        }
    }
}

/// A card drawn for one reading.
///
/// Derefs to its `CardDefinition` for read access to catalog fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    #[serde(flatten)]
    card: CardDefinition,

    pub orientation: Orientation,
}

impl DrawnCard {
    /// Take ownership of a definition and give it an orientation.
    #[must_use]
    pub fn new(card: CardDefinition, orientation: Orientation) -> Self {
        Self { card, orientation }
    }

    /// Copy a catalog definition into a new drawn card.
    #[must_use]
    pub fn from_definition(card: &CardDefinition, orientation: Orientation) -> Self {
        Self::new(card.clone(), orientation)
    }

    /// The card's own copy of its definition.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.card
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }

    /// Meaning text for the current orientation.
    #[must_use]
    pub fn meaning(&self) -> &str {
        match self.orientation {
            Orientation::Upright => &self.card.upright,
            Orientation::Reversed => &self.card.reversed,
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Flip the card in place.
    pub fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
    }
}

impl Deref for DrawnCard {
    type Target = CardDefinition;

    fn deref(&self) -> &Self::Target {
        &self.card
    }
}
