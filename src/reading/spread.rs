//! Spread types and their position labels.
//!
//! The spread is chosen purely from the number of drawn cards. Named
//! spreads have fixed label tables; any other count gets ordinal labels.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const THREE_CARD_POSITIONS: [&str; 3] = ["Past", "Present", "Future"];

pub const FIVE_CARD_POSITIONS: [&str; 5] =
    ["Situation", "Challenge", "Guidance", "Focus", "Potential"];

pub const CELTIC_CROSS_POSITIONS: [&str; 10] = [
    "Present Position",
    "Immediate Challenge",
    "Distant Past",
    "Recent Past",
    "Goal or Aspiration",
    "Future Influence",
    "You as You See Yourself",
    "Outside Influences",
    "Hopes and Fears",
    "Outcome",
];

/// Layout applied to a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "count", rename_all = "snake_case")]
pub enum SpreadType {
    Single,
    Three,
    Five,
    CelticCross,
    /// Any other count.
    Custom(usize),
}

impl SpreadType {
    /// Spread for a number of drawn cards.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        match count {
            1 => SpreadType::Single,
            3 => SpreadType::Three,
            5 => SpreadType::Five,
            10 => SpreadType::CelticCross,
            n => SpreadType::Custom(n),
        }
    }

    /// Display title of the spread.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SpreadType::Single => "Single-Card Draw",
            SpreadType::Three => "Three-Card Spread",
            SpreadType::Five => "Five-Card Spread",
            SpreadType::CelticCross => "Celtic Cross Spread",
            SpreadType::Custom(_) => "Custom Spread",
        }
    }

    /// Fixed label table, if this spread has one.
    #[must_use]
    pub fn positions(self) -> Option<&'static [&'static str]> {
        match self {
            SpreadType::Three => Some(&THREE_CARD_POSITIONS),
            SpreadType::Five => Some(&FIVE_CARD_POSITIONS),
            SpreadType::CelticCross => Some(&CELTIC_CROSS_POSITIONS),
            SpreadType::Single | SpreadType::Custom(_) => None,
        }
    }

    /// Labels for `card_count` cards.
    ///
    /// Named spreads yield at most as many labels as their table holds;
    /// extra cards get no label. Other spreads label every card "Card N".
    #[must_use]
    pub fn labels(self, card_count: usize) -> Vec<Cow<'static, str>> {
        match self.positions() {
            Some(table) => table
                .iter()
                .take(card_count)
                .map(|label| Cow::Borrowed(*label))
                .collect(),
            None => (1..=card_count)
                .map(|i| Cow::Owned(format!("Card {}", i)))
                .collect(),
        }
    }
}

impl std::fmt::Display for SpreadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_count() {
        assert_eq!(SpreadType::for_count(1), SpreadType::Single);
        assert_eq!(SpreadType::for_count(2), SpreadType::Custom(2));
        assert_eq!(SpreadType::for_count(3), SpreadType::Three);
        assert_eq!(SpreadType::for_count(4), SpreadType::Custom(4));
        assert_eq!(SpreadType::for_count(5), SpreadType::Five);
        assert_eq!(SpreadType::for_count(9), SpreadType::Custom(9));
        assert_eq!(SpreadType::for_count(10), SpreadType::CelticCross);
        assert_eq!(SpreadType::for_count(22), SpreadType::Custom(22));
    }

    #[test]
    fn test_titles() {
        assert_eq!(SpreadType::Single.to_string(), "Single-Card Draw");
        assert_eq!(SpreadType::CelticCross.title(), "Celtic Cross Spread");
        assert_eq!(SpreadType::Custom(7).title(), "Custom Spread");
    }

    #[test]
    fn test_named_labels_truncate() {
        assert_eq!(SpreadType::Three.labels(3), vec!["Past", "Present", "Future"]);
        assert_eq!(SpreadType::Three.labels(2), vec!["Past", "Present"]);
        assert_eq!(SpreadType::Five.labels(9).len(), 5);
        assert_eq!(SpreadType::CelticCross.labels(10)[9], "Outcome");
    }

    #[test]
    fn test_custom_labels_are_ordinal() {
        assert_eq!(SpreadType::Custom(4).labels(4), vec!["Card 1", "Card 2", "Card 3", "Card 4"]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SpreadType::Custom(6)).unwrap();
        assert_eq!(json, r#"{"type":"custom","count":6}"#);
        let back: SpreadType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SpreadType::Custom(6));
    }
}
