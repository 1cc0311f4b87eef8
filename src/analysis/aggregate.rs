//! Attribute aggregation across a draw.

use serde::{Deserialize, Serialize};

use super::tally::Tally;
use crate::cards::DrawnCard;

/// Per-attribute counts for one draw.
///
/// Values are counted verbatim in first-seen order. Astrology is counted
/// as the whole catalog string, not per token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedData {
    pub keywords: Tally,
    pub elements: Tally,
    pub numerology: Tally,
    pub astrology: Tally,
    pub suits: Tally,

    /// Names of the Major Arcana cards, in draw order.
    pub major_arcana: Vec<String>,
}

impl AggregatedData {
    /// Scan the drawn cards.
    ///
    /// Missing optional attributes simply contribute nothing. A card adds
    /// to `suits` only if it is Minor Arcana and its name encodes a suit.
    #[must_use]
    pub fn collect(cards: &[DrawnCard]) -> Self {
        let mut data = Self::default();

        for card in cards {
            for keyword in &card.keywords {
                data.keywords.add(keyword);
            }
            if let Some(element) = card.element() {
                data.elements.add(element);
            }
            if let Some(number) = card.numerology() {
                data.numerology.add(number);
            }
            if let Some(astrology) = card.astrology() {
                data.astrology.add(astrology);
            }

            if card.is_major() {
                data.major_arcana.push(card.name.clone());
            } else if let Some(suit) = card.suit() {
                data.suits.add(suit);
            }
        }

        tracing::debug!(
            cards = cards.len(),
            keywords = data.keywords.len(),
            elements = data.elements.len(),
            majors = data.major_arcana.len(),
            suits = data.suits.len(),
            "aggregated draw attributes"
        );
        data
    }

    /// Most frequent suit; ties go to the suit seen first.
    #[must_use]
    pub fn dominant_suit(&self) -> Option<&str> {
        self.suits.most_common().map(|(suit, _)| suit)
    }
}
