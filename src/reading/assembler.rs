//! Standard analysis block for multi-card spreads.
//!
//! Sections are always produced in the same order:
//!
//! 1. Key themes (repeated keywords) or the no-repeats note
//! 2. Elemental balance (omitted without elements)
//! 3. Numerology distribution, then special notes (omitted without numbers)
//! 4. Astrological influences (omitted without astrology)
//! 5. Major Arcana note (only if a Major card was drawn)
//! 6. Dominant suit (only if a suit was derived)
//! 7. Synergy (omitted for fewer than two cards)
//! 8. Closing remark

use crate::analysis::{detect, special_notes, AggregatedData, SynergyOutcome};
use crate::cards::DrawnCard;

use super::report::{Section, SectionKind};

const REPEATED_KEYWORDS_NOTE: &str =
    "These keywords appear in multiple cards, indicating heightened significance.";
const NO_REPEATS_NOTE: &str = "No repeated keywords; each card brings its own distinct energy.";
const ELEMENTS_NOTE: &str =
    "Shows the distribution of Fire, Water, Air, Earth energies in your reading.";
const ASTROLOGY_NOTE: &str = "Astrological aspects can further clarify the energies at play.";
const MAJOR_ARCANA_NOTE: &str = "Major Arcana cards point to significant life themes or \
    transformative moments. Pay close attention to these powerful energies.";
const CLOSING_NOTE: &str = "Overall, reflect on these recurring themes, elemental energies, \
    numbers, suits, and card synergies to gain deeper insight into your question or situation.";

/// Builds the analysis sections from aggregated data and the draw.
#[derive(Clone, Copy, Debug)]
pub struct ReportAssembler<'a> {
    cards: &'a [DrawnCard],
    data: &'a AggregatedData,
}

impl<'a> ReportAssembler<'a> {
    #[must_use]
    pub fn new(cards: &'a [DrawnCard], data: &'a AggregatedData) -> Self {
        Self { cards, data }
    }

    /// All sections, in report order.
    #[must_use]
    pub fn assemble(&self) -> Vec<Section> {
        let mut sections = vec![self.themes()];
        sections.extend(self.elements());
        sections.extend(self.numerology());
        sections.extend(self.astrology());
        sections.extend(self.major_arcana());
        sections.extend(self.dominant_suit());
        sections.extend(self.synergy());
        sections.push(closing());
        sections
    }

    fn themes(&self) -> Section {
        let repeated: Vec<&str> = self.data.keywords.repeated().collect();
        if repeated.is_empty() {
            Section::new(SectionKind::Themes).with_paragraph(NO_REPEATS_NOTE)
        } else {
            Section::new(SectionKind::Themes)
                .with_heading("Key Themes (Shared Keywords)")
                .with_items(repeated)
                .with_paragraph(REPEATED_KEYWORDS_NOTE)
        }
    }

    fn elements(&self) -> Option<Section> {
        if self.data.elements.is_empty() {
            return None;
        }
        Some(
            Section::new(SectionKind::Elements)
                .with_heading("Elemental Balance")
                .with_items(distribution(self.data.elements.iter(), ""))
                .with_paragraph(ELEMENTS_NOTE),
        )
    }

    /// Distribution section plus, when any apply, the special notes.
    fn numerology(&self) -> Vec<Section> {
        if self.data.numerology.is_empty() {
            return Vec::new();
        }

        let mut sections = vec![Section::new(SectionKind::Numerology)
            .with_heading("Numerological Insights")
            .with_items(distribution(self.data.numerology.iter(), "Number "))];

        let notes = special_notes(&self.data.numerology);
        if !notes.is_empty() {
            sections.push(
                Section::new(SectionKind::NumerologyNotes)
                    .with_heading("Special Numerology Notes")
                    .with_items(notes.iter().map(ToString::to_string)),
            );
        }
        sections
    }

    fn astrology(&self) -> Option<Section> {
        if self.data.astrology.is_empty() {
            return None;
        }
        Some(
            Section::new(SectionKind::Astrology)
                .with_heading("Astrological Influences")
                .with_items(distribution(self.data.astrology.iter(), ""))
                .with_paragraph(ASTROLOGY_NOTE),
        )
    }

    fn major_arcana(&self) -> Option<Section> {
        if self.data.major_arcana.is_empty() {
            return None;
        }
        Some(
            Section::new(SectionKind::MajorArcana)
                .with_heading("Major Arcana Notes")
                .with_paragraph(MAJOR_ARCANA_NOTE),
        )
    }

    fn dominant_suit(&self) -> Option<Section> {
        let suit = self.data.dominant_suit()?;
        Some(
            Section::new(SectionKind::DominantSuit)
                .with_heading("Dominant Suit")
                .with_paragraph(format!(
                    "The suit of {} appears most frequently, indicating a focus on related \
                     aspects (e.g., Cups = emotions, Pentacles = material matters, \
                     Swords = thoughts/communication, Wands = creativity/passion).",
                    suit
                )),
        )
    }

    fn synergy(&self) -> Option<Section> {
        let section =
            Section::new(SectionKind::Synergy).with_heading("Card Combinations & Synergy");
        match detect(self.cards) {
            SynergyOutcome::NotApplicable => None,
            SynergyOutcome::NoneDetected => {
                Some(section.with_paragraph(SynergyOutcome::NONE_DETECTED))
            }
            SynergyOutcome::Found(records) => {
                Some(section.with_items(records.iter().map(ToString::to_string)))
            }
        }
    }
}

/// Closing remark that ends every multi-card report.
#[must_use]
pub fn closing() -> Section {
    Section::new(SectionKind::Closing).with_paragraph(CLOSING_NOTE)
}

fn distribution<'a>(counts: impl Iterator<Item = (&'a str, usize)>, prefix: &str) -> Vec<String> {
    counts
        .map(|(value, n)| format!("{}{}: {} card(s)", prefix, value, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Arcana, CardDefinition, CardId, Orientation};

    fn card(name: &str, arcana: Arcana) -> CardDefinition {
        CardDefinition::new(CardId::default(), name, arcana).with_texts("up", "down")
    }

    fn assemble(cards: &[DrawnCard]) -> Vec<Section> {
        let data = AggregatedData::collect(cards);
        ReportAssembler::new(cards, &data).assemble()
    }

    fn kinds(sections: &[Section]) -> Vec<SectionKind> {
        sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_full_section_order() {
        let cards: Vec<_> = [
            card("The Magician", Arcana::Major)
                .with_keywords(["will", "skill"])
                .with_element("Air")
                .with_numerology("1")
                .with_astrology("Mercury"),
            card("Ace of Swords", Arcana::Minor)
                .with_keywords(["clarity", "will"])
                .with_element("Air")
                .with_numerology("1"),
            card("Two of Swords", Arcana::Minor).with_numerology("2"),
        ]
        .into_iter()
        .map(|c| DrawnCard::new(c, Orientation::Upright))
        .collect();

        let sections = assemble(&cards);
        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::Themes,
                SectionKind::Elements,
                SectionKind::Numerology,
                SectionKind::NumerologyNotes,
                SectionKind::Astrology,
                SectionKind::MajorArcana,
                SectionKind::DominantSuit,
                SectionKind::Synergy,
                SectionKind::Closing,
            ]
        );

        assert_eq!(sections[0].items, vec!["will"]);
        assert_eq!(sections[1].items, vec!["Air: 2 card(s)"]);
        assert_eq!(sections[2].items, vec!["Number 1: 2 card(s)", "Number 2: 1 card(s)"]);
        assert_eq!(sections[3].items.len(), 1);
        assert!(sections[6].paragraphs[0].starts_with("The suit of Swords"));
    }

    #[test]
    fn test_bare_cards_omit_optional_sections() {
        let cards: Vec<_> = [card("The Fool", Arcana::Minor), card("The Tower", Arcana::Minor)]
            .into_iter()
            .map(|c| DrawnCard::new(c, Orientation::Reversed))
            .collect();

        let sections = assemble(&cards);
        assert_eq!(
            kinds(&sections),
            vec![SectionKind::Themes, SectionKind::Synergy, SectionKind::Closing]
        );
        assert_eq!(sections[0].paragraphs, vec![NO_REPEATS_NOTE]);
        assert_eq!(sections[1].paragraphs, vec![SynergyOutcome::NONE_DETECTED]);
    }

    #[test]
    fn test_single_card_has_no_synergy_section() {
        let cards = vec![DrawnCard::new(card("The Fool", Arcana::Major), Orientation::Upright)];
        let sections = assemble(&cards);
        assert!(!kinds(&sections).contains(&SectionKind::Synergy));
        assert_eq!(sections.last().map(|s| s.kind), Some(SectionKind::Closing));
    }

    #[test]
    fn test_numerology_without_special_numbers() {
        let cards: Vec<_> = [
            card("Three of Cups", Arcana::Minor).with_numerology("3"),
            card("Seven of Wands", Arcana::Minor).with_numerology("7"),
        ]
        .into_iter()
        .map(|c| DrawnCard::new(c, Orientation::Upright))
        .collect();

        let sections = assemble(&cards);
        assert!(kinds(&sections).contains(&SectionKind::Numerology));
        assert!(!kinds(&sections).contains(&SectionKind::NumerologyNotes));
    }
}
