//! Spread interpretation.
//!
//! `SpreadInterpreter` dispatches once on the spread type and produces the
//! whole report. The single-card path is self-contained; every other path
//! writes one narrative line per labeled card and then appends the
//! standard analysis from `ReportAssembler`.

use crate::analysis::{is_special, notes_for, AggregatedData};
use crate::cards::DrawnCard;
use crate::error::{ReadingError, Result};

use super::assembler::ReportAssembler;
use super::report::{InterpretationReport, Section, SectionKind};
use super::spread::SpreadType;

const MAJOR_CALLOUT: &str = "This is a Major Arcana card, indicating a powerful theme or life \
    lesson. Expect significant energies surrounding this card's meaning.";
const SINGLE_CLOSING: &str = "A single-card draw offers a concise message or insight. Reflect on \
    how this card's energy resonates with your question or intention.";

/// Interprets a draw under one spread type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpreadInterpreter {
    spread: SpreadType,
}

impl SpreadInterpreter {
    /// Interpreter for an explicit spread.
    #[must_use]
    pub fn new(spread: SpreadType) -> Self {
        Self { spread }
    }

    /// Interpreter whose spread is derived from the card count.
    #[must_use]
    pub fn for_cards(cards: &[DrawnCard]) -> Self {
        Self::new(SpreadType::for_count(cards.len()))
    }

    #[must_use]
    pub fn spread(&self) -> SpreadType {
        self.spread
    }

    /// Produce the report for `cards`.
    ///
    /// Fails with `InvalidInput` on an empty draw and with
    /// `MalformedCatalogEntry` if a card lacks required text.
    pub fn interpret(&self, cards: &[DrawnCard]) -> Result<InterpretationReport> {
        if cards.is_empty() {
            return Err(ReadingError::invalid_input(format!(
                "{} requires at least one card",
                self.spread
            )));
        }
        for card in cards {
            card.validate()?;
        }

        tracing::debug!(spread = %self.spread, cards = cards.len(), "interpreting draw");

        let mut report = InterpretationReport::new(self.spread);
        match self.spread {
            SpreadType::Single => single_card(&mut report, &cards[0]),
            _ => {
                report.push(self.positions(cards));
                let data = AggregatedData::collect(cards);
                report.extend(ReportAssembler::new(cards, &data).assemble());
            }
        }
        Ok(report)
    }

    /// One "Label (Orientation): meaning" line per labeled card.
    fn positions(&self, cards: &[DrawnCard]) -> Section {
        let labels = self.spread.labels(cards.len());
        labels
            .iter()
            .zip(cards)
            .fold(Section::new(SectionKind::Positions), |section, (label, card)| {
                section.with_paragraph(format!(
                    "{} ({}): {}",
                    label,
                    card.orientation,
                    card.meaning()
                ))
            })
    }
}

/// Interpret a draw, choosing the spread from its size.
pub fn interpret(cards: &[DrawnCard]) -> Result<InterpretationReport> {
    SpreadInterpreter::for_cards(cards).interpret(cards)
}

fn single_card(report: &mut InterpretationReport, card: &DrawnCard) {
    let mut summary = Section::new(SectionKind::CardSummary)
        .with_paragraph(format!("You drew {} ({}).", card.name, card.orientation));
    if let Some(element) = card.element() {
        summary = summary.with_paragraph(format!("Element: {}", element));
    }
    if let Some(number) = card.numerology() {
        summary = summary.with_paragraph(format!("Number: {}", number));
    }
    if let Some(astrology) = card.astrology() {
        summary = summary.with_paragraph(format!("Astrology: {}", astrology));
    }
    report.push(summary);

    if card.is_major() {
        report.push(Section::new(SectionKind::MajorArcana).with_paragraph(MAJOR_CALLOUT));
    }

    if let Some(number) = card.numerology().filter(|n| is_special(n)) {
        report.push(
            Section::new(SectionKind::NumerologyNotes)
                .with_heading("Special Numerology Note")
                .with_items(notes_for(number).iter().map(ToString::to_string)),
        );
    }

    report.push(Section::new(SectionKind::Closing).with_paragraph(SINGLE_CLOSING));
}
