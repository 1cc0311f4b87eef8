//! Readings: spread selection, report assembly, and the draw-to-report
//! pipeline.
//!
//! ## Example Usage
//!
//! ```
//! use tarot_reading::cards::{Arcana, CardDefinition, CardId, DrawnCard, Orientation};
//! use tarot_reading::reading::{interpret, SectionKind, SpreadType};
//!
//! let cards: Vec<_> = ["The Sun", "The Moon", "The Star"]
//!     .into_iter()
//!     .map(|name| {
//!         let def = CardDefinition::new(CardId::default(), name, Arcana::Major)
//!             .with_texts("upright", "reversed");
//!         DrawnCard::new(def, Orientation::Upright)
//!     })
//!     .collect();
//!
//! let report = interpret(&cards).unwrap();
//! assert_eq!(report.spread, SpreadType::Three);
//! assert!(report.has_section(SectionKind::MajorArcana));
//! ```

mod assembler;
mod interpreter;
mod report;
mod spread;

pub use assembler::{closing, ReportAssembler};
pub use interpreter::{interpret, SpreadInterpreter};
pub use report::{InterpretationReport, Section, SectionKind};
pub use spread::{SpreadType, CELTIC_CROSS_POSITIONS, FIVE_CARD_POSITIONS, THREE_CARD_POSITIONS};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, DrawnCard};
use crate::config::ReadingConfig;
use crate::draw::draw_cards;
use crate::error::{ReadingError, Result};

/// A completed reading: the drawn cards and their interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub spread: SpreadType,
    pub cards: Vec<DrawnCard>,
    pub report: InterpretationReport,
}

impl Reading {
    /// Interpret cards that were already drawn.
    pub fn from_cards(cards: Vec<DrawnCard>) -> Result<Self> {
        let interpreter = SpreadInterpreter::for_cards(&cards);
        let report = interpreter.interpret(&cards)?;
        Ok(Self {
            spread: interpreter.spread(),
            cards,
            report,
        })
    }

    /// Resolve the requested count, draw, and interpret.
    ///
    /// `raw_count` is the unvalidated request value; see
    /// [`ReadingConfig::resolve_count`].
    pub fn perform<R: Rng + ?Sized>(
        catalog: &CardCatalog,
        raw_count: Option<&str>,
        config: &ReadingConfig,
        rng: &mut R,
    ) -> Result<Self> {
        if catalog.is_empty() {
            return Err(ReadingError::invalid_input("catalog is empty"));
        }
        let count = config.resolve_count(raw_count, catalog.len());
        let cards = draw_cards(catalog, count, rng)?;
        tracing::info!(count, "reading drawn");
        Self::from_cards(cards)
    }

    /// Pretty-printed JSON for the whole reading.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ReadingError::Render)
    }
}
