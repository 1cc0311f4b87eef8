//! # tarot-reading
//!
//! Analysis and interpretation engine for tarot draws.
//!
//! Given a set of drawn cards with orientations, the engine computes
//! aggregate statistics (keywords, elements, numerology, astrology, suits),
//! detects pairwise synergies, and assembles an ordered, renderer-agnostic
//! interpretation report for the spread implied by the number of cards.
//!
//! ## Design Principles
//!
//! 1. **Immutable Catalog**: Card definitions are never mutated after load.
//!    Drawing copies definitions before assigning orientation, so readings
//!    running concurrently never see each other's state.
//!
//! 2. **Deterministic Interpretation**: Everything after the draw is a pure
//!    function of the drawn cards.
//!
//! 3. **Data Over Branching**: Spread position labels, numerology notes and
//!    synergy rules are static tables.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, drawn cards, catalog
//! - `draw`: Copy-on-draw sampling
//! - `analysis`: Aggregation, synergy detection, numerology notes
//! - `reading`: Spreads, report assembly, interpretation
//! - `config`: Draw-request configuration
//! - `error`: Error types

pub mod analysis;
pub mod cards;
pub mod config;
pub mod draw;
pub mod error;
pub mod reading;

// Re-export commonly used types
pub use crate::cards::{
    Arcana, CardCatalog, CardDefinition, CardId, CatalogEntry, DrawnCard, Orientation,
};

pub use crate::analysis::{
    AggregatedData, NumerologyNote, SynergyOutcome, SynergyRecord, SynergyStatement, Tally,
};

pub use crate::reading::{
    interpret, InterpretationReport, Reading, ReportAssembler, Section, SectionKind,
    SpreadInterpreter, SpreadType,
};

pub use crate::config::ReadingConfig;
pub use crate::draw::draw_cards;
pub use crate::error::{ReadingError, Result};
