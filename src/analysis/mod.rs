//! Draw analysis: aggregation, synergy detection, and numerology notes.
//!
//! Everything here is a pure function of the drawn cards. The pieces are
//! composed into a report by `reading::ReportAssembler`.
//!
//! ## Key Types
//!
//! - `Tally`: Frequency counter that keeps first-seen order
//! - `AggregatedData`: Keyword/element/numerology/astrology/suit counts
//! - `SynergyOutcome`: Pairwise synergy findings
//! - `NumerologyNote`: Fixed text for the reserved numbers 1, 5, 10

pub mod aggregate;
pub mod numerology;
pub mod synergy;
pub mod tally;

pub use aggregate::AggregatedData;
pub use numerology::{
    is_special, notes_for, special_notes, NumerologyNote, SpecialNumber, SPECIAL_NUMBERS,
};
pub use synergy::{
    detect, pair_statements, SynergyOutcome, SynergyRecord, SynergyRule, SynergyStatement,
};
pub use tally::Tally;
