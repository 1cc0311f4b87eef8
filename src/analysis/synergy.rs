//! Pairwise synergy detection.
//!
//! Every unordered pair of drawn cards is run through the same fixed list
//! of rules. Each rule yields at most one statement, and a pair is
//! reported only when at least one rule fires.
//!
//! ## Rules (in order)
//!
//! 1. Both cards are Major Arcana
//! 2. Same element
//! 3. Same suit token in the name ("... of Cups")
//! 4. Same numerology value
//! 5. Overlapping astrology tokens

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{name_suit, CardDefinition, DrawnCard};

/// One detected relationship between two cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SynergyStatement {
    BothMajor,
    SharedElement(String),
    SharedSuit(String),
    SharedNumber(String),
    /// Shared tokens, sorted.
    SharedAstrology(Vec<String>),
}

impl std::fmt::Display for SynergyStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynergyStatement::BothMajor => f.write_str(
                "Both are Major Arcana, indicating powerful, life-altering influences.",
            ),
            SynergyStatement::SharedElement(element) => write!(
                f,
                "Both share the element {}, intensifying that elemental energy.",
                element
            ),
            SynergyStatement::SharedSuit(suit) => write!(
                f,
                "Both are from the suit of {}, reinforcing shared themes.",
                suit
            ),
            SynergyStatement::SharedNumber(number) => write!(
                f,
                "Both resonate with the number {}, amplifying that numerical influence.",
                number
            ),
            SynergyStatement::SharedAstrology(tokens) => write!(
                f,
                "They share astrological influence(s): {}.",
                tokens.join(", ")
            ),
        }
    }
}

/// A synergy rule: inspects a pair and maybe produces a statement.
pub type SynergyRule = fn(&CardDefinition, &CardDefinition) -> Option<SynergyStatement>;

/// Rules in evaluation order.
pub const RULES: [SynergyRule; 5] = [
    both_major,
    shared_element,
    shared_suit,
    shared_number,
    shared_astrology,
];

fn both_major(a: &CardDefinition, b: &CardDefinition) -> Option<SynergyStatement> {
    (a.is_major() && b.is_major()).then_some(SynergyStatement::BothMajor)
}

fn shared_element(a: &CardDefinition, b: &CardDefinition) -> Option<SynergyStatement> {
    match (a.element(), b.element()) {
        (Some(x), Some(y)) if x == y => Some(SynergyStatement::SharedElement(x.to_string())),
        _ => None,
    }
}

/// Compares name-encoded suits regardless of arcana.
fn shared_suit(a: &CardDefinition, b: &CardDefinition) -> Option<SynergyStatement> {
    match (name_suit(&a.name), name_suit(&b.name)) {
        (Some(x), Some(y)) if x == y => Some(SynergyStatement::SharedSuit(x.to_string())),
        _ => None,
    }
}

fn shared_number(a: &CardDefinition, b: &CardDefinition) -> Option<SynergyStatement> {
    match (a.numerology(), b.numerology()) {
        (Some(x), Some(y)) if x == y => Some(SynergyStatement::SharedNumber(x.to_string())),
        _ => None,
    }
}

fn shared_astrology(a: &CardDefinition, b: &CardDefinition) -> Option<SynergyStatement> {
    let left: BTreeSet<&str> = a.astrology_tokens().collect();
    let right: BTreeSet<&str> = b.astrology_tokens().collect();
    let shared: Vec<String> = left.intersection(&right).map(|t| t.to_string()).collect();

    (!shared.is_empty()).then_some(SynergyStatement::SharedAstrology(shared))
}

/// Statements for one pair, in rule order.
#[must_use]
pub fn pair_statements(a: &CardDefinition, b: &CardDefinition) -> SmallVec<[SynergyStatement; 5]> {
    RULES.iter().filter_map(|rule| rule(a, b)).collect()
}

/// Synergies found between two drawn cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyRecord {
    pub first: String,
    pub second: String,
    pub statements: SmallVec<[SynergyStatement; 5]>,
}

impl std::fmt::Display for SynergyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} & {}:", self.first, self.second)?;
        for statement in &self.statements {
            write!(f, " {}", statement)?;
        }
        Ok(())
    }
}

/// Result of running synergy detection over a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "records", rename_all = "snake_case")]
pub enum SynergyOutcome {
    /// Fewer than two cards; there is nothing to compare.
    NotApplicable,
    /// Pairs were compared but no rule fired.
    NoneDetected,
    /// Pairs with at least one statement, in `(i, j)` order with `i < j`.
    Found(Vec<SynergyRecord>),
}

impl SynergyOutcome {
    /// Fallback text when no rule fired for any pair.
    pub const NONE_DETECTED: &'static str =
        "No strong synergy overlaps were detected among these cards.";

    #[must_use]
    pub fn records(&self) -> &[SynergyRecord] {
        match self {
            SynergyOutcome::Found(records) => records,
            _ => &[],
        }
    }
}

/// Compare every unordered pair of drawn cards.
#[must_use]
pub fn detect(cards: &[DrawnCard]) -> SynergyOutcome {
    if cards.len() < 2 {
        return SynergyOutcome::NotApplicable;
    }

    let mut records = Vec::new();
    for (i, first) in cards.iter().enumerate() {
        for second in &cards[i + 1..] {
            let statements = pair_statements(first, second);
            if !statements.is_empty() {
                records.push(SynergyRecord {
                    first: first.name.clone(),
                    second: second.name.clone(),
                    statements,
                });
            }
        }
    }

    tracing::debug!(cards = cards.len(), pairs = records.len(), "synergy detection");

    if records.is_empty() {
        SynergyOutcome::NoneDetected
    } else {
        SynergyOutcome::Found(records)
    }
}
