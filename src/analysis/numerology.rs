//! Special notes for reserved numerology values.
//!
//! Only 1, 5 and 10 carry a note. Notes are always emitted in table order,
//! never in the order the numbers were drawn, and a number needs to be
//! present only once to trigger its note.

use serde::{Deserialize, Serialize};

use super::tally::Tally;

/// Fixed interpretation text for one reserved number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpecialNumber {
    pub number: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Reserved numbers in emission order.
pub const SPECIAL_NUMBERS: &[SpecialNumber] = &[
    SpecialNumber {
        number: "1",
        title: "Numerology #1 (Aces or The Magician)",
        text: "Symbolizes new beginnings, fresh starts, or the spark of creativity. \
               Be prepared for pioneering energy and personal initiative.",
    },
    SpecialNumber {
        number: "5",
        title: "Numerology #5",
        text: "Associated with change, challenges, and transitions. \
               This number often invites you to adapt, push through conflicts, and embrace growth \
               through instability.",
    },
    SpecialNumber {
        number: "10",
        title: "Numerology #10",
        text: "Represents completion, culmination of a cycle, and transition into a new phase. \
               Reflect on what is ending and be open to the fresh possibilities that follow.",
    },
];

/// A note emitted for a drawn reserved number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyNote {
    pub number: String,
    pub title: String,
    pub text: String,
}

impl From<&SpecialNumber> for NumerologyNote {
    fn from(special: &SpecialNumber) -> Self {
        Self {
            number: special.number.to_string(),
            title: special.title.to_string(),
            text: special.text.to_string(),
        }
    }
}

impl std::fmt::Display for NumerologyNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.text)
    }
}

/// Whether `number` has a special note.
#[must_use]
pub fn is_special(number: &str) -> bool {
    SPECIAL_NUMBERS.iter().any(|s| s.number == number)
}

/// Notes for every reserved number present in `counts`, in table order.
#[must_use]
pub fn special_notes(counts: &Tally) -> Vec<NumerologyNote> {
    SPECIAL_NUMBERS
        .iter()
        .filter(|special| counts.contains(special.number))
        .map(NumerologyNote::from)
        .collect()
}

/// Notes for a single card's number.
#[must_use]
pub fn notes_for(number: &str) -> Vec<NumerologyNote> {
    special_notes(&std::iter::once(number).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_in_fixed_order() {
        let counts: Tally = ["10", "3", "5", "1"].into_iter().collect();
        let numbers: Vec<_> = special_notes(&counts).into_iter().map(|n| n.number).collect();
        assert_eq!(numbers, vec!["1", "5", "10"]);
    }

    #[test]
    fn test_presence_not_magnitude() {
        let counts: Tally = ["5", "5", "5"].into_iter().collect();
        let notes = special_notes(&counts);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Numerology #5");
    }

    #[test]
    fn test_other_numbers_have_no_note() {
        let counts: Tally = ["3", "7", "0"].into_iter().collect();
        assert!(special_notes(&counts).is_empty());
        assert!(notes_for("3").is_empty());
        assert!(!is_special("3"));
    }

    #[test]
    fn test_single_number() {
        let notes = notes_for("10");
        assert_eq!(notes.len(), 1);
        assert!(notes[0].text.starts_with("Represents completion"));
        assert!(is_special("1"));
    }

    #[test]
    fn test_note_display() {
        let note = NumerologyNote::from(&SPECIAL_NUMBERS[0]);
        assert!(note.to_string().starts_with("Numerology #1 (Aces or The Magician): Symbolizes"));
    }
}
