//! Insertion-ordered frequency counter.
//!
//! Report sections list values in the order they were first seen, and the
//! dominant-suit tie-break depends on that order, so a plain hash map is
//! not enough. `Tally` keeps entries in a `Vec` and uses an `FxHashMap`
//! only as an index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Frequency counter that remembers first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, usize)>", into = "Vec<(String, usize)>")]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: FxHashMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Occurrences of `key` (zero if never seen).
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Keys seen more than once, in first-seen order.
    pub fn repeated(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, n)| *n > 1).map(|(k, _)| k)
    }

    /// Highest-count entry; ties go to the key seen first.
    #[must_use]
    pub fn most_common(&self) -> Option<(&str, usize)> {
        let mut best = None;
        for (key, n) in self.iter() {
            match best {
                Some((_, top)) if top >= n => {}
                _ => best = Some((key, n)),
            }
        }
        best
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

impl From<Vec<(String, usize)>> for Tally {
    fn from(entries: Vec<(String, usize)>) -> Self {
        let mut tally = Tally::new();
        for (key, n) in entries {
            match tally.index.get(&key) {
                Some(&slot) => tally.entries[slot].1 += n,
                None => {
                    tally.index.insert(key.clone(), tally.entries.len());
                    tally.entries.push((key, n));
                }
            }
        }
        tally
    }
}

impl From<Tally> for Vec<(String, usize)> {
    fn from(tally: Tally) -> Self {
        tally.entries
    }
}
