//! Drawing cards from the catalog.
//!
//! The draw step is the only source of randomness in the crate. Any
//! `rand::Rng` can drive it; interpretation downstream is deterministic.

mod sampler;

pub use sampler::{draw_cards, random_orientation, REVERSED_PROBABILITY};
