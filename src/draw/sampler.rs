//! Copy-on-draw card sampling.
//!
//! Sampling picks distinct catalog positions, clones each definition into
//! a fresh `DrawnCard`, and only then assigns an orientation. The catalog
//! is borrowed immutably throughout, so concurrent readings over the same
//! catalog cannot observe each other's orientations.
//!
//! ```
//! use rand::thread_rng;
//! use tarot_reading::cards::{Arcana, CardCatalog, CardDefinition, CardId};
//! use tarot_reading::draw::draw_cards;
//!
//! let mut catalog = CardCatalog::new();
//! for name in ["The Fool", "The Magician", "The High Priestess"] {
//!     let card = CardDefinition::new(CardId::default(), name, Arcana::Major)
//!         .with_texts("upright", "reversed");
//!     catalog.register(card).unwrap();
//! }
//!
//! let drawn = draw_cards(&catalog, 2, &mut thread_rng()).unwrap();
//! assert_eq!(drawn.len(), 2);
//! assert_ne!(drawn[0].name, drawn[1].name);
//! ```

use rand::seq::index;
use rand::Rng;

use crate::cards::{CardCatalog, CardId, DrawnCard, Orientation};
use crate::error::{ReadingError, Result};

/// Probability of a card landing reversed.
pub const REVERSED_PROBABILITY: f64 = 0.5;

/// Pick a random orientation.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.gen_bool(REVERSED_PROBABILITY) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    }
}

/// Draw `count` distinct cards from the catalog.
///
/// Cards come back in draw order, each an independent copy of its
/// definition. Fails with `InvalidInput` if `count` is zero or larger
/// than the catalog.
pub fn draw_cards<R: Rng + ?Sized>(
    catalog: &CardCatalog,
    count: usize,
    rng: &mut R,
) -> Result<Vec<DrawnCard>> {
    if count == 0 {
        return Err(ReadingError::invalid_input("cannot draw zero cards"));
    }
    if count > catalog.len() {
        return Err(ReadingError::invalid_input(format!(
            "cannot draw {} cards from a catalog of {}",
            count,
            catalog.len()
        )));
    }

    let positions = index::sample(rng, catalog.len(), count);
    let mut drawn = Vec::with_capacity(count);
    for position in positions.iter() {
        let id = CardId::new(position as u32);
        let definition = catalog
            .get(id)
            .ok_or_else(|| ReadingError::invalid_input(format!("{} not in catalog", id)))?;
        drawn.push(DrawnCard::from_definition(definition, Orientation::Upright));
    }

    // Orientation is assigned to the copies, never to catalog entries.
    for card in &mut drawn {
        card.set_orientation(random_orientation(rng));
    }

    tracing::debug!(
        count,
        reversed = drawn.iter().filter(|c| c.is_reversed()).count(),
        "cards drawn"
    );
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Arcana, CardDefinition};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog(size: usize) -> CardCatalog {
        let mut catalog = CardCatalog::new();
        for i in 0..size {
            let card = CardDefinition::new(CardId::default(), format!("Card {}", i), Arcana::Minor)
                .with_texts("up", "down");
            catalog.register(card).unwrap();
        }
        catalog
    }

    #[test]
    fn test_draw_distinct_cards() {
        let catalog = catalog(10);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let drawn = draw_cards(&catalog, 10, &mut rng).unwrap();
        assert_eq!(drawn.len(), 10);

        let mut ids: Vec<_> = drawn.iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_draw_rejects_bad_counts() {
        let catalog = catalog(3);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(matches!(
            draw_cards(&catalog, 0, &mut rng),
            Err(ReadingError::InvalidInput { .. })
        ));
        assert!(matches!(
            draw_cards(&catalog, 4, &mut rng),
            Err(ReadingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_both_orientations_occur() {
        let catalog = catalog(20);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let drawn = draw_cards(&catalog, 20, &mut rng).unwrap();
        let reversed = drawn.iter().filter(|c| c.is_reversed()).count();

        // 20 fair coin flips all landing the same way is vanishingly unlikely
        assert!(reversed > 0 && reversed < 20);
    }

    #[test]
    fn test_catalog_untouched_by_draw() {
        let catalog = catalog(5);
        let snapshot: Vec<_> = catalog.iter().cloned().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let mut drawn = draw_cards(&catalog, 5, &mut rng).unwrap();
        for card in &mut drawn {
            card.flip();
        }

        let after: Vec<_> = catalog.iter().cloned().collect();
        assert_eq!(snapshot, after);
    }
}
