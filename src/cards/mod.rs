//! Card system: definitions, drawn cards, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Position of a definition in the catalog
//! - `CardDefinition`: Immutable catalog data (name, arcana, attributes, meanings)
//! - `DrawnCard`: Owned copy of a definition plus its orientation
//! - `CardCatalog`: Ordered, read-only definition store
//!
//! ## Suits
//!
//! Suits are not stored. A Minor Arcana card's suit is the token after
//! "of" in its name; see [`name_suit`].

pub mod catalog;
pub mod definition;
pub mod drawn;

pub use catalog::{CardCatalog, CatalogEntry, NumberOrText};
pub use definition::{name_suit, Arcana, CardDefinition, CardId, Keywords};
pub use drawn::{DrawnCard, Orientation};
