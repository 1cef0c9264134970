//! Prototype catalogue built from named combinations.
//!
//! ## Key Types
//!
//! - `Catalogue`: canonical shape -> `Prototype`, filled by `register_card_set`
//! - `Prototype`: a shape plus its named complements, bucketed by size
//! - `NamedComplement`: a combination's name and what remains of it
//! - `SubShapes`: every sub-shape of a card set, empty one included

pub mod prototype;
pub mod store;
pub mod sub_shapes;

pub use prototype::{NamedComplement, Prototype};
pub use store::Catalogue;
pub use sub_shapes::SubShapes;
