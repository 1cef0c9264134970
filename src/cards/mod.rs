//! Counted card sets and their canonical shape keys.
//!
//! ## Key Types
//!
//! - `CardSet`: label -> strictly positive count, with value semantics
//! - `ShapeKey`: order-independent key used to merge identical shapes

pub mod card_set;
pub mod shape_key;

pub use card_set::CardSet;
pub use shape_key::ShapeKey;
