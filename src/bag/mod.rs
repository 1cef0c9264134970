//! Generic tagged multisets.
//!
//! ## Key Types
//!
//! - `Bag`: items grouped by a tag derived through a `Tagger`
//! - `Tagger`: the tagging capability; `IdentityTagger` tags an item by itself
//! - `Sample`: one subset/complement split produced by `Bag::samples`
//! - `Multisubset`: one side of a split, with a canonical key
//!
//! `CardSet` is the counted specialization of a bag whose items are their own
//! tags; `CardSet::to_bag` converts one into the other.

pub mod multiset;
pub mod multisubset;
pub mod tagger;

pub use multiset::{Bag, Sample, Samples};
pub use multisubset::Multisubset;
pub use tagger::{IdentityTagger, Tagger};
