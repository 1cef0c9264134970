//! # rules-card
//!
//! Decomposes a hand of cards into sub-shapes of named reference combinations.
//!
//! ## Design Principles
//!
//! 1. **Exact Counts**: Hands are multisets with strictly positive `i128`
//!    counts. Misuse of a counting primitive is an `Error`, never a panic.
//!
//! 2. **Register Once, Query Often**: Combinations are expanded into every
//!    sub-shape at registration. Queries only read the catalogue.
//!
//! 3. **Lazy Results**: A query returns an `Iterator`. Each `next()` runs the
//!    search up to the following partition; dropping it cancels the search.
//!
//! ## Matching Modes
//!
//! - **Unbounded**: every decomposition is reported, leftover cards included.
//!
//! - **Bounded Total**: with `total_complement_count`, only decompositions
//!   where the missing cards of each chosen shape plus the leftover add up to
//!   the bound are reported. Over-budget branches are pruned early.
//!
//! ## Modules
//!
//! - `core`: Labels, counts, errors
//! - `bag`: Generic tagged multiset with subset sampling
//! - `cards`: `CardSet` and canonical shape keys
//! - `catalogue`: Sub-shape catalogue of registered combinations
//! - `matcher`: Filtering and the backtracking search
//! - `rules`: `RulesCard` facade

pub mod core;
pub mod bag;
pub mod cards;
pub mod catalogue;
pub mod matcher;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Count, Error, Label, Result};

pub use crate::bag::{Bag, IdentityTagger, Multisubset, Sample, Tagger};

pub use crate::cards::{CardSet, ShapeKey};

pub use crate::catalogue::{Catalogue, NamedComplement, Prototype};

pub use crate::matcher::{
    Bucket, MatchOptions, Matcher, Part, Partition, Partitions, SearchStats,
};

pub use crate::rules::RulesCard;
