//! Parts and partitions produced by a match.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::cards::{CardSet, ShapeKey};
use crate::catalogue::{NamedComplement, Prototype};
use crate::core::label::Count;

/// One complement-size bucket of a prototype that survived filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket<'a> {
    /// Cards each listed combination would still be missing.
    pub complement_count: Count,

    /// Combinations this shape completes with that many cards to spare.
    pub complements: &'a [NamedComplement],
}

/// A candidate shape consumed by a search branch.
///
/// In unbounded mode a part carries every surviving bucket of its prototype.
/// In bounded mode each bucket becomes its own part, so a part there always
/// has exactly one complement size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part<'a> {
    prototype: &'a Prototype,
    buckets: SmallVec<[Bucket<'a>; 2]>,
}

impl<'a> Part<'a> {
    pub(crate) fn new(prototype: &'a Prototype, buckets: SmallVec<[Bucket<'a>; 2]>) -> Self {
        Self { prototype, buckets }
    }

    /// The shape subtracted from the hand.
    #[must_use]
    pub fn pattern(&self) -> &'a CardSet {
        self.prototype.pattern()
    }

    /// Canonical key of the shape.
    #[must_use]
    pub fn key(&self) -> &'a ShapeKey {
        self.prototype.key()
    }

    /// Complement-size buckets this part may stand for.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    /// The complement size, when the part has exactly one bucket.
    #[must_use]
    pub fn complement_count(&self) -> Option<Count> {
        match self.buckets.as_slice() {
            [bucket] => Some(bucket.complement_count),
            _ => None,
        }
    }

    /// Every named complement across the part's buckets.
    pub fn named_complements(&self) -> impl Iterator<Item = &'a NamedComplement> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.complements.iter())
    }
}

/// One decomposition of a queried hand.
///
/// `parts` lists the shapes in the order they were subtracted; `rest` is what
/// remained of the hand afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<'a> {
    pub rest: CardSet,
    pub parts: Vec<Arc<Part<'a>>>,
}

impl<'a> Partition<'a> {
    /// The subtracted shapes, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &'a CardSet> + '_ {
        self.parts.iter().map(|part| part.pattern())
    }

    /// Sum of the parts' complement sizes, for single-bucket parts.
    ///
    /// Returns `None` if any part spans several buckets (unbounded mode) or
    /// the sum leaves the `Count` range.
    #[must_use]
    pub fn complement_total(&self) -> Option<Count> {
        self.parts
            .iter()
            .try_fold(0 as Count, |total, part| total.checked_add(part.complement_count()?))
    }
}

impl std::fmt::Display for Partition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", part.pattern())?;
        }
        write!(f, "] rest {}", self.rest)
    }
}
