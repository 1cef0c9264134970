//! Catalogued shapes and the named combinations they were cut from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardSet, ShapeKey};
use crate::core::label::Count;

/// What is left of a registered combination after a shape is taken out.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedComplement {
    /// Name the combination was registered under.
    pub name: String,

    /// The combination minus the shape.
    pub complement: CardSet,
}

impl NamedComplement {
    /// Create a named complement.
    pub fn new(name: impl Into<String>, complement: CardSet) -> Self {
        Self {
            name: name.into(),
            complement,
        }
    }
}

/// A canonical sub-shape and every named complement it was extracted with.
///
/// Complements are bucketed by their total count, ascending. A shape cut from
/// several combinations (or several times from one) accumulates all of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    pattern: CardSet,
    key: ShapeKey,
    complements: BTreeMap<Count, Vec<NamedComplement>>,
}

impl Prototype {
    /// Create a prototype for `pattern` with no complements yet.
    #[must_use]
    pub fn new(pattern: CardSet) -> Self {
        let key = ShapeKey::of(&pattern);
        Self::with_key(pattern, key)
    }

    /// Create a prototype whose key was already computed from `pattern`.
    pub(crate) fn with_key(pattern: CardSet, key: ShapeKey) -> Self {
        Self {
            pattern,
            key,
            complements: BTreeMap::new(),
        }
    }

    /// The shape this prototype stands for.
    #[must_use]
    pub fn pattern(&self) -> &CardSet {
        &self.pattern
    }

    /// Canonical key of the shape.
    #[must_use]
    pub fn key(&self) -> &ShapeKey {
        &self.key
    }

    /// Complement-size buckets, ascending by size.
    #[must_use]
    pub fn complements(&self) -> &BTreeMap<Count, Vec<NamedComplement>> {
        &self.complements
    }

    /// Named complements of exactly `complement_count` cards.
    #[must_use]
    pub fn bucket(&self, complement_count: Count) -> &[NamedComplement] {
        self.complements
            .get(&complement_count)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct complement sizes, ascending.
    pub fn complement_counts(&self) -> impl Iterator<Item = Count> + '_ {
        self.complements.keys().copied()
    }

    /// Append a named complement to its size bucket, creating the bucket if needed.
    pub(crate) fn push(&mut self, named: NamedComplement) {
        self.complements
            .entry(named.complement.total_count())
            .or_default()
            .push(named);
    }
}
