//! Tagging capability for bag items.

use std::fmt::Debug;
use std::hash::Hash;

/// Derives the grouping tag of a bag item.
///
/// Items sharing a tag are interchangeable as far as the bag is concerned.
pub trait Tagger<T> {
    /// The tag type items are grouped by.
    type Tag: Clone + Eq + Hash + Ord + Debug;

    /// Tag an item.
    fn tag(&self, item: &T) -> Self::Tag;
}

/// Tags every item with a copy of itself.
///
/// This is the card-set specialization: a card's label is its own tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityTagger;

impl<T> Tagger<T> for IdentityTagger
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    type Tag = T;

    fn tag(&self, item: &T) -> T {
        item.clone()
    }
}
