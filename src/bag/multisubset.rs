//! One side of a bag sample.

use smallvec::SmallVec;

/// Items drawn from a bag, still grouped by tag.
///
/// Produced by `Bag::samples` as either the subset or the complement of a
/// split. Groups keep the bag's insertion order; empty groups are never kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multisubset<T, K> {
    groups: Vec<(K, SmallVec<[T; 4]>)>,
}

impl<T, K> Multisubset<T, K>
where
    K: Clone + Ord,
{
    pub(crate) fn from_groups(groups: Vec<(K, SmallVec<[T; 4]>)>) -> Self {
        Self {
            groups: groups.into_iter().filter(|(_, items)| !items.is_empty()).collect(),
        }
    }

    /// Total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }

    /// Check if no items were drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of items under `tag`.
    #[must_use]
    pub fn count(&self, tag: &K) -> usize {
        self.groups
            .iter()
            .find(|(group_tag, _)| group_tag == tag)
            .map_or(0, |(_, items)| items.len())
    }

    /// One tag per item, in group order.
    pub fn tags(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups
            .iter()
            .flat_map(|(tag, items)| std::iter::repeat(tag).take(items.len()))
    }

    /// All items, in group order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.groups.iter().flat_map(|(_, items)| items.iter())
    }

    /// One tag per item, sorted ascending.
    #[must_use]
    pub fn sorted_tags(&self) -> Vec<K> {
        let mut tags: Vec<K> = self.tags().cloned().collect();
        tags.sort();
        tags
    }

    /// Canonical key: equal for any two subsets with the same tag multiplicities.
    #[must_use]
    pub fn key(&self) -> Vec<K> {
        self.sorted_tags()
    }
}
