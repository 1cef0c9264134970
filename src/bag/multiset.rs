//! Generic multiset of tagged items.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::error::{Error, Result};

use super::multisubset::Multisubset;
use super::tagger::Tagger;

/// One way to split a bag: the drawn subset and everything left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample<T, K> {
    pub subset: Multisubset<T, K>,
    pub complement: Multisubset<T, K>,
}

/// Multiset of items grouped by a derived tag.
///
/// Items with the same tag are interchangeable: removal takes the most
/// recently added one, and sampling never distinguishes between them.
///
/// ## Example
///
/// ```
/// use rules_card::bag::{Bag, Tagger};
///
/// struct BySuit;
///
/// impl Tagger<(char, u8)> for BySuit {
///     type Tag = char;
///
///     fn tag(&self, card: &(char, u8)) -> char {
///         card.0
///     }
/// }
///
/// let mut bag = Bag::new(BySuit);
/// bag.add(('H', 3));
/// bag.add(('H', 9));
/// bag.add(('S', 1));
///
/// assert_eq!(bag.count(&'H'), 2);
/// assert_eq!(bag.remove_one(&'H').unwrap(), ('H', 9));
///
/// // (1 + 1) * (1 + 1) ways to split one heart and one spade
/// assert_eq!(bag.samples().count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Bag<T, G: Tagger<T>> {
    tagger: G,

    /// Groups in first-insertion order.
    groups: Vec<(G::Tag, SmallVec<[T; 4]>)>,

    /// Tag -> position in `groups`.
    index: FxHashMap<G::Tag, usize>,
}

impl<T, G: Tagger<T>> Bag<T, G> {
    /// Create an empty bag using `tagger` to group items.
    pub fn new(tagger: G) -> Self {
        Self {
            tagger,
            groups: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add an item under its derived tag.
    pub fn add(&mut self, item: T) {
        let tag = self.tagger.tag(&item);
        let position = match self.index.get(&tag) {
            Some(&position) => position,
            None => {
                self.groups.push((tag.clone(), SmallVec::new()));
                self.index.insert(tag, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[position].1.push(item);
    }

    /// Remove and return the most recently added item under `tag`.
    pub fn remove_one(&mut self, tag: &G::Tag) -> Result<T> {
        let missing = || Error::MissingTag {
            tag: format!("{:?}", tag),
        };

        let position = *self.index.get(tag).ok_or_else(missing)?;
        let item = self.groups[position].1.pop().ok_or_else(missing)?;

        if self.groups[position].1.is_empty() {
            self.groups.remove(position);
            self.index.remove(tag);
            for slot in self.index.values_mut() {
                if *slot > position {
                    *slot -= 1;
                }
            }
        }

        Ok(item)
    }

    /// Number of items under `tag`.
    #[must_use]
    pub fn count(&self, tag: &G::Tag) -> usize {
        self.index
            .get(tag)
            .map_or(0, |&position| self.groups[position].1.len())
    }

    /// Distinct tags currently tracked, in first-insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &G::Tag> + '_ {
        self.groups.iter().map(|(tag, _)| tag)
    }

    /// Total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }

    /// Check if the bag holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Lazily enumerate every subset/complement split along tag groups.
    ///
    /// A group of `k` items contributes `k + 1` split points: all items left
    /// in the complement, then one more moved into the subset at a time in
    /// insertion order. The sequence therefore has the product of
    /// `(group size + 1)` entries; an empty bag yields one empty split.
    pub fn samples(&self) -> Samples<T, G::Tag>
    where
        T: Clone,
    {
        Samples::new(self.groups.clone())
    }
}

/// Iterator over the splits of a bag. See [`Bag::samples`].
#[derive(Clone, Debug)]
pub struct Samples<T, K> {
    groups: Vec<(K, SmallVec<[T; 4]>)>,

    /// Items of each group currently moved into the subset.
    split: Vec<usize>,

    done: bool,
}

impl<T, K> Samples<T, K> {
    fn new(groups: Vec<(K, SmallVec<[T; 4]>)>) -> Self {
        let split = vec![0; groups.len()];
        Self {
            groups,
            split,
            done: false,
        }
    }

    /// Advance to the next split; the last group varies fastest.
    fn advance(&mut self) {
        for i in (0..self.groups.len()).rev() {
            if self.split[i] < self.groups[i].1.len() {
                self.split[i] += 1;
                for later in &mut self.split[i + 1..] {
                    *later = 0;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl<T, K> Iterator for Samples<T, K>
where
    T: Clone,
    K: Clone + Ord,
{
    type Item = Sample<T, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut subset = Vec::with_capacity(self.groups.len());
        let mut complement = Vec::with_capacity(self.groups.len());
        for ((tag, items), &moved) in self.groups.iter().zip(&self.split) {
            subset.push((tag.clone(), SmallVec::from(&items[..moved])));
            complement.push((tag.clone(), SmallVec::from(&items[moved..])));
        }

        self.advance();

        Some(Sample {
            subset: Multisubset::from_groups(subset),
            complement: Multisubset::from_groups(complement),
        })
    }
}
