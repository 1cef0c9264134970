//! Exact-count multiset of card labels.
//!
//! A `CardSet` maps each label to a strictly positive count. Entries that
//! would reach zero are deleted, never stored, so two sets with the same
//! contents are always equal regardless of how they were built.
//!
//! The map is persistent (`im::OrdMap`): cloning is O(1) and mutating a clone
//! never affects the source. The search relies on this to hand every branch
//! its own copy of the remaining hand.
//!
//! The set-wide total is kept alongside the map and checked on every `add`,
//! so `total_count` is always the exact sum of the stored counts.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::bag::{Bag, IdentityTagger};
use crate::core::error::{Error, Result};
use crate::core::label::{Count, Label};

/// Exact-count multiset of card labels.
///
/// ## Example
///
/// ```
/// use rules_card::CardSet;
///
/// let mut hand = CardSet::new();
/// hand.add("K", 2).unwrap();
/// hand.add_one("Q").unwrap();
///
/// assert_eq!(hand.count("K"), 2);
/// assert_eq!(hand.total_count(), 3);
/// assert_eq!(hand.to_string(), "CardSet{K: 2, Q: 1}");
///
/// hand.remove("K", 2).unwrap();
/// assert_eq!(hand.count("K"), 0);
/// assert_eq!(hand.distinct_len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OrdMap<Label, Count>", into = "OrdMap<Label, Count>")]
pub struct CardSet {
    counts: OrdMap<Label, Count>,
    total: Count,
}

impl CardSet {
    /// Create an empty card set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a card set from `(label, count)` pairs.
    ///
    /// Pairs for the same label accumulate. Fails on a negative count, or with
    /// `CountOverflow` if a label's count or the total leaves the `Count` range.
    pub fn from_counts<I, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, Count)>,
        L: Into<Label>,
    {
        let mut set = Self::new();
        for (label, count) in pairs {
            set.add(label, count)?;
        }
        Ok(set)
    }

    /// Add `count` copies of `label`.
    ///
    /// Adding zero copies of an absent label stores nothing. On overflow of
    /// either the label's count or the set total nothing changes.
    pub fn add(&mut self, label: impl Into<Label>, count: Count) -> Result<()> {
        if count < 0 {
            return Err(Error::InvalidArgument { count });
        }

        let label = label.into();
        let (Some(next), Some(total)) = (
            self.count(label.as_str()).checked_add(count),
            self.total.checked_add(count),
        ) else {
            return Err(Error::CountOverflow { label: label.0 });
        };

        if next > 0 {
            self.counts.insert(label, next);
            self.total = total;
        }
        Ok(())
    }

    /// Add a single copy of `label`.
    pub fn add_one(&mut self, label: impl Into<Label>) -> Result<()> {
        self.add(label, 1)
    }

    /// Remove `count` copies of `label`.
    ///
    /// Fails with `InsufficientCount` if fewer than `count` copies are stored.
    pub fn remove(&mut self, label: &str, count: Count) -> Result<()> {
        if count < 0 {
            return Err(Error::InvalidArgument { count });
        }

        let available = self.count(label);
        if count > available {
            return Err(Error::InsufficientCount {
                label: label.to_string(),
                requested: count,
                available,
            });
        }

        let next = available - count;
        self.total -= count;
        if next <= 0 {
            self.counts.remove(label);
        } else {
            self.counts.insert(Label::new(label), next);
        }
        Ok(())
    }

    /// Remove a single copy of `label`.
    pub fn remove_one(&mut self, label: &str) -> Result<()> {
        self.remove(label, 1)
    }

    /// Number of copies of `label` (0 if absent).
    #[must_use]
    pub fn count(&self, label: &str) -> Count {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total_count(&self) -> Count {
        self.total
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the set holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(label, count)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, Count)> + '_ {
        self.counts.iter().map(|(label, count)| (label, *count))
    }

    /// Iterate distinct labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.counts.keys()
    }

    /// Expand to one entry per card, sorted ascending.
    ///
    /// The length always equals `total_count()`.
    #[must_use]
    pub fn sorted_cards(&self) -> Vec<Label> {
        let mut cards = Vec::new();
        for (label, count) in self.iter() {
            let mut copies = 0;
            while copies < count {
                cards.push(label.clone());
                copies += 1;
            }
        }
        cards.sort();
        cards
    }

    /// Check if every label of `other` is present here at least as often.
    #[must_use]
    pub fn contains(&self, other: &CardSet) -> bool {
        other.iter().all(|(label, count)| count <= self.count(label.as_str()))
    }

    /// Subtract `pattern` if it fits.
    ///
    /// Returns `None` when `pattern` is empty or needs more of some label than
    /// this set holds; the source is left untouched either way.
    #[must_use]
    pub fn try_extract(&self, pattern: &CardSet) -> Option<CardSet> {
        if pattern.is_empty() || !self.contains(pattern) {
            return None;
        }
        self.subtract(pattern).ok()
    }

    /// Return `self - other`, failing if `other` does not fit.
    pub fn subtract(&self, other: &CardSet) -> Result<CardSet> {
        let mut rest = self.clone();
        for (label, count) in other.iter() {
            rest.remove(label.as_str(), count)?;
        }
        Ok(rest)
    }

    /// View this set as a bag of individual cards, each tagged by its label.
    #[must_use]
    pub fn to_bag(&self) -> Bag<Label, IdentityTagger> {
        let mut bag = Bag::new(IdentityTagger);
        for card in self.sorted_cards() {
            bag.add(card);
        }
        bag
    }
}

impl<L: Into<Label>> FromIterator<L> for CardSet {
    /// Collect individual cards, one copy per item.
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            let label = label.into();
            let next = set.count(label.as_str()) + 1;
            set.counts.insert(label, next);
            set.total += 1;
        }
        set
    }
}

impl TryFrom<OrdMap<Label, Count>> for CardSet {
    type Error = Error;

    fn try_from(counts: OrdMap<Label, Count>) -> Result<Self> {
        Self::from_counts(counts)
    }
}

impl From<CardSet> for OrdMap<Label, Count> {
    fn from(set: CardSet) -> Self {
        set.counts
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardSet{{")?;
        for (i, (label, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", label, count)?;
        }
        write!(f, "}}")
    }
}
