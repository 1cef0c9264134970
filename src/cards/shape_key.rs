//! Canonical keys for grouping identical shapes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::label::{Count, Label};

use super::card_set::CardSet;

/// Order-independent key for a card set's shape.
///
/// The key is the run-length encoding of `CardSet::sorted_cards()`: one
/// `(label, count)` pair per distinct label, ascending. Two card sets with
/// the same multiplicities always produce the same key, however they were
/// built. Keys are only used for grouping inside the catalogue.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShapeKey(SmallVec<[(Label, Count); 4]>);

impl ShapeKey {
    /// Key of a card set.
    ///
    /// The set already iterates one positive count per label in ascending
    /// order, which is exactly the run-length form.
    #[must_use]
    pub fn of(set: &CardSet) -> Self {
        Self(set.iter().map(|(label, count)| (label.clone(), count)).collect())
    }

    /// Key of an already sorted card sequence.
    #[must_use]
    pub fn from_sorted_cards(cards: &[Label]) -> Self {
        let mut runs: SmallVec<[(Label, Count); 4]> = SmallVec::new();
        for card in cards {
            if let Some((label, count)) = runs.last_mut() {
                if *label == *card {
                    *count += 1;
                    continue;
                }
            }
            runs.push((card.clone(), 1));
        }
        Self(runs)
    }

    /// The `(label, count)` runs in ascending label order.
    #[must_use]
    pub fn runs(&self) -> &[(Label, Count)] {
        &self.0
    }

    /// Total number of cards the key describes.
    #[must_use]
    pub fn total_count(&self) -> Count {
        self.0.iter().map(|(_, count)| *count).sum()
    }
}

impl std::fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (label, count)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}x{}", label, count)?;
        }
        write!(f, "]")
    }
}
