//! Match configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::label::Count;

/// Options narrowing which catalogued shapes a match may use.
///
/// The complement constraints filter each prototype's complement-size
/// buckets; they combine freely. `total_complement_count` switches the search
/// to bounded mode, where the complement sizes of the chosen parts plus the
/// leftover must add up to exactly that total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Keep only buckets whose complement has exactly this many cards.
    pub complement_count: Option<Count>,

    /// Keep only buckets whose complement has at least this many cards.
    pub min_complement_count: Option<Count>,

    /// Keep only buckets whose complement has at most this many cards.
    pub max_complement_count: Option<Count>,

    /// Require chosen complement sizes plus leftover cards to equal this.
    pub total_complement_count: Option<Count>,
}

impl MatchOptions {
    /// Create options with no constraints (unbounded search over everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only use shapes that leave exactly `count` cards of their combination.
    #[must_use]
    pub fn with_complement_count(mut self, count: Count) -> Self {
        self.complement_count = Some(count);
        self
    }

    /// Only use shapes that leave at least `count` cards of their combination.
    #[must_use]
    pub fn with_min_complement_count(mut self, count: Count) -> Self {
        self.min_complement_count = Some(count);
        self
    }

    /// Only use shapes that leave at most `count` cards of their combination.
    #[must_use]
    pub fn with_max_complement_count(mut self, count: Count) -> Self {
        self.max_complement_count = Some(count);
        self
    }

    /// Switch to bounded mode with an exact total of `count`.
    #[must_use]
    pub fn with_total_complement_count(mut self, count: Count) -> Self {
        self.total_complement_count = Some(count);
        self
    }

    /// Check if a complement-size bucket passes every supplied constraint.
    #[must_use]
    pub fn admits(&self, complement_count: Count) -> bool {
        self.complement_count.map_or(true, |c| complement_count == c)
            && self.min_complement_count.map_or(true, |c| complement_count >= c)
            && self.max_complement_count.map_or(true, |c| complement_count <= c)
    }

    /// Check if the search runs in bounded-total mode.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.total_complement_count.is_some()
    }
}
