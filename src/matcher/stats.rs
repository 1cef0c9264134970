//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected while a partition search runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search branches entered.
    pub branches: u64,

    /// Candidates successfully subtracted from a hand.
    pub extractions: u64,

    /// Branches cut because the complement budget was already exceeded.
    pub pruned: u64,

    /// Completed branches rejected by the exact-total check.
    pub discarded: u64,

    /// Partitions handed to the caller.
    pub yielded: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of entered branches that were pruned.
    #[must_use]
    pub fn prune_ratio(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            self.pruned as f64 / self.branches as f64
        }
    }
}
