//! Errors raised by the counting primitives.
//!
//! Every error is local to the call that raised it: a negative count, an
//! over-removal, a missing tag, or an overflowing total. The search itself
//! never fails; a candidate that does not fit a hand is simply not taken.

use thiserror::Error;

use super::label::Count;

/// Errors from `CardSet` and `Bag` operations.
///
/// # Examples
///
/// ```
/// use rules_card::{CardSet, Error};
///
/// let mut hand = CardSet::new();
/// assert_eq!(hand.add("A", -1), Err(Error::InvalidArgument { count: -1 }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A negative count was passed to `add` or `remove`.
    #[error("count ({count}) must be a non-negative integer")]
    InvalidArgument { count: Count },

    /// `remove` asked for more copies than are stored.
    #[error("cannot remove {requested} of '{label}': only {available} stored")]
    InsufficientCount {
        label: String,
        requested: Count,
        available: Count,
    },

    /// `Bag::remove_one` was called for a tag with no tracked items.
    #[error("no item tagged with '{tag}' exists")]
    MissingTag { tag: String },

    /// A count or total left the representable range.
    #[error("count for '{label}' overflowed")]
    CountOverflow { label: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
