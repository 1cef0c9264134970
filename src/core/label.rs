//! Card labels and counts.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Multiplicity of a label, and every total derived from multiplicities.
///
/// Signed so that a negative argument can be rejected instead of being
/// unrepresentable; wide so that combinatorial totals stay exact.
pub type Count = i128;

/// Opaque identifier for one kind of card.
///
/// Labels are ordered by their text; that order is what makes
/// `CardSet::sorted_cards` and shape keys canonical.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub String);

impl Label {
    /// Create a new label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
