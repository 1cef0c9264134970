//! The rules card: a catalogue of named combinations plus hand partitioning.

use crate::cards::CardSet;
use crate::catalogue::Catalogue;
use crate::core::error::Result;
use crate::matcher::{MatchOptions, Matcher, Partitions};

/// Registered combinations and the match operation over them.
///
/// Every call to `partition` builds a fresh matcher, so options never leak
/// between calls and the catalogue is never modified by a query.
///
/// ## Example
///
/// ```
/// use rules_card::{CardSet, MatchOptions, RulesCard};
///
/// let mut rules = RulesCard::new();
/// rules
///     .register_card_set("Triple", &CardSet::from_counts([("A", 3)]).unwrap())
///     .unwrap();
///
/// let hand = CardSet::from_counts([("A", 3), ("B", 1)]).unwrap();
/// let exact = MatchOptions::new().with_complement_count(0);
///
/// let found: Vec<_> = rules.partition(&hand, &exact).collect();
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].rest.to_string(), "CardSet{B: 1}");
/// assert_eq!(found[0].parts[0].named_complements().next().unwrap().name, "Triple");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RulesCard {
    catalogue: Catalogue,
}

impl RulesCard {
    /// Create a rules card with no combinations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named combination.
    pub fn register_card_set(&mut self, name: impl Into<String>, combo: &CardSet) -> Result<()> {
        self.catalogue.register_card_set(name, combo)
    }

    /// Lazily enumerate the ways `source` splits into catalogued shapes.
    #[must_use]
    pub fn partition(&self, source: &CardSet, options: &MatchOptions) -> Partitions<'_> {
        Matcher::new(&self.catalogue, options).partition(source)
    }

    /// The underlying catalogue.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}
