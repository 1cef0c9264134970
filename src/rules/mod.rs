//! Facade over the catalogue and matcher.
//!
//! `RulesCard` is what embedding applications hold: register combinations
//! once at startup, then partition as many hands as needed.

pub mod rules_card;

pub use rules_card::RulesCard;
