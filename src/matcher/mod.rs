//! Matching hands against the catalogue.
//!
//! ## Key Types
//!
//! - `MatchOptions`: complement constraints and the optional exact total
//! - `Matcher`: filtered, ordered candidate list over a borrowed catalogue
//! - `Partitions`: lazy iterator running the backtracking search
//! - `Partition`: one decomposition, `parts` plus leftover `rest`
//! - `Part` / `Bucket`: a candidate shape and its surviving complement buckets
//! - `SearchStats`: branch, prune and yield counters

pub mod config;
pub mod part;
pub mod search;
pub mod stats;

pub use config::MatchOptions;
pub use part::{Bucket, Part, Partition};
pub use search::{Matcher, Partitions};
pub use stats::SearchStats;
