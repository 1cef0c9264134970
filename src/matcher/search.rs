//! Backtracking partition search.
//!
//! The search walks an ordered candidate list depth-first. At each step it
//! may take the current candidate (subtracting its pattern from the hand and
//! staying on the same candidate, so it can be taken again) and, in every
//! case, also skips to the next candidate with the hand unchanged. When the
//! list is exhausted the branch is a finished partition.
//!
//! ## Modes
//!
//! - **Unbounded**: every finished branch is yielded, leftover or not.
//! - **Bounded total**: each chosen part adds its complement size to a running
//!   total. Branches whose total already exceeds the bound are pruned, and a
//!   finished branch is yielded only if its total plus the leftover card count
//!   equals the bound exactly.
//!
//! The recursion is driven by an explicit frame stack so the search can
//! suspend after every yielded partition and resume on the next `next()`.
//! Dropping the iterator cancels the search.

use std::sync::Arc;

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::cards::CardSet;
use crate::catalogue::Catalogue;
use crate::core::label::Count;

use super::config::MatchOptions;
use super::part::{Bucket, Part, Partition};
use super::stats::SearchStats;

/// Filtered, ordered view of a catalogue ready to partition hands.
///
/// The matcher only borrows the catalogue; building one never mutates it.
#[derive(Clone, Debug)]
pub struct Matcher<'a> {
    candidates: Vec<Arc<Part<'a>>>,
    total_complement_count: Option<Count>,
}

impl<'a> Matcher<'a> {
    /// Filter `catalogue` by `options` into a candidate list.
    ///
    /// Buckets failing any complement constraint are dropped, and so are
    /// prototypes left without buckets. In bounded mode every surviving bucket
    /// becomes a separate candidate.
    #[must_use]
    pub fn new(catalogue: &'a Catalogue, options: &MatchOptions) -> Self {
        let mut candidates = Vec::new();

        for prototype in catalogue.prototypes() {
            let buckets: SmallVec<[Bucket<'a>; 2]> = prototype
                .complements()
                .iter()
                .filter(|(complement_count, _)| options.admits(**complement_count))
                .map(|(&complement_count, complements)| Bucket {
                    complement_count,
                    complements,
                })
                .collect();

            if buckets.is_empty() {
                continue;
            }

            if options.is_bounded() {
                for bucket in buckets {
                    candidates.push(Arc::new(Part::new(prototype, smallvec![bucket])));
                }
            } else {
                candidates.push(Arc::new(Part::new(prototype, buckets)));
            }
        }

        debug!(
            prototypes = catalogue.len(),
            candidates = candidates.len(),
            bounded = options.is_bounded(),
            "matcher.build"
        );

        Self {
            candidates,
            total_complement_count: options.total_complement_count,
        }
    }

    /// Candidates in search order.
    #[must_use]
    pub fn candidates(&self) -> &[Arc<Part<'a>>] {
        &self.candidates
    }

    /// Lazily enumerate the partitions of `source`.
    #[must_use]
    pub fn partition(&self, source: &CardSet) -> Partitions<'a> {
        Partitions::new(
            self.candidates.clone(),
            self.total_complement_count,
            source.clone(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Branch not yet examined.
    Enter,
    /// Take branch finished (or never started); skip branch next.
    Skip { took: bool },
    /// Both branches finished.
    Done,
}

#[derive(Clone, Debug)]
struct Frame {
    hand: CardSet,
    index: usize,
    spent: Count,
    stage: Stage,
}

/// Lazy iterator over the partitions of one hand. See [`Matcher::partition`].
#[derive(Clone, Debug)]
pub struct Partitions<'a> {
    candidates: Vec<Arc<Part<'a>>>,
    total_complement_count: Option<Count>,
    stack: Vec<Frame>,

    /// Parts taken along the current path.
    parts: Vec<Arc<Part<'a>>>,

    stats: SearchStats,
    finished: bool,
}

impl<'a> Partitions<'a> {
    fn new(
        candidates: Vec<Arc<Part<'a>>>,
        total_complement_count: Option<Count>,
        source: CardSet,
    ) -> Self {
        let root = Frame {
            hand: source,
            index: 0,
            spent: 0,
            stage: Stage::Enter,
        };
        Self {
            candidates,
            total_complement_count,
            stack: vec![root],
            parts: Vec::new(),
            stats: SearchStats::new(),
            finished: false,
        }
    }

    /// Statistics for the search so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            debug!(
                candidates = self.candidates.len(),
                branches = self.stats.branches,
                extractions = self.stats.extractions,
                pruned = self.stats.pruned,
                discarded = self.stats.discarded,
                yielded = self.stats.yielded,
                "matcher.exhausted"
            );
        }
    }
}

impl<'a> Iterator for Partitions<'a> {
    type Item = Partition<'a>;

    fn next(&mut self) -> Option<Partition<'a>> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.finish();
                return None;
            };

            match frame.stage {
                Stage::Enter => {
                    self.stats.branches += 1;

                    if let Some(total) = self.total_complement_count {
                        if frame.spent > total {
                            self.stats.pruned += 1;
                            self.stack.pop();
                            continue;
                        }
                    }

                    if frame.index >= self.candidates.len() {
                        let Some(leaf) = self.stack.pop() else {
                            continue;
                        };
                        let admitted = self.total_complement_count.map_or(true, |total| {
                            leaf.spent.checked_add(leaf.hand.total_count()) == Some(total)
                        });
                        if admitted {
                            self.stats.yielded += 1;
                            return Some(Partition {
                                rest: leaf.hand,
                                parts: self.parts.clone(),
                            });
                        }
                        self.stats.discarded += 1;
                        continue;
                    }

                    let candidate = &self.candidates[frame.index];
                    let Some(spent) = frame
                        .spent
                        .checked_add(candidate.complement_count().unwrap_or(0))
                    else {
                        // Past any representable bound.
                        self.stats.pruned += 1;
                        frame.stage = Stage::Skip { took: false };
                        continue;
                    };
                    match frame.hand.try_extract(candidate.pattern()) {
                        Some(rest) => {
                            let child = Frame {
                                hand: rest,
                                index: frame.index,
                                spent,
                                stage: Stage::Enter,
                            };
                            frame.stage = Stage::Skip { took: true };
                            self.stats.extractions += 1;
                            self.parts.push(Arc::clone(candidate));
                            self.stack.push(child);
                        }
                        None => frame.stage = Stage::Skip { took: false },
                    }
                }
                Stage::Skip { took } => {
                    if took {
                        self.parts.pop();
                    }
                    let child = Frame {
                        hand: std::mem::take(&mut frame.hand),
                        index: frame.index + 1,
                        spent: frame.spent,
                        stage: Stage::Enter,
                    };
                    frame.stage = Stage::Done;
                    self.stack.push(child);
                }
                Stage::Done => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, Count)]) -> CardSet {
        CardSet::from_counts(pairs.iter().copied()).unwrap()
    }

    fn catalogue_of(combos: &[(&str, &[(&str, Count)])]) -> Catalogue {
        let mut catalogue = Catalogue::new();
        for (name, pairs) in combos {
            catalogue.register_card_set(*name, &set(pairs)).unwrap();
        }
        catalogue
    }

    #[test]
    fn test_empty_candidates_yield_source() {
        let catalogue = Catalogue::new();
        let matcher = Matcher::new(&catalogue, &MatchOptions::default());
        let source = set(&[("A", 2)]);

        let results: Vec<_> = matcher.partition(&source).collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rest, source);
        assert!(results[0].parts.is_empty());
    }

    #[test]
    fn test_unbounded_yield_order() {
        let catalogue = catalogue_of(&[("Pair", &[("A", 2)])]);
        let matcher = Matcher::new(&catalogue, &MatchOptions::default());

        // Candidates: {A:1}, {A:2}
        let results: Vec<String> = matcher
            .partition(&set(&[("A", 2)]))
            .map(|p| p.to_string())
            .collect();
        assert_eq!(
            results,
            vec![
                "[CardSet{A: 1} + CardSet{A: 1}] rest CardSet{}",
                "[CardSet{A: 1}] rest CardSet{A: 1}",
                "[CardSet{A: 2}] rest CardSet{}",
                "[] rest CardSet{A: 2}",
            ]
        );
    }

    #[test]
    fn test_filtering_drops_buckets_and_prototypes() {
        let catalogue = catalogue_of(&[("Triple", &[("A", 3)])]);

        let matcher = Matcher::new(&catalogue, &MatchOptions::new().with_complement_count(0));
        assert_eq!(matcher.candidates().len(), 1);
        assert_eq!(matcher.candidates()[0].pattern(), &set(&[("A", 3)]));

        let matcher = Matcher::new(&catalogue, &MatchOptions::new().with_min_complement_count(1));
        assert_eq!(matcher.candidates().len(), 2);

        let matcher = Matcher::new(&catalogue, &MatchOptions::new().with_min_complement_count(9));
        assert!(matcher.candidates().is_empty());
    }

    #[test]
    fn test_bounded_splits_buckets() {
        // {A:1} completes Pair with 1 to spare and Triple with 2 to spare.
        let catalogue = catalogue_of(&[("Pair", &[("A", 2)]), ("Triple", &[("A", 3)])]);

        let unbounded = Matcher::new(&catalogue, &MatchOptions::default());
        assert_eq!(unbounded.candidates().len(), 3);
        assert_eq!(unbounded.candidates()[0].buckets().len(), 2);
        assert_eq!(unbounded.candidates()[0].complement_count(), None);

        let bounded = Matcher::new(&catalogue, &MatchOptions::new().with_total_complement_count(0));
        // {A:1}x2 buckets, {A:2}x2 buckets, {A:3}x1 bucket
        assert_eq!(bounded.candidates().len(), 5);
        assert!(bounded.candidates().iter().all(|c| c.complement_count().is_some()));
    }

    #[test]
    fn test_bounded_requires_exact_total() {
        let catalogue = catalogue_of(&[("Triple", &[("A", 3)])]);
        let options = MatchOptions::new().with_total_complement_count(1);
        let matcher = Matcher::new(&catalogue, &options);

        // {A:2} leaves 1 of Triple missing and nothing over: 1 + 0 = 1.
        let results: Vec<_> = matcher.partition(&set(&[("A", 2)])).collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].patterns().cloned().collect::<Vec<_>>(), vec![set(&[("A", 2)])]);
        assert!(results[0].rest.is_empty());
        assert_eq!(results[0].complement_total(), Some(1));
    }

    #[test]
    fn test_bounded_prunes() {
        let catalogue = catalogue_of(&[("Triple", &[("A", 3)])]);
        let matcher = Matcher::new(&catalogue, &MatchOptions::new().with_total_complement_count(0));

        let mut partitions = matcher.partition(&set(&[("A", 6)]));
        let results: Vec<_> = partitions.by_ref().collect();

        // Only {A:3} + {A:3} spends nothing and leaves nothing.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].parts.len(), 2);
        assert!(partitions.stats().pruned > 0);
        assert_eq!(partitions.stats().yielded, 1);
    }

    #[test]
    fn test_bounded_total_at_count_limit() {
        let catalogue = catalogue_of(&[("Pair", &[("A", 2)])]);
        let options = MatchOptions::new().with_total_complement_count(Count::MAX);
        let matcher = Matcher::new(&catalogue, &options);

        // Nothing fits; the untouched hand alone accounts for the total.
        let results: Vec<_> = matcher.partition(&set(&[("B", Count::MAX)])).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].parts.is_empty());

        let results: Vec<_> = matcher
            .partition(&set(&[("A", 1), ("B", Count::MAX - 1)]))
            .map(|p| p.to_string())
            .collect();
        assert_eq!(
            results,
            vec![
                format!("[CardSet{{A: 1}}] rest CardSet{{B: {}}}", Count::MAX - 1),
                format!("[] rest CardSet{{A: 1, B: {}}}", Count::MAX - 1),
            ]
        );
    }

    #[test]
    fn test_lazy_resumption() {
        let catalogue = catalogue_of(&[("Pair", &[("A", 2)])]);
        let matcher = Matcher::new(&catalogue, &MatchOptions::default());

        let mut partitions = matcher.partition(&set(&[("A", 2)]));
        let first = partitions.next().unwrap();
        assert_eq!(first.parts.len(), 2);
        assert_eq!(partitions.stats().yielded, 1);

        let remaining: Vec<_> = partitions.collect();
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn test_matcher_reusable_across_hands() {
        let catalogue = catalogue_of(&[("Pair", &[("A", 2)])]);
        let matcher = Matcher::new(&catalogue, &MatchOptions::default());

        assert_eq!(matcher.partition(&set(&[("A", 1)])).count(), 2);
        assert_eq!(matcher.partition(&set(&[("B", 1)])).count(), 1);
    }
}
