//! Enumeration of every sub-shape of a card set.

use crate::cards::CardSet;
use crate::core::error::Result;
use crate::core::label::{Count, Label};

/// Iterator over every sub-shape of a card set, the empty one first.
///
/// Each distinct label contributes a digit running `0..=count`; the last label
/// varies fastest. A set with counts `c1..cn` yields `(c1 + 1) * .. * (cn + 1)`
/// shapes, each an independent `CardSet`. Building a shape goes through the
/// checked `CardSet` constructor, so its errors are passed on to the caller.
#[derive(Clone, Debug)]
pub struct SubShapes {
    limits: Vec<(Label, Count)>,
    digits: Vec<Count>,
    done: bool,
}

impl SubShapes {
    /// Enumerate the sub-shapes of `set`.
    #[must_use]
    pub fn of(set: &CardSet) -> Self {
        let limits: Vec<(Label, Count)> =
            set.iter().map(|(label, count)| (label.clone(), count)).collect();
        let digits = vec![0; limits.len()];
        Self {
            limits,
            digits,
            done: false,
        }
    }

    fn advance(&mut self) {
        for i in (0..self.limits.len()).rev() {
            if self.digits[i] < self.limits[i].1 {
                self.digits[i] += 1;
                for later in &mut self.digits[i + 1..] {
                    *later = 0;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for SubShapes {
    type Item = Result<CardSet>;

    fn next(&mut self) -> Option<Result<CardSet>> {
        if self.done {
            return None;
        }

        let shape = CardSet::from_counts(
            self.limits
                .iter()
                .zip(&self.digits)
                .map(|((label, _), &digit)| (label.clone(), digit)),
        );

        self.advance();
        Some(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_product() {
        let set = CardSet::from_counts([("A", 3), ("B", 1), ("C", 2)]).unwrap();
        assert_eq!(SubShapes::of(&set).count(), 4 * 2 * 3);
    }

    #[test]
    fn test_order() {
        let set = CardSet::from_counts([("A", 2), ("B", 1)]).unwrap();
        let shapes: Vec<String> = SubShapes::of(&set).map(|s| s.unwrap().to_string()).collect();
        assert_eq!(
            shapes,
            vec![
                "CardSet{}",
                "CardSet{B: 1}",
                "CardSet{A: 1}",
                "CardSet{A: 1, B: 1}",
                "CardSet{A: 2}",
                "CardSet{A: 2, B: 1}",
            ]
        );
    }

    #[test]
    fn test_empty_set_yields_only_empty_shape() {
        let shapes: Vec<_> = SubShapes::of(&CardSet::new()).collect();
        assert_eq!(shapes, vec![Ok(CardSet::new())]);
    }

    #[test]
    fn test_every_shape_fits() {
        let set = CardSet::from_counts([("A", 2), ("B", 2)]).unwrap();
        assert!(SubShapes::of(&set).all(|shape| set.contains(&shape.unwrap())));
    }

    #[test]
    fn test_only_first_shape_is_empty() {
        let set = CardSet::from_counts([("A", 3), ("B", 1)]).unwrap();
        let shapes: Vec<CardSet> = SubShapes::of(&set).collect::<Result<_>>().unwrap();
        assert!(shapes[0].is_empty());
        assert!(shapes[1..].iter().all(|shape| !shape.is_empty()));
        assert_eq!(shapes.last(), Some(&set));
    }
}
