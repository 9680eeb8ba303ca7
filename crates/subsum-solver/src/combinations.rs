//! Depth-first enumeration of the subsets of a sequence.
//!
//! [`visit_combinations`] visits every one of the `2^N - 1` non-empty subsets
//! of an ordered sequence, one visitor call per subset. The traversal uses an
//! explicit stack of resume indices, so call-stack depth stays constant no
//! matter how many items there are.

use smallvec::SmallVec;

/// Receives each subset as the enumeration extends and backtracks.
pub trait CombinationVisitor<T> {
    /// Notification that an item was added to the current subset.
    ///
    /// `subset` is the current path, ending with `item`.
    ///
    /// Returns true to also visit the supersets of `subset`; returning false
    /// prunes that entire subtree, which is the core performance lever of the
    /// search.
    fn item_added(&mut self, subset: &[T], item: &T) -> bool;

    /// Notification that an item was removed from the current subset.
    ///
    /// Paired LIFO with [`item_added`](CombinationVisitor::item_added): every
    /// add is matched by exactly one later remove.
    fn item_removed(&mut self, item: &T);
}

/// Generates all subsets of `items` and passes them to `visitor`.
///
/// Subsets are visited depth-first in prefix order: the current path is
/// repeatedly extended with the next item (in input order) for as long as the
/// visitor returns true, then backtracks one item at a time.
pub fn visit_combinations<T, V>(items: &[T], visitor: &mut V)
where
    T: Clone,
    V: CombinationVisitor<T>,
{
    let mut stack: SmallVec<[usize; 16]> = SmallVec::new();
    stack.push(0);
    let mut path: Vec<T> = Vec::with_capacity(items.len());
    while let Some(resume) = stack.pop() {
        let mut index = resume;
        while index < items.len() {
            let item = &items[index];
            path.push(item.clone());
            index += 1;
            if visitor.item_added(&path, item) {
                stack.push(index);
            } else {
                path.pop();
                visitor.item_removed(item);
            }
        }
        if let Some(item) = path.pop() {
            visitor.item_removed(&item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collector {
        subsets: Vec<Vec<&'static str>>,
        removed_count: usize,
        prune_on: Option<&'static str>,
    }

    impl Collector {
        fn new(prune_on: Option<&'static str>) -> Self {
            Collector { subsets: Vec::new(), removed_count: 0, prune_on }
        }
    }

    impl CombinationVisitor<&'static str> for Collector {
        fn item_added(&mut self, subset: &[&'static str], _item: &&'static str) -> bool {
            self.subsets.push(subset.to_vec());
            match self.prune_on {
                Some(stop) => !subset.contains(&stop),
                None => true,
            }
        }

        fn item_removed(&mut self, _item: &&'static str) {
            self.removed_count += 1;
        }
    }

    #[test]
    fn visits_all_combinations() {
        let mut collector = Collector::new(None);

        visit_combinations(&["A", "B", "C", "D"], &mut collector);

        assert_eq!(collector.subsets.len(), 15);
        assert_eq!(collector.removed_count, 15);
        for expected in [
            vec!["A"],
            vec!["A", "B"],
            vec!["A", "B", "C"],
            vec!["A", "B", "C", "D"],
            vec!["A", "B", "D"],
            vec!["A", "C"],
            vec!["A", "C", "D"],
            vec!["A", "D"],
            vec!["B"],
            vec!["B", "C"],
            vec!["B", "C", "D"],
            vec!["B", "D"],
            vec!["C"],
            vec!["C", "D"],
            vec!["D"],
        ] {
            assert!(collector.subsets.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn pruning_skips_supersets() {
        let mut collector = Collector::new(Some("C"));

        visit_combinations(&["A", "B", "C", "D"], &mut collector);

        assert_eq!(collector.subsets.len(), 11);
        assert_eq!(collector.removed_count, 11);
        for expected in [
            vec!["A"],
            vec!["A", "B"],
            vec!["A", "B", "C"],
            vec!["A", "B", "D"],
            vec!["A", "C"],
            vec!["A", "D"],
            vec!["B"],
            vec!["B", "C"],
            vec!["B", "D"],
            vec!["C"],
            vec!["D"],
        ] {
            assert!(collector.subsets.contains(&expected), "missing {expected:?}");
        }
        // No visited subset extends past "C".
        for subset in &collector.subsets {
            if let Some(pos) = subset.iter().position(|i| *i == "C") {
                assert_eq!(pos, subset.len() - 1);
            }
        }
    }

    #[test]
    fn empty_input_visits_nothing() {
        let mut collector = Collector::new(None);

        visit_combinations(&[] as &[&'static str], &mut collector);

        assert!(collector.subsets.is_empty());
        assert_eq!(collector.removed_count, 0);
    }

    struct Counter {
        added: usize,
        removed: usize,
    }

    impl CombinationVisitor<usize> for Counter {
        fn item_added(&mut self, _subset: &[usize], _item: &usize) -> bool {
            self.added += 1;
            true
        }

        fn item_removed(&mut self, _item: &usize) {
            self.removed += 1;
        }
    }

    #[test]
    fn subset_count_matches_power_set() {
        for n in 1..=8usize {
            let items: Vec<usize> = (0..n).collect();

            let mut counter = Counter { added: 0, removed: 0 };
            visit_combinations(&items, &mut counter);

            assert_eq!(counter.added, (1 << n) - 1);
            assert_eq!(counter.removed, counter.added);
        }
    }
}
