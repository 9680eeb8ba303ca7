//! Predicate-driven subset search.
//!
//! [`SubsetSearch`] drives the combination enumerator with a
//! [`SubsetPredicate`], collecting every subset the predicate reports as a
//! match. The pruning policy is fixed when the engine is created:
//!
//! - **Uniform sign**: stop descending once a subset matches or overshoots.
//!   Valid only when every item has the same sign, so supersets can never
//!   re-approach the goal.
//! - **Mixed sign**: exhaustive `2^N - 1` enumeration, required when item
//!   contributions may be positive, negative or zero.

use std::marker::PhantomData;

use subsum_core::{PredicateResult, SubsetPredicate};

use crate::combinations::{visit_combinations, CombinationVisitor};

/// Pruning policy for a [`SubsetSearch`], fixed for the life of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PruneMode {
    UniformSign,
    MixedSign,
}

impl PruneMode {
    /// Returns true if supersets of the current subset cannot match.
    fn is_end_node(self, result: PredicateResult) -> bool {
        match self {
            PruneMode::UniformSign => {
                matches!(result, PredicateResult::Match | PredicateResult::TooMany)
            }
            PruneMode::MixedSign => false,
        }
    }
}

/// Finds subsets of a collection that match a [`SubsetPredicate`].
///
/// Not thread safe: an instance holds the predicate's running state and the
/// match list for the search in progress. Each call to
/// [`find_subsets`](SubsetSearch::find_subsets) resets both, so a single
/// instance may be reused for sequential searches.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use subsum_core::DecimalSumPredicate;
/// use subsum_solver::SubsetSearch;
///
/// let items: Vec<Decimal> = [10, 20, 30].into_iter().map(Decimal::from).collect();
/// let mut search =
///     SubsetSearch::uniform_sign(DecimalSumPredicate::new(|v: &Decimal| *v, Decimal::from(30)));
///
/// let matches = search.find_subsets(&items);
/// assert_eq!(matches.len(), 2); // {10, 20} and {30}
/// ```
pub struct SubsetSearch<T, P> {
    criteria: P,
    mode: PruneMode,
    _marker: PhantomData<fn(&T)>,
}

impl<T, P> SubsetSearch<T, P>
where
    T: Clone,
    P: SubsetPredicate<T>,
{
    /// Creates a search for a collection whose items all share one sign
    /// (e.g. all positive or all negative, with no zeros).
    ///
    /// Supersets of a subset for which the predicate returns
    /// [`Match`](PredicateResult::Match) or
    /// [`TooMany`](PredicateResult::TooMany) are not considered. Running
    /// mixed-sign items through this mode silently misses matches; that is a
    /// caller responsibility, not a runtime-checked condition.
    pub fn uniform_sign(criteria: P) -> Self {
        SubsetSearch { criteria, mode: PruneMode::UniformSign, _marker: PhantomData }
    }

    /// Creates a search for a collection with mixed-sign items (positive,
    /// negative and/or zero). All possible subsets are considered.
    pub fn mixed_sign(criteria: P) -> Self {
        SubsetSearch { criteria, mode: PruneMode::MixedSign, _marker: PhantomData }
    }

    /// Performs the search and returns the matching subsets in the order
    /// discovered (depth-first prefix order).
    pub fn find_subsets(&mut self, items: &[T]) -> Vec<Vec<T>> {
        tracing::debug!(item_count = items.len(), mode = ?self.mode, "starting subset search");
        self.criteria.reset();
        let mut matches = Vec::new();
        let mut accumulator = Accumulator {
            criteria: &mut self.criteria,
            matches: &mut matches,
            mode: self.mode,
        };
        visit_combinations(items, &mut accumulator);
        tracing::debug!(match_count = matches.len(), "finished subset search");
        matches
    }
}

struct Accumulator<'a, T, P> {
    criteria: &'a mut P,
    matches: &'a mut Vec<Vec<T>>,
    mode: PruneMode,
}

impl<T, P> CombinationVisitor<T> for Accumulator<'_, T, P>
where
    T: Clone,
    P: SubsetPredicate<T>,
{
    fn item_added(&mut self, subset: &[T], item: &T) -> bool {
        let result = self.criteria.apply(item);
        if result.is_match() {
            self.matches.push(subset.to_vec());
        }
        !self.mode.is_end_node(result)
    }

    fn item_removed(&mut self, item: &T) {
        self.criteria.remove(item);
    }
}
