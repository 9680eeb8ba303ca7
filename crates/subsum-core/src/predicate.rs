//! Stateful search criteria for subset matching.
//!
//! A [`SubsetPredicate`] only needs to maintain enough state to judge the
//! current subset. For example, to find subsets of numbers having a specific
//! sum, the predicate only needs a running total.

use crate::result::PredicateResult;

/// Criteria used by the search engine to find matching subsets.
///
/// [`apply`](SubsetPredicate::apply) and [`remove`](SubsetPredicate::remove)
/// must be exact inverses: after any sequence of calls that returns the
/// accumulated items to a previous multiset, the predicate's state must be
/// identical to what it was before. Floating-point accumulators break this
/// invariant; use integer or exact decimal arithmetic.
///
/// An instance is scoped to a single search at a time. The engine calls
/// [`reset`](SubsetPredicate::reset) at the start of each search.
pub trait SubsetPredicate<T> {
    /// Adds an item to the current subset and returns the new match status.
    fn apply(&mut self, item: &T) -> PredicateResult;

    /// Removes an item from the current subset.
    ///
    /// Calls are paired LIFO with [`apply`](SubsetPredicate::apply).
    fn remove(&mut self, item: &T);

    /// Resets the state of this predicate for a new search.
    fn reset(&mut self);
}

/// Creates a predicate that combines the results of other predicates.
///
/// `apply` invokes every operand (each maintains its own state) and folds
/// their results with [`PredicateResult::and`], seeded with the first
/// operand's result. `remove` and `reset` delegate to all operands.
pub fn and<T>(predicates: Vec<Box<dyn SubsetPredicate<T>>>) -> AndPredicate<T> {
    assert!(!predicates.is_empty(), "and() requires at least one predicate");
    AndPredicate { predicates }
}

/// The AND-combination of multiple predicates. Created by [`and`].
pub struct AndPredicate<T> {
    predicates: Vec<Box<dyn SubsetPredicate<T>>>,
}

impl<T> SubsetPredicate<T> for AndPredicate<T> {
    fn apply(&mut self, item: &T) -> PredicateResult {
        let mut iter = self.predicates.iter_mut();
        // Non-empty by construction.
        let mut result = match iter.next() {
            Some(first) => first.apply(item),
            None => return PredicateResult::NoMatch,
        };
        for predicate in iter {
            result = result.and(predicate.apply(item));
        }
        result
    }

    fn remove(&mut self, item: &T) {
        for predicate in &mut self.predicates {
            predicate.remove(item);
        }
    }

    fn reset(&mut self) {
        for predicate in &mut self.predicates {
            predicate.reset();
        }
    }
}
