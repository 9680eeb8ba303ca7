//! Goal-with-error sum predicate over exact decimal values.

use std::fmt;
use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::predicate::SubsetPredicate;
use crate::result::PredicateResult;

/// A [`SubsetPredicate`] that matches subsets whose values sum to a goal,
/// within an optional error margin.
///
/// The accumulator is a [`Decimal`], so `apply` and `remove` are exact
/// inverses. The direction of `TooFew`/`TooMany` is chosen once at
/// construction from the goal's sign, so that "too few" always means
/// "adding more items moves toward the goal".
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use subsum_core::{DecimalSumPredicate, PredicateResult, SubsetPredicate};
///
/// let mut predicate = DecimalSumPredicate::new(|v: &Decimal| *v, Decimal::TEN);
/// assert_eq!(PredicateResult::TooFew, predicate.apply(&Decimal::from(9)));
/// assert_eq!(PredicateResult::Match, predicate.apply(&Decimal::ONE));
/// assert_eq!(PredicateResult::TooMany, predicate.apply(&Decimal::ONE));
/// ```
pub struct DecimalSumPredicate<T, F> {
    adapter: F,
    total: Decimal,
    goal_minus_error: Decimal,
    goal_plus_error: Decimal,
    low_result: PredicateResult,
    high_result: PredicateResult,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F: Fn(&T) -> Decimal> DecimalSumPredicate<T, F> {
    /// Creates a predicate matching subsets that sum exactly to `goal`.
    ///
    /// `adapter` extracts the decimal value from a collection item.
    pub fn new(adapter: F, goal: Decimal) -> Self {
        Self::with_error(adapter, goal, Decimal::ZERO)
    }

    /// Creates a predicate matching subsets whose sum falls within
    /// `[goal - |error|, goal + |error|]`.
    pub fn with_error(adapter: F, goal: Decimal, error: Decimal) -> Self {
        let (low_result, high_result) = if goal.is_sign_negative() && !goal.is_zero() {
            (PredicateResult::TooMany, PredicateResult::TooFew)
        } else {
            (PredicateResult::TooFew, PredicateResult::TooMany)
        };
        DecimalSumPredicate {
            adapter,
            total: Decimal::ZERO,
            goal_minus_error: goal - error.abs(),
            goal_plus_error: goal + error.abs(),
            low_result,
            high_result,
            _marker: PhantomData,
        }
    }
}

impl<T, F: Fn(&T) -> Decimal> SubsetPredicate<T> for DecimalSumPredicate<T, F> {
    fn apply(&mut self, item: &T) -> PredicateResult {
        self.total += (self.adapter)(item);
        if self.total < self.goal_minus_error {
            self.low_result
        } else if self.total > self.goal_plus_error {
            self.high_result
        } else {
            PredicateResult::Match
        }
    }

    fn remove(&mut self, item: &T) {
        self.total -= (self.adapter)(item);
    }

    fn reset(&mut self) {
        self.total = Decimal::ZERO;
    }
}

impl<T, F> fmt::Debug for DecimalSumPredicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalSumPredicate(total: {}, goal: {} - {})",
            self.total, self.goal_minus_error, self.goal_plus_error
        )
    }
}
