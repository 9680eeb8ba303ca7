//! Four-valued match status for subset predicates.
//!
//! The [`and`](PredicateResult::and) combination is defined by an explicit
//! table rather than a derived ordering, because the entries encode
//! asymmetric domain semantics: a subset that is `TooFew` for one predicate
//! and a `Match` for another is `NoMatch` overall, not a `Match`.

use std::fmt;

/// Status of the current subset as judged by a [`SubsetPredicate`](crate::SubsetPredicate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredicateResult {
    /// The subset has exceeded the goal.
    ///
    /// Should only be returned when it is certain that additional items will
    /// move farther from the goal (e.g. all items have the same sign).
    TooMany,

    /// The subset has not reached the goal.
    ///
    /// Should only be returned when it is certain that additional items will
    /// move toward the goal (e.g. all items have the same sign).
    TooFew,

    /// The subset does not match the goal, and additional items could move
    /// either nearer to or farther from it (e.g. mixed-sign items).
    NoMatch,

    /// The subset matches the goal.
    Match,
}

impl PredicateResult {
    /// Combines this result with another result for the same subset.
    ///
    /// `TooMany` is absorbing. The full table:
    ///
    /// | AND       | TooMany | TooFew  | NoMatch | Match   |
    /// |-----------|---------|---------|---------|---------|
    /// | `TooMany` | TooMany | TooMany | TooMany | TooMany |
    /// | `TooFew`  | TooMany | TooFew  | NoMatch | NoMatch |
    /// | `NoMatch` | TooMany | NoMatch | NoMatch | NoMatch |
    /// | `Match`   | TooMany | NoMatch | NoMatch | Match   |
    #[must_use]
    pub const fn and(self, other: PredicateResult) -> PredicateResult {
        use PredicateResult::{Match, NoMatch, TooFew, TooMany};
        match (self, other) {
            (TooMany, _) | (_, TooMany) => TooMany,
            (TooFew, TooFew) => TooFew,
            (TooFew, NoMatch) | (TooFew, Match) => NoMatch,
            (NoMatch, TooFew) | (NoMatch, NoMatch) | (NoMatch, Match) => NoMatch,
            (Match, TooFew) | (Match, NoMatch) => NoMatch,
            (Match, Match) => Match,
        }
    }

    /// Returns true if this result is [`Match`](PredicateResult::Match).
    #[inline]
    pub const fn is_match(self) -> bool {
        matches!(self, PredicateResult::Match)
    }
}

impl fmt::Display for PredicateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateResult::TooMany => write!(f, "TooMany"),
            PredicateResult::TooFew => write!(f, "TooFew"),
            PredicateResult::NoMatch => write!(f, "NoMatch"),
            PredicateResult::Match => write!(f, "Match"),
        }
    }
}
