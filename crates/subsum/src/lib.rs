//! subsum - Find subsets of a collection that meet some criteria
//!
//! Two complementary engines:
//! - [`sum`] finds subsets having a specific sum, via bounded dynamic
//!   programming over fixed-point values. Use it for the common
//!   "reconcile a target amount against a pool of candidates" case.
//! - [`SubsetSearch`] finds subsets matching an arbitrary accumulating
//!   [`SubsetPredicate`], via pruned depth-first enumeration. Use it when the
//!   criterion is more than a plain sum.
//!
//! # Example
//!
//! ```rust
//! use subsum::prelude::*;
//!
//! let matches = subsum::sum::subsets(&[1, 3, 4, 4, 5, 9], 13, None);
//! assert_eq!(matches.len(), 6);
//!
//! let items: Vec<Decimal> = [10, 20, 30].into_iter().map(Decimal::from).collect();
//! let mut search =
//!     SubsetSearch::uniform_sign(DecimalSumPredicate::new(|v: &Decimal| *v, Decimal::from(30)));
//! assert_eq!(search.find_subsets(&items).len(), 2);
//! ```

// Predicate types
pub use subsum_core::{
    and, AndPredicate, DecimalSumPredicate, FixedPointScale, PredicateResult, Result,
    SubsetPredicate, SubsumError,
};

// Search engines
pub use subsum_solver::{visit_combinations, CombinationVisitor, SubsetSearch};

/// The subset-sum solver entry points.
pub use subsum_solver::sum;

pub mod prelude {
    pub use rust_decimal::Decimal;

    pub use super::sum::{subset, subsets, SumSearchConfig};
    pub use super::{
        DecimalSumPredicate, PredicateResult, SubsetPredicate, SubsetSearch,
    };
}
