//! Subsum Solver - Search engines for finding subsets of a collection
//!
//! Two complementary engines:
//! - [`SubsetSearch`] walks the power set of a sequence with a caller-supplied
//!   [`SubsetPredicate`](subsum_core::SubsetPredicate), pruning subtrees the
//!   predicate declares unreachable.
//! - [`sum`] is a bounded dynamic-programming solver for the common case of
//!   "find subset(s) summing to N", for integer and fixed-point decimal values.
//!
//! Both engines are single-threaded and CPU-bound; an engine instance must not
//! be shared across concurrent callers.

pub mod combinations;
pub mod search;
pub mod sum;

pub use combinations::{visit_combinations, CombinationVisitor};
pub use search::SubsetSearch;
pub use sum::{
    decimal_subset, decimal_subsets, decimal_sum_subsets, subset, subsets, subsets_with,
    SumSearchConfig,
};
