//! Subsum Core - Predicate and fixed-point types for subset searching
//!
//! This crate provides the fundamental abstractions for subsum:
//! - The four-valued [`PredicateResult`] algebra with its AND-combination table
//! - The [`SubsetPredicate`] trait for stateful, accumulating search criteria
//! - [`DecimalSumPredicate`] for goal-with-error sum matching over exact decimals
//! - [`FixedPointScale`] for lossless decimal to fixed-point conversion

pub mod decimal;
pub mod error;
pub mod predicate;
pub mod result;
pub mod scale;

pub use decimal::DecimalSumPredicate;
pub use error::{Result, SubsumError};
pub use predicate::{and, AndPredicate, SubsetPredicate};
pub use result::PredicateResult;
pub use scale::FixedPointScale;
