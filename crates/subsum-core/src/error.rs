//! Error types for subsum

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for subsum operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsumError {
    /// A decimal value carries more fractional digits than the shared scale
    /// can represent, so converting it to fixed point would silently round.
    #[error("value {value} has more than {scale} fractional digits")]
    Precision { value: Decimal, scale: u32 },

    /// A decimal value scaled to fixed point does not fit in an i64.
    #[error("value {value} overflows i64 at scale {scale}")]
    Overflow { value: Decimal, scale: u32 },
}

/// Result type alias for subsum operations
pub type Result<T> = std::result::Result<T, SubsumError>;
