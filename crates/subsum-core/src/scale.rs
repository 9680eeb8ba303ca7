//! Lossless decimal to fixed-point conversion.
//!
//! The subset-sum solver works on `i64` values. Decimal inputs are converted
//! by multiplying every value by the same power of ten, chosen so that no
//! conversion truncates. A conversion that would truncate fails with
//! [`SubsumError::Precision`] instead of silently rounding, because rounding
//! would break the apply/remove complementarity the search relies on.

use rust_decimal::Decimal;

use crate::error::{Result, SubsumError};

/// A shared power-of-ten multiplier for converting decimals to `i64`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use subsum_core::FixedPointScale;
///
/// let values: Vec<Decimal> = vec!["1.5".parse().unwrap(), "0.25".parse().unwrap()];
/// let scale = FixedPointScale::of_values(values.iter().copied());
/// assert_eq!(scale.digits(), 2);
/// assert_eq!(scale.to_fixed(values[0]).unwrap(), 150);
/// assert_eq!(scale.to_fixed(values[1]).unwrap(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPointScale {
    digits: u32,
}

impl FixedPointScale {
    /// Creates a scale with a fixed number of fractional digits.
    pub const fn new(digits: u32) -> Self {
        FixedPointScale { digits }
    }

    /// Derives the scale from a set of values: the maximum number of
    /// fractional digits carried by any value (0 for an empty set).
    pub fn of_values(values: impl IntoIterator<Item = Decimal>) -> Self {
        let digits = values.into_iter().map(|v| v.scale()).max().unwrap_or(0);
        FixedPointScale { digits }
    }

    /// Returns the number of fractional digits this scale preserves.
    #[inline]
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// Converts a decimal to its fixed-point `i64` representation.
    ///
    /// Trailing zero digits beyond the scale are tolerated; any other excess
    /// precision is a [`SubsumError::Precision`]. Values whose scaled form
    /// does not fit in an `i64` are a [`SubsumError::Overflow`].
    pub fn to_fixed(&self, value: Decimal) -> Result<i64> {
        let mantissa = value.mantissa();
        let scaled = if value.scale() <= self.digits {
            let shift = pow10(self.digits - value.scale());
            mantissa
                .checked_mul(shift)
                .ok_or(SubsumError::Overflow { value, scale: self.digits })?
        } else {
            let shift = pow10(value.scale() - self.digits);
            if mantissa % shift != 0 {
                return Err(SubsumError::Precision { value, scale: self.digits });
            }
            mantissa / shift
        };
        i64::try_from(scaled).map_err(|_| SubsumError::Overflow { value, scale: self.digits })
    }
}

fn pow10(digits: u32) -> i128 {
    // Decimal scales are at most 28, so this cannot overflow i128.
    10i128.pow(digits)
}
