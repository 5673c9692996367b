//! Exact arithmetic mean of a set of grades.
//!
//! An [`Average`] keeps the running total and the number of grades rather
//! than a pre-divided float, so equality against a whole number is exact and
//! rendering can round with integer arithmetic alone.

use std::fmt;

use crate::error::{CalculatorError, Result};

/// Largest number of decimal places an [`Average`] can render.
pub const MAX_PRECISION: u8 = 18;

/// Mean of at least one grade, held as `sum / count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Average {
    sum: u64,
    count: u64,
    precision: u8,
}

impl Average {
    /// Builds the mean of `grades`, rendering with `precision` decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::EmptyInput`] when `grades` is empty and
    /// [`CalculatorError::Overflow`] when the total exceeds `u64::MAX`.
    pub fn of(grades: &[u32], precision: u8) -> Result<Self> {
        if grades.is_empty() {
            return Err(CalculatorError::EmptyInput);
        }
        let count = u64::try_from(grades.len()).map_err(|_| CalculatorError::Overflow)?;
        let sum = grades
            .iter()
            .try_fold(0_u64, |total, &grade| total.checked_add(u64::from(grade)))
            .ok_or(CalculatorError::Overflow)?;
        Ok(Self {
            sum,
            count,
            precision: precision.min(MAX_PRECISION),
        })
    }

    /// Total of every grade contributing to the mean.
    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    /// Number of grades contributing to the mean. Never zero.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Decimal places used by the [`Display`](fmt::Display) rendering.
    #[must_use]
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    /// Returns `true` when the mean is exactly the whole number `expected`.
    #[must_use]
    pub fn equals_whole(&self, expected: u64) -> bool {
        u128::from(expected) * u128::from(self.count) == u128::from(self.sum)
    }

    /// Nearest `f64` to the mean.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "callers asking for a float accept the rounding of u64 to f64"
    )]
    pub fn as_f64(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }

    /// Mean scaled by `10^precision`, rounded half away from zero.
    #[expect(
        clippy::integer_division,
        reason = "rounding is applied explicitly before dividing"
    )]
    fn scaled(&self) -> (u128, u128) {
        let scale = 10_u128.pow(u32::from(self.precision));
        let count = u128::from(self.count);
        let numerator = u128::from(self.sum) * scale + count / 2;
        (numerator / count, scale)
    }
}

impl fmt::Display for Average {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splits the fixed-point value into whole and fractional digits"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (scaled, scale) = self.scaled();
        let whole = scaled / scale;
        if self.precision == 0 {
            return write!(f, "{whole}");
        }
        let fraction = scaled % scale;
        let width = usize::from(self.precision);
        write!(f, "{whole}.{fraction:0width$}")
    }
}
