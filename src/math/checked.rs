//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning checked operations
//! on [`Amount`] and [`Shares`] into `Result`s carrying a specific
//! [`SwapError`] variant, so `?` can be used throughout the engines.
//!
//! # Examples
//!
//! ```
//! use simple_swap::domain::Amount;
//! use simple_swap::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::SwapError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Underflow("share subtraction underflow"))
    }
}
