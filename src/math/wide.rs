//! 256-bit intermediates for reserve arithmetic.
//!
//! Reserves are 18-decimal fixed-point `u128` values, so a product such as
//! `amount_in × reserve_out` overflows `u128` at around 10^19 whole units
//! squared.  Every multiply-then-divide in the pool goes through
//! [`mul_div`], which widens to [`U256`] before dividing.

#![allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast, clippy::manual_div_ceil)]

use uint::construct_uint;

construct_uint! {
    /// Unsigned 256-bit integer used only for intermediates.
    pub struct U256(4);
}

/// Widening product of two `u128` values.  Never overflows.
#[must_use]
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Narrows a `U256` back to `u128`, or `None` if it does not fit.
#[must_use]
pub fn narrow(value: U256) -> Option<u128> {
    if value.bits() > 128 {
        None
    } else {
        Some(value.low_u128())
    }
}

/// Computes `⌊a × b / d⌋` with a 256-bit intermediate.
///
/// Every quotient the pool pays out (trade output, withdrawn amounts,
/// minted shares, quotes) is floored, so rounding always stays with the
/// pool.
///
/// Returns `None` if `d` is zero or the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::math::mul_div;
///
/// // Overflows u128 in the product, fits in the quotient.
/// let big = 10u128.pow(30);
/// assert_eq!(mul_div(big, big, big), Some(big));
/// assert_eq!(mul_div(10, 1, 3), Some(3));
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    narrow(full_mul(a, b) / U256::from(d))
}

/// Floor of `√(a × b)`, evaluated without overflow.
///
/// The result always fits `u128` because `a × b < 2^256`.
#[must_use]
pub fn isqrt_product(a: u128, b: u128) -> u128 {
    full_mul(a, b).integer_sqrt().low_u128()
}

/// Returns `true` if `after_a × after_b ≥ before_a × before_b`.
#[must_use]
pub fn product_non_decreasing(before: (u128, u128), after: (u128, u128)) -> bool {
    full_mul(after.0, after.1) >= full_mul(before.0, before.1)
}
