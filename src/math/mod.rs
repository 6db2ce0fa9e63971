//! Integer arithmetic utilities for pool calculations.
//!
//! - [`CheckedArithmetic`]: `Result`-returning add/sub on domain types.
//! - [`mul_div`], [`isqrt_product`], [`product_non_decreasing`]: 256-bit
//!   intermediates so no multiplication overflows before its division.
//!
//! Nothing in this module, or anywhere in the crate, uses floating point.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{full_mul, isqrt_product, mul_div, narrow, product_non_decreasing, U256};
