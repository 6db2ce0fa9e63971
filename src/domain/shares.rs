//! Pool ownership units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Fungible units of proportional ownership of the pool's reserves.
///
/// Distinct from [`Amount`](super::Amount) because shares measure a claim
/// on both reserves, not a quantity of either asset.  All `u128` values
/// are valid.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` value from a raw `u128`.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_default() {
        assert_eq!(Shares::default(), Shares::ZERO);
        assert!(Shares::ZERO.is_zero());
        assert!(!Shares::new(1).is_zero());
    }

    #[test]
    fn checked_ops() {
        assert_eq!(Shares::new(5).checked_sub(&Shares::new(6)), None);
        assert_eq!(Shares::new(u128::MAX).checked_add(&Shares::new(1)), None);
        assert_eq!(Shares::new(5).checked_sub(&Shares::new(5)), Some(Shares::ZERO));
    }

    #[test]
    fn display_is_raw() {
        assert_eq!(Shares::new(1_000).to_string(), "1000");
    }
}
