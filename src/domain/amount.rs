//! Fixed-point asset quantity with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of fractional decimal digits carried by every [`Amount`].
pub const DECIMALS: u32 = 18;

/// An asset quantity stored as an unsigned integer scaled by 10^18.
///
/// `Amount::new(1)` is the smallest representable unit (10^-18 of one
/// whole asset).  All `u128` values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.  Products and quotients of amounts go
/// through [`mul_div`](crate::math::mul_div).
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
///
/// let a = Amount::from_whole(100);
/// let b = Amount::from_whole(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::from_whole(300)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// One whole unit (10^18 raw units).
    pub const WAD: Self = Self(1_000_000_000_000_000_000);

    /// Creates a new `Amount` from a raw, already-scaled `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an `Amount` of `whole` units, i.e. `whole × 10^18` raw.
    ///
    /// Saturates at [`Amount::MAX`] for absurdly large inputs.
    pub const fn from_whole(whole: u64) -> Self {
        Self((whole as u128).saturating_mul(Self::WAD.0))
    }

    /// Returns the underlying raw `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Splits the amount into whole units and the 18-digit fraction.
    #[must_use]
    pub const fn split(&self) -> (u128, u128) {
        (self.0 / Self::WAD.0, self.0 % Self::WAD.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    /// Renders the decimal form with all 18 fractional digits,
    /// e.g. `18.181818181818181818`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = self.split();
        write!(f, "{whole}.{frac:018}")
    }
}
