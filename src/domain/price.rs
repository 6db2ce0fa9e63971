//! Fixed-point exchange rate.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// Units of the quote asset per unit of the base asset, scaled by 10^18.
///
/// `Price::ONE` is a 1:1 rate.  There is no floating-point representation;
/// any decimal rendering is cosmetic and done by [`fmt::Display`].
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Price;
///
/// let p = Price::new(2_000_000_000_000_000_000);
/// assert_eq!(p.to_string(), "2.000000000000000000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// A 1:1 rate.
    pub const ONE: Self = Self(Amount::WAD.get());

    /// Creates a price from its raw scaled value.
    #[must_use]
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Amount::new(self.0), f)
    }
}
