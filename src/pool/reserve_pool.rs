//! Internal reserve accounting.
//!
//! [`ReservePool`] is the only place reserves are written.  Every change
//! goes through [`ReservePool::apply_delta`], which evaluates both sides
//! before touching either, so a failed delta leaves the reserves intact.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Side};
use crate::error::SwapError;

/// A signed change to one reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReserveDelta {
    /// Leave the reserve unchanged.
    #[default]
    Unchanged,
    /// Add to the reserve.
    Increase(Amount),
    /// Subtract from the reserve.
    Decrease(Amount),
}

impl ReserveDelta {
    fn apply(self, reserve: Amount) -> Result<Amount, SwapError> {
        match self {
            Self::Unchanged => Ok(reserve),
            Self::Increase(amount) => reserve
                .checked_add(&amount)
                .ok_or(SwapError::Overflow("reserve overflow")),
            Self::Decrease(amount) => reserve
                .checked_sub(&amount)
                .ok_or(SwapError::Underflow("reserve would become negative")),
        }
    }
}

/// The pool's view of how much of each asset it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReservePool {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ReservePool {
    /// An empty reserve pair.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
    };

    /// Builds reserves from persisted values.
    pub(crate) const fn from_parts(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Reserve on `side`.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// `true` when both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Applies one delta per side, all-or-nothing.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Underflow`] if a reserve would become negative.
    /// - [`SwapError::Overflow`] if a reserve would exceed `u128`.
    pub fn apply_delta(
        &mut self,
        delta_a: ReserveDelta,
        delta_b: ReserveDelta,
    ) -> Result<(), SwapError> {
        let next_a = delta_a.apply(self.reserve_a)?;
        let next_b = delta_b.apply(self.reserve_b)?;
        self.reserve_a = next_a;
        self.reserve_b = next_b;
        Ok(())
    }

    /// Adds `amount_in` on `side_in` and removes `amount_out` from the other side.
    ///
    /// # Errors
    ///
    /// Same as [`ReservePool::apply_delta`].
    pub fn apply_trade(
        &mut self,
        side_in: Side,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<(), SwapError> {
        let inflow = ReserveDelta::Increase(amount_in);
        let outflow = ReserveDelta::Decrease(amount_out);
        match side_in {
            Side::A => self.apply_delta(inflow, outflow),
            Side::B => self.apply_delta(outflow, inflow),
        }
    }
}
