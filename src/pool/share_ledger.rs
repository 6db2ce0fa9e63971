//! Pool-share bookkeeping.
//!
//! Tracks the total share supply and the balance of every holder.  The
//! sum of all balances equals [`ShareLedger::total_supply`] after every
//! operation; holders whose balance drops to zero are removed.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::SwapError;
use crate::math::CheckedArithmetic;

/// Share balances of one pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    total: Shares,
    balances: BTreeMap<AccountId, Shares>,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: Shares::ZERO,
            balances: BTreeMap::new(),
        }
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.total
    }

    /// Balance of `holder`; zero if unknown.
    #[must_use]
    pub fn balance_of(&self, holder: &AccountId) -> Shares {
        self.balances.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Iterates non-zero balances in account order.
    pub fn holders(&self) -> impl Iterator<Item = (&AccountId, &Shares)> {
        self.balances.iter()
    }

    /// Creates `amount` new shares for `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the supply would exceed `u128`.
    pub fn mint(&mut self, holder: AccountId, amount: Shares) -> Result<(), SwapError> {
        if amount.is_zero() {
            return Ok(());
        }
        let total = self.total.safe_add(&amount)?;
        let balance = self.balance_of(&holder).safe_add(&amount)?;
        self.total = total;
        self.balances.insert(holder, balance);
        Ok(())
    }

    /// Destroys `amount` of `holder`'s shares.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientShares`] if `holder` owns fewer
    /// than `amount` shares.
    pub fn burn(&mut self, holder: AccountId, amount: Shares) -> Result<(), SwapError> {
        let balance = self.debit_balance(&holder, amount)?;
        let total = self.total.safe_sub(&amount)?;
        self.total = total;
        self.set_balance(holder, balance);
        Ok(())
    }

    /// Moves `amount` shares from `from` to `to`.  Total supply is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientShares`] if `from` owns fewer than
    /// `amount` shares.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Shares,
    ) -> Result<(), SwapError> {
        let from_balance = self.debit_balance(&from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self.balance_of(&to).safe_add(&amount)?;
        self.set_balance(from, from_balance);
        self.set_balance(to, to_balance);
        Ok(())
    }

    /// Sum of every recorded balance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the balances cannot be summed.
    pub fn sum_of_balances(&self) -> Result<Shares, SwapError> {
        self.balances
            .values()
            .try_fold(Shares::ZERO, |acc, b| acc.safe_add(b))
    }

    /// Rebuilds a ledger from persisted balances.  Zero balances are
    /// skipped; the total is the sum of the rest.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidSnapshot`] if an account appears twice.
    /// - [`SwapError::Overflow`] if the balances cannot be summed.
    pub fn from_balances(
        balances: impl IntoIterator<Item = (AccountId, Shares)>,
    ) -> Result<Self, SwapError> {
        let mut ledger = Self::new();
        for (holder, amount) in balances {
            if ledger.balances.contains_key(&holder) {
                return Err(SwapError::InvalidSnapshot("duplicate share holder"));
            }
            ledger.mint(holder, amount)?;
        }
        Ok(ledger)
    }

    fn debit_balance(&self, holder: &AccountId, amount: Shares) -> Result<Shares, SwapError> {
        let have = self.balance_of(holder);
        have.checked_sub(&amount).ok_or(SwapError::InsufficientShares {
            have: have.get(),
            need: amount.get(),
        })
    }

    fn set_balance(&mut self, holder: AccountId, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }
}
