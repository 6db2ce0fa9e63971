//! An [`AssetLedger`] backed by a `BTreeMap`.
//!
//! Balances are keyed by `(asset, account)`.  The pool's custody account
//! is an ordinary account: a debit moves funds from the party into
//! custody, a credit moves them from custody to the party.  Every call is
//! checked before it mutates anything, so a refused call leaves all
//! balances unchanged.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::domain::{AccountId, Amount, AssetId};
use crate::traits::{AssetLedger, TransferError};

/// In-memory reference ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryLedger {
    custody: AccountId,
    balances: BTreeMap<(AssetId, AccountId), Amount>,
    supported: Option<BTreeSet<AssetId>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger that accepts any asset and keeps pool funds
    /// in `custody`.
    #[must_use]
    pub const fn new(custody: AccountId) -> Self {
        Self {
            custody,
            balances: BTreeMap::new(),
            supported: None,
        }
    }

    /// Restricts the ledger to `assets`; transfers of anything else fail
    /// with [`TransferError::UnsupportedAsset`].
    #[must_use]
    pub fn with_assets(mut self, assets: impl IntoIterator<Item = AssetId>) -> Self {
        self.supported = Some(assets.into_iter().collect());
        self
    }

    /// The custody account holding pool funds.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }

    /// Adds `amount` of `asset` to `account`, saturating at `u128::MAX`.
    pub fn fund(&mut self, asset: AssetId, account: AccountId, amount: Amount) {
        let entry = self.balances.entry((asset, account)).or_default();
        *entry = Amount::new(entry.get().saturating_add(amount.get()));
    }

    /// Balance of `account` in `asset`.
    pub fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.balances
            .get(&(*asset, *account))
            .copied()
            .unwrap_or_default()
    }

    /// Balance of `asset` held in custody.
    pub fn custody_balance(&self, asset: &AssetId) -> Amount {
        self.balance_of(asset, &self.custody)
    }

    fn check_supported(&self, asset: AssetId) -> Result<(), TransferError> {
        match &self.supported {
            Some(assets) if !assets.contains(&asset) => {
                Err(TransferError::UnsupportedAsset(asset))
            }
            _ => Ok(()),
        }
    }

    fn move_funds(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.check_supported(asset)?;
        let have = self.balance_of(&asset, &from);
        let Some(from_after) = have.checked_sub(&amount) else {
            return Err(TransferError::InsufficientBalance {
                asset,
                account: from,
                have,
                need: amount,
            });
        };
        if from == to {
            return Ok(());
        }
        let to_after = self
            .balance_of(&asset, &to)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("recipient balance overflow".into()))?;
        self.set(asset, from, from_after);
        self.set(asset, to, to_after);
        trace!(asset = %asset, from = %from, to = %to, amount = %amount, "ledger transfer");
        Ok(())
    }

    fn set(&mut self, asset: AssetId, account: AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&(asset, account));
        } else {
            self.balances.insert((asset, account), amount);
        }
    }
}

impl AssetLedger for InMemoryLedger {
    fn debit(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let custody = self.custody;
        self.move_funds(asset, from, custody, amount)
    }

    fn credit(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let custody = self.custody;
        self.move_funds(asset, custody, to, amount)
    }
}
