//! Seam to the two external asset ledgers.
//!
//! The pool never owns asset balances of other parties.  It asks an
//! [`AssetLedger`] to pull assets from a caller ([`AssetLedger::debit`])
//! into pool custody and to push assets out of custody to a recipient
//! ([`AssetLedger::credit`]).
//!
//! # Trust Model
//!
//! An implementation may run arbitrary code, including calls back into
//! the same pool.  The pool treats every call as untrusted: mutating
//! operations hold a reentrancy guard for their whole duration and only
//! commit state after every transfer has succeeded.

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

/// Failure reported by an [`AssetLedger`].
///
/// The pool wraps it verbatim in
/// [`SwapError::TransferFailed`](crate::error::SwapError::TransferFailed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The debited party does not hold enough of the asset.
    #[error("insufficient balance of asset {asset} for {account}: have {have}, need {need}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Party being debited.
        account: AccountId,
        /// Current balance.
        have: Amount,
        /// Requested amount.
        need: Amount,
    },

    /// The ledger does not know the asset.
    #[error("asset {0} is not managed by this ledger")]
    UnsupportedAsset(AssetId),

    /// Any other refusal, with the collaborator's own reason.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Debit/credit capability over the pool's two underlying assets.
///
/// Each call is atomic and independently failable: on `Err` the ledger
/// must be unchanged by that call.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the ledger refuses the debit.
    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount)
        -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the ledger refuses the credit.
    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount)
        -> Result<(), TransferError>;
}

impl<L: AssetLedger + ?Sized> AssetLedger for &mut L {
    fn debit(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).debit(asset, from, amount)
    }

    fn credit(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).credit(asset, to, amount)
    }
}
