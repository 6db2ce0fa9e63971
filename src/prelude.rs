//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```
//!
//! Brings the pool facade, request and receipt types, the collaborator
//! traits, configuration and the error type into scope with one import.

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, CallContext, DepositReceipt, DepositRequest, Price,
    Shares, Side, Timestamp, TradeReceipt, TradeRequest, WithdrawalReceipt,
    WithdrawalRequest,
};
pub use crate::error::{Result, SwapError};
pub use crate::ledger::InMemoryLedger;
pub use crate::math::CheckedArithmetic;
pub use crate::pool::Pool;
pub use crate::snapshot::PoolSnapshot;
pub use crate::traits::{AssetLedger, FromConfig, TransferError};
