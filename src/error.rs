//! Unified error types for the exchange core.
//!
//! Every fallible operation returns [`SwapError`].  Each variant names one
//! distinct failure kind so callers can branch on it programmatically; no
//! error is ever swallowed or downgraded to a log line inside the core.

use thiserror::Error;

use crate::traits::TransferError;

/// The error kinds surfaced by pool operations.
///
/// Any `Err` returned by a mutating operation guarantees that the pool's
/// reserves and share balances are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// The request's deadline lies strictly before the current time.
    #[error("request expired: deadline {deadline} < now {now}")]
    Expired {
        /// Deadline supplied by the caller (Unix seconds).
        deadline: u64,
        /// Time at which the request was evaluated (Unix seconds).
        now: u64,
    },

    /// An asset identifier is not one of the pool's two assets.
    #[error("unknown asset: {0}")]
    UnknownAsset(&'static str),

    /// A trade path is not exactly `[pool asset, other pool asset]`.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// A required input amount is zero.
    #[error("input amount must be non-zero")]
    ZeroInput,

    /// A reserve used by the pricing formula is zero.
    #[error("reserve is zero")]
    ZeroReserve,

    /// A price was requested against an empty reserve.
    #[error("pool is empty")]
    EmptyPool,

    /// The trade output fell below the caller's floor.
    #[error("insufficient output amount: got {amount_out}, minimum {min_amount_out}")]
    InsufficientOutputAmount {
        /// Computed output.
        amount_out: u128,
        /// Caller-supplied minimum.
        min_amount_out: u128,
    },

    /// The accepted or withdrawn amount of asset A fell below its minimum.
    #[error("amount A {amount} below minimum {minimum}")]
    BelowMinimumA {
        /// Computed amount.
        amount: u128,
        /// Caller-supplied minimum.
        minimum: u128,
    },

    /// The accepted or withdrawn amount of asset B fell below its minimum.
    #[error("amount B {amount} below minimum {minimum}")]
    BelowMinimumB {
        /// Computed amount.
        amount: u128,
        /// Caller-supplied minimum.
        minimum: u128,
    },

    /// A deposit would mint zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientInitialLiquidity,

    /// A holder tried to burn or move more shares than they own.
    #[error("insufficient shares: have {have}, need {need}")]
    InsufficientShares {
        /// Current balance.
        have: u128,
        /// Requested amount.
        need: u128,
    },

    /// The external asset ledger rejected a debit or credit.
    #[error("transfer failed: {0}")]
    TransferFailed(#[source] TransferError),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow (a balance or reserve would become negative).
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A mutating operation was entered again from inside one already in
    /// progress on the same thread (for example from a ledger callback).
    #[error("reentrant call rejected")]
    Reentrant,

    /// The pool blueprint is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A persisted snapshot violates the pool invariants.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

impl From<TransferError> for SwapError {
    fn from(err: TransferError) -> Self {
        Self::TransferFailed(err)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;
