//! Caller-supplied parameters for the pool's mutating operations.
//!
//! Requests are plain carriers: they do not validate themselves, because
//! every rejection (bad path, unknown asset, zero amount) must surface as
//! the specific [`SwapError`](crate::error::SwapError) raised by the
//! operation that evaluates them.

use super::{AccountId, Amount, AssetId, Shares, Timestamp};

/// An exact-input trade along a two-asset path.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{AccountId, Amount, AssetId, TradeRequest};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let req = TradeRequest::new(Amount::from_whole(10), Amount::new(1), [a, b], AccountId::zero(), 1_000);
/// assert_eq!(req.path(), &[a, b]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    amount_in: Amount,
    min_amount_out: Amount,
    path: Vec<AssetId>,
    recipient: AccountId,
    deadline: Timestamp,
}

impl TradeRequest {
    /// Creates a trade request.  `path` is `[asset_in, asset_out]`.
    pub fn new(
        amount_in: Amount,
        min_amount_out: Amount,
        path: impl Into<Vec<AssetId>>,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Self {
        Self {
            amount_in,
            min_amount_out,
            path: path.into(),
            recipient,
            deadline,
        }
    }

    /// Exact amount taken from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Smallest acceptable output.
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }

    /// The requested path.
    #[must_use]
    pub fn path(&self) -> &[AssetId] {
        &self.path
    }

    /// Receiver of the output asset.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Latest acceptable evaluation time.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}

/// A deposit of both assets.
///
/// `asset_a`/`asset_b` name the pool's pair in either order; every amount
/// in the request, and in the resulting receipt, follows that order.
///
/// ```
/// use simple_swap::domain::{AccountId, Amount, AssetId, DepositRequest};
///
/// let req = DepositRequest::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
///     AccountId::zero(),
///     1_000,
/// )
/// .desired(Amount::from_whole(100), Amount::from_whole(200))
/// .minimums(Amount::ZERO, Amount::ZERO);
/// assert_eq!(req.amount_b_desired(), Amount::from_whole(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositRequest {
    asset_a: AssetId,
    asset_b: AssetId,
    amount_a_desired: Amount,
    amount_b_desired: Amount,
    amount_a_min: Amount,
    amount_b_min: Amount,
    recipient: AccountId,
    deadline: Timestamp,
}

impl DepositRequest {
    /// Creates a request with zero desired amounts and zero minimums.
    #[must_use]
    pub const fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            amount_a_desired: Amount::ZERO,
            amount_b_desired: Amount::ZERO,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient,
            deadline,
        }
    }

    /// Sets the amounts the caller is willing to deposit.
    #[must_use]
    pub const fn desired(mut self, amount_a: Amount, amount_b: Amount) -> Self {
        self.amount_a_desired = amount_a;
        self.amount_b_desired = amount_b;
        self
    }

    /// Sets the smallest amounts the caller accepts being taken.
    #[must_use]
    pub const fn minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }

    /// First named asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Second named asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Desired amount of the first named asset.
    pub const fn amount_a_desired(&self) -> Amount {
        self.amount_a_desired
    }

    /// Desired amount of the second named asset.
    pub const fn amount_b_desired(&self) -> Amount {
        self.amount_b_desired
    }

    /// Minimum accepted amount of the first named asset.
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Minimum accepted amount of the second named asset.
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// Receiver of the minted shares.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Latest acceptable evaluation time.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}

/// A withdrawal of `shares` in exchange for both assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalRequest {
    asset_a: AssetId,
    asset_b: AssetId,
    shares: Shares,
    amount_a_min: Amount,
    amount_b_min: Amount,
    recipient: AccountId,
    deadline: Timestamp,
}

impl WithdrawalRequest {
    /// Creates a request with zero minimums.
    #[must_use]
    pub const fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        shares: Shares,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient,
            deadline,
        }
    }

    /// Sets the smallest amounts the caller accepts receiving.
    #[must_use]
    pub const fn minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }

    /// First named asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Second named asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Shares to burn.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Minimum payout of the first named asset.
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Minimum payout of the second named asset.
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// Receiver of both assets.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Latest acceptable evaluation time.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}
