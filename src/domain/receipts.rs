//! Outcomes of the pool's mutating operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares};

/// Outcome of a trade.
///
/// # Invariants
///
/// - `amount_in > 0`; `amount_out` may be zero only if the caller
///   accepted a zero minimum.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, TradeReceipt};
///
/// let r = TradeReceipt::new(Amount::new(10), Amount::new(9));
/// assert_eq!(r.amounts(), [Amount::new(10), Amount::new(9)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeReceipt {
    amount_in: Amount,
    amount_out: Amount,
}

impl TradeReceipt {
    /// Creates a receipt.
    pub const fn new(amount_in: Amount, amount_out: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
        }
    }

    /// Returns the amount taken from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount paid to the recipient.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns `[amount_in, amount_out]`, the per-hop amounts of the path.
    pub const fn amounts(&self) -> [Amount; 2] {
        [self.amount_in, self.amount_out]
    }
}

impl fmt::Display for TradeReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trade(in={}, out={})", self.amount_in, self.amount_out)
    }
}

/// Outcome of a deposit: the accepted amounts and the shares minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositReceipt {
    accepted_a: Amount,
    accepted_b: Amount,
    shares_minted: Shares,
}

impl DepositReceipt {
    /// Creates a receipt.
    pub const fn new(accepted_a: Amount, accepted_b: Amount, shares_minted: Shares) -> Self {
        Self {
            accepted_a,
            accepted_b,
            shares_minted,
        }
    }

    /// Amount of asset A taken into the reserves.
    pub const fn accepted_a(&self) -> Amount {
        self.accepted_a
    }

    /// Amount of asset B taken into the reserves.
    pub const fn accepted_b(&self) -> Amount {
        self.accepted_b
    }

    /// Shares credited to the recipient.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(a={}, b={}, shares={})",
            self.accepted_a, self.accepted_b, self.shares_minted
        )
    }
}

/// Outcome of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawalReceipt {
    /// Creates a receipt.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Amount of asset A paid out.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of asset B paid out.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdrawal(a={}, b={})", self.amount_a, self.amount_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_display() {
        let r = TradeReceipt::new(Amount::from_whole(1), Amount::new(5));
        assert_eq!(
            r.to_string(),
            "Trade(in=1.000000000000000000, out=0.000000000000000005)"
        );
    }

    #[test]
    fn deposit_accessors() {
        let r = DepositReceipt::new(Amount::new(1), Amount::new(2), Shares::new(3));
        assert_eq!(r.accepted_a(), Amount::new(1));
        assert_eq!(r.accepted_b(), Amount::new(2));
        assert_eq!(r.shares_minted(), Shares::new(3));
    }

    #[test]
    fn withdrawal_accessors() {
        let r = WithdrawalReceipt::new(Amount::new(4), Amount::new(8));
        assert_eq!(r.amount_a(), Amount::new(4));
        assert_eq!(r.amount_b(), Amount::new(8));
    }
}
