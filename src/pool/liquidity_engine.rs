//! Deposit and withdrawal pricing.
//!
//! # Deposits
//!
//! | Pool state     | Accepted amounts                            | Shares minted                      |
//! |----------------|---------------------------------------------|------------------------------------|
//! | no shares      | `(a_desired, b_desired)`                    | `⌊√(a × b)⌋`                       |
//! | shares `T > 0` | largest pair at the current `Ra : Rb` ratio | `min(a × T / Ra, b × T / Rb)`      |
//!
//! For a funded pool, `optimal_b = ⌊a_desired × Rb / Ra⌋` is tried first;
//! if it exceeds `b_desired`, `optimal_a = ⌊b_desired × Ra / Rb⌋` is used
//! instead.  Every division rounds down, in the pool's favour.
//!
//! # Withdrawals
//!
//! Burning `s` of `T` shares pays `⌊s × Ra / T⌋` and `⌊s × Rb / T⌋`.
//!
//! All amounts in this module are in pool order (A, B); callers reorient
//! requests that name the pair reversed.

use crate::domain::{Amount, Shares};
use crate::error::SwapError;
use crate::math::{isqrt_product, mul_div};

use super::{ReserveDelta, ReservePool};

/// Stateless liquidity pricing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityEngine;

/// Desired and minimum amounts of a deposit, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositTerms {
    /// Desired amount of asset A.
    pub desired_a: Amount,
    /// Desired amount of asset B.
    pub desired_b: Amount,
    /// Minimum accepted amount of asset A.
    pub min_a: Amount,
    /// Minimum accepted amount of asset B.
    pub min_b: Amount,
}

/// A priced deposit, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPlan {
    accepted_a: Amount,
    accepted_b: Amount,
    shares: Shares,
}

impl DepositPlan {
    /// Accepted amount of asset A.
    pub const fn accepted_a(&self) -> Amount {
        self.accepted_a
    }

    /// Accepted amount of asset B.
    pub const fn accepted_b(&self) -> Amount {
        self.accepted_b
    }

    /// Shares to mint.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Adds the accepted amounts to `reserves`.
    ///
    /// # Errors
    ///
    /// [`SwapError::Overflow`] if a reserve would exceed `u128`.
    pub fn apply_to(&self, reserves: &mut ReservePool) -> Result<(), SwapError> {
        reserves.apply_delta(
            ReserveDelta::Increase(self.accepted_a),
            ReserveDelta::Increase(self.accepted_b),
        )
    }
}

/// A priced withdrawal, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalPlan {
    shares: Shares,
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawalPlan {
    /// Shares to burn.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Payout of asset A.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Payout of asset B.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Removes the payouts from `reserves`.
    ///
    /// # Errors
    ///
    /// [`SwapError::Underflow`] if a payout exceeds its reserve.
    pub fn apply_to(&self, reserves: &mut ReservePool) -> Result<(), SwapError> {
        reserves.apply_delta(
            ReserveDelta::Decrease(self.amount_a),
            ReserveDelta::Decrease(self.amount_b),
        )
    }
}

impl LiquidityEngine {
    /// Prices a deposit against the current reserves and share supply.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroInput`] if both desired amounts are zero.
    /// - [`SwapError::InsufficientInitialLiquidity`] if zero shares would
    ///   be minted.
    /// - [`SwapError::BelowMinimumA`] / [`SwapError::BelowMinimumB`] if an
    ///   accepted amount is below its minimum.
    /// - [`SwapError::ZeroReserve`] if shares exist but a reserve is zero.
    /// - [`SwapError::Overflow`] on arithmetic overflow.
    pub fn plan_deposit(
        reserves: &ReservePool,
        total_shares: Shares,
        terms: DepositTerms,
    ) -> Result<DepositPlan, SwapError> {
        if terms.desired_a.is_zero() && terms.desired_b.is_zero() {
            return Err(SwapError::ZeroInput);
        }

        let plan = if total_shares.is_zero() {
            let shares = Shares::new(isqrt_product(
                terms.desired_a.get(),
                terms.desired_b.get(),
            ));
            DepositPlan {
                accepted_a: terms.desired_a,
                accepted_b: terms.desired_b,
                shares,
            }
        } else {
            let (ra, rb) = (reserves.reserve_a(), reserves.reserve_b());
            if ra.is_zero() || rb.is_zero() {
                return Err(SwapError::ZeroReserve);
            }
            let (accepted_a, accepted_b) = Self::optimal_amounts(ra, rb, &terms)?;
            let total = total_shares.get();
            let by_a = mul_div(accepted_a.get(), total, ra.get())
                .ok_or(SwapError::Overflow("shares from asset A overflow"))?;
            let by_b = mul_div(accepted_b.get(), total, rb.get())
                .ok_or(SwapError::Overflow("shares from asset B overflow"))?;
            DepositPlan {
                accepted_a,
                accepted_b,
                shares: Shares::new(by_a.min(by_b)),
            }
        };

        if plan.shares.is_zero() {
            return Err(SwapError::InsufficientInitialLiquidity);
        }
        check_minimums(plan.accepted_a, plan.accepted_b, terms.min_a, terms.min_b)?;
        Ok(plan)
    }

    /// Prices a withdrawal of `shares` from a pool with `total_shares`
    /// outstanding.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroInput`] if `shares` is zero.
    /// - [`SwapError::InsufficientShares`] if `holder_balance < shares`.
    /// - [`SwapError::BelowMinimumA`] / [`SwapError::BelowMinimumB`] if a
    ///   payout is below its minimum.
    pub fn plan_withdrawal(
        reserves: &ReservePool,
        total_shares: Shares,
        holder_balance: Shares,
        shares: Shares,
        min_a: Amount,
        min_b: Amount,
    ) -> Result<WithdrawalPlan, SwapError> {
        if shares.is_zero() {
            return Err(SwapError::ZeroInput);
        }
        if holder_balance < shares {
            return Err(SwapError::InsufficientShares {
                have: holder_balance.get(),
                need: shares.get(),
            });
        }
        // holder_balance <= total_shares, so total is non-zero here.
        let total = total_shares.get();
        let amount_a = mul_div(shares.get(), reserves.reserve_a().get(), total)
            .ok_or(SwapError::Overflow("withdrawal of asset A overflow"))?;
        let amount_b = mul_div(shares.get(), reserves.reserve_b().get(), total)
            .ok_or(SwapError::Overflow("withdrawal of asset B overflow"))?;
        let (amount_a, amount_b) = (Amount::new(amount_a), Amount::new(amount_b));

        check_minimums(amount_a, amount_b, min_a, min_b)?;
        Ok(WithdrawalPlan {
            shares,
            amount_a,
            amount_b,
        })
    }

    fn optimal_amounts(
        ra: Amount,
        rb: Amount,
        terms: &DepositTerms,
    ) -> Result<(Amount, Amount), SwapError> {
        let optimal_b = mul_div(terms.desired_a.get(), rb.get(), ra.get())
            .map(Amount::new)
            .ok_or(SwapError::Overflow("optimal B overflow"))?;
        if optimal_b <= terms.desired_b {
            return Ok((terms.desired_a, optimal_b));
        }
        let optimal_a = mul_div(terms.desired_b.get(), ra.get(), rb.get())
            .map(Amount::new)
            .ok_or(SwapError::Overflow("optimal A overflow"))?;
        Ok((optimal_a.min(terms.desired_a), terms.desired_b))
    }
}

fn check_minimums(a: Amount, b: Amount, min_a: Amount, min_b: Amount) -> Result<(), SwapError> {
    if a < min_a {
        return Err(SwapError::BelowMinimumA {
            amount: a.get(),
            minimum: min_a.get(),
        });
    }
    if b < min_b {
        return Err(SwapError::BelowMinimumB {
            amount: b.get(),
            minimum: min_b.get(),
        });
    }
    Ok(())
}
