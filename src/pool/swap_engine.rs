//! Exact-input constant-product pricing.
//!
//! # Formula
//!
//! ```text
//! amount_out = ⌊ amount_in × reserve_out / (reserve_in + amount_in) ⌋
//! ```
//!
//! No fee is charged.  Rounding the output down keeps
//! `reserve_a × reserve_b` from decreasing across a trade; the product is
//! evaluated in 256 bits, so large reserves never overflow mid-formula.

use crate::domain::{Amount, AssetId, AssetPair, Side};
use crate::error::SwapError;
use crate::math::{mul_div, product_non_decreasing};

use super::ReservePool;

/// Stateless pricing functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapEngine;

impl SwapEngine {
    /// Output of an exact-input trade against the given reserves.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroInput`] if `amount_in` is zero.
    /// - [`SwapError::ZeroReserve`] if either reserve is zero.
    /// - [`SwapError::Overflow`] if `reserve_in + amount_in` exceeds `u128`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_swap::domain::Amount;
    /// use simple_swap::pool::SwapEngine;
    ///
    /// let out = SwapEngine::amount_out(
    ///     Amount::from_whole(10),
    ///     Amount::from_whole(100),
    ///     Amount::from_whole(200),
    /// );
    /// assert_eq!(out, Ok(Amount::new(18_181_818_181_818_181_818)));
    /// ```
    pub fn amount_out(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, SwapError> {
        if amount_in.is_zero() {
            return Err(SwapError::ZeroInput);
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(SwapError::ZeroReserve);
        }
        let denominator = reserve_in
            .checked_add(&amount_in)
            .ok_or(SwapError::Overflow("reserve_in + amount_in overflow"))?;
        mul_div(amount_in.get(), reserve_out.get(), denominator.get())
            .map(Amount::new)
            .ok_or(SwapError::Overflow("trade output overflow"))
    }

    /// Resolves a `[asset_in, asset_out]` path to the input side.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidPath`] if the path is not exactly two assets
    ///   or does not end at the counterpart of its first asset.
    /// - [`SwapError::UnknownAsset`] if the first asset is not in the pair.
    pub fn resolve_path(pair: &AssetPair, path: &[AssetId]) -> Result<Side, SwapError> {
        let [asset_in, asset_out] = path else {
            return Err(SwapError::InvalidPath("path must name exactly two assets"));
        };
        let side_in = pair.side_of(asset_in)?;
        if *asset_out != pair.asset(side_in.flip()) {
            return Err(SwapError::InvalidPath(
                "path must end at the other pool asset",
            ));
        }
        Ok(side_in)
    }

    /// Prices a trade and checks it against the caller's floor.
    ///
    /// # Errors
    ///
    /// Any error of [`SwapEngine::resolve_path`] or
    /// [`SwapEngine::amount_out`], plus
    /// [`SwapError::InsufficientOutputAmount`] when the output is below
    /// `min_amount_out`.
    pub fn plan(
        pair: &AssetPair,
        reserves: &ReservePool,
        path: &[AssetId],
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<TradePlan, SwapError> {
        let side_in = Self::resolve_path(pair, path)?;
        let amount_out = Self::amount_out(
            amount_in,
            reserves.reserve(side_in),
            reserves.reserve(side_in.flip()),
        )?;
        if amount_out < min_amount_out {
            return Err(SwapError::InsufficientOutputAmount {
                amount_out: amount_out.get(),
                min_amount_out: min_amount_out.get(),
            });
        }
        Ok(TradePlan {
            side_in,
            asset_in: pair.asset(side_in),
            asset_out: pair.asset(side_in.flip()),
            amount_in,
            amount_out,
        })
    }
}

/// A priced trade, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradePlan {
    side_in: Side,
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
}

impl TradePlan {
    /// Side receiving the input.
    #[must_use]
    pub const fn side_in(&self) -> Side {
        self.side_in
    }

    /// Asset taken from the caller.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Asset paid to the recipient.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Exact input.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Computed output.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Applies the trade to `reserves`, verifying the product did not shrink.
    ///
    /// # Errors
    ///
    /// - Any error of [`ReservePool::apply_delta`].
    /// - [`SwapError::Underflow`] if the reserve product would decrease.
    pub fn apply_to(&self, reserves: &mut ReservePool) -> Result<(), SwapError> {
        let mut next = *reserves;
        next.apply_trade(self.side_in, self.amount_in, self.amount_out)?;
        if !product_non_decreasing(
            (reserves.reserve_a().get(), reserves.reserve_b().get()),
            (next.reserve_a().get(), next.reserve_b().get()),
        ) {
            return Err(SwapError::Underflow("reserve product would decrease"));
        }
        *reserves = next;
        Ok(())
    }
}
