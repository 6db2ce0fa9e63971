//! The pool facade: one constant-product pool over a fixed asset pair.
//!
//! [`Pool`] ties the components together:
//!
//! | Step | Component                                  |
//! |------|--------------------------------------------|
//! | 1    | [`ReentrancyGuard`] taken for the call     |
//! | 2    | [`RequestGuard`] deadline check            |
//! | 3    | [`SwapEngine`] / [`LiquidityEngine`] plan  |
//! | 4    | plan applied to a copy of the state        |
//! | 5    | [`TransferJournal`] moves external assets  |
//! | 6    | copy committed under the write lock        |
//!
//! Any error before step 6 leaves the pool exactly as it was; transfers
//! already made in step 5 are compensated by the journal.
//!
//! All operations take `&self`, so a pool can be shared across threads
//! behind an `Arc`.  Mutations from different threads wait for each other
//! on the reentrancy guard; only a nested call from inside a running
//! operation fails with [`SwapError::Reentrant`].  Reads take a short read
//! lock and never touch the guard; the write lock is never held across a
//! ledger call.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, CallContext, DepositReceipt, DepositRequest, Price,
    Shares, TradeReceipt, TradeRequest, WithdrawalReceipt, WithdrawalRequest,
};
use crate::error::SwapError;
use crate::snapshot::{PoolSnapshot, ShareBalance};
use crate::traits::{AssetLedger, FromConfig};

use super::{
    DepositTerms, LiquidityEngine, PriceOracle, ReentrancyGuard, RequestGuard, ReservePool,
    ShareLedger, SwapEngine, TransferJournal,
};

/// Mutable pool state: reserves plus share balances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PoolState {
    reserves: ReservePool,
    shares: ShareLedger,
}

impl PoolState {
    /// Checks that reserves and shares are empty together and that the
    /// balances add up to the supply.
    fn verify(&self) -> Result<(), &'static str> {
        let (ra, rb) = (self.reserves.reserve_a(), self.reserves.reserve_b());
        let supply = self.shares.total_supply();
        if supply.is_zero() != (ra.is_zero() && rb.is_zero()) {
            return Err("reserves must be zero exactly when no shares exist");
        }
        if !supply.is_zero() && (ra.is_zero() || rb.is_zero()) {
            return Err("a funded pool must hold both assets");
        }
        match self.shares.sum_of_balances() {
            Ok(sum) if sum == supply => Ok(()),
            _ => Err("share balances do not sum to total shares"),
        }
    }
}

/// A two-asset constant-product pool.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`]; the first
/// deposit sets the initial price.
///
/// # Example
///
/// ```rust
/// use simple_swap::prelude::*;
///
/// let (a, b) = (AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
/// let alice = AccountId::from_bytes([9u8; 32]);
/// let pool = Pool::from_config(&PoolConfig::new(a, b).expect("distinct"))
///     .expect("pool created");
///
/// let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xEE; 32]));
/// ledger.fund(a, alice, Amount::from_whole(1_000));
/// ledger.fund(b, alice, Amount::from_whole(1_000));
///
/// let ctx = CallContext::new(alice, 100);
/// let deposit = DepositRequest::new(a, b, alice, 200)
///     .desired(Amount::from_whole(100), Amount::from_whole(200));
/// pool.add_liquidity(&mut ledger, &ctx, &deposit).expect("deposit");
/// assert_eq!(pool.quote(&a, &b).expect("funded"), Price::new(2_000_000_000_000_000_000));
///
/// let trade = TradeRequest::new(Amount::from_whole(10), Amount::ZERO, [a, b], alice, 200);
/// let receipt = pool.trade(&mut ledger, &ctx, &trade).expect("trade");
/// assert_eq!(receipt.amount_out(), Amount::new(18_181_818_181_818_181_818));
/// ```
#[derive(Debug)]
pub struct Pool {
    pair: AssetPair,
    state: RwLock<PoolState>,
    guard: ReentrancyGuard,
}

impl Pool {
    /// Creates an empty pool over `pair`.
    #[must_use]
    pub fn new(pair: AssetPair) -> Self {
        Self::with_state(pair, PoolState::default())
    }

    fn with_state(pair: AssetPair, state: PoolState) -> Self {
        Self {
            pair,
            state: RwLock::new(state),
            guard: ReentrancyGuard::new(),
        }
    }

    // -- reads ---------------------------------------------------------------

    /// The asset pair, in creation order.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Asset A.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.pair.asset_a()
    }

    /// Asset B.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.pair.asset_b()
    }

    /// Current reserve of asset A.
    pub fn reserve_a(&self) -> Amount {
        self.state.read().reserves.reserve_a()
    }

    /// Current reserve of asset B.
    pub fn reserve_b(&self) -> Amount {
        self.state.read().reserves.reserve_b()
    }

    /// Both reserves, read atomically.
    #[must_use]
    pub fn reserves(&self) -> ReservePool {
        self.state.read().reserves
    }

    /// Outstanding shares.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.state.read().shares.total_supply()
    }

    /// Share balance of `holder`.
    #[must_use]
    pub fn share_balance_of(&self, holder: &AccountId) -> Shares {
        self.state.read().shares.balance_of(holder)
    }

    /// Price of `base` in units of `other`, scaled by 10^18.  The two ids
    /// must be the pool's pair, in either order.
    ///
    /// # Errors
    ///
    /// - [`SwapError::UnknownAsset`] if `{base, other}` is not the pair.
    /// - [`SwapError::EmptyPool`] if the base reserve is zero.
    pub fn quote(&self, base: &AssetId, other: &AssetId) -> Result<Price, SwapError> {
        self.pair.orientation(base, other)?;
        self.quote_for(base)
    }

    /// Price of `base` in units of its counterpart, scaled by 10^18.
    ///
    /// # Errors
    ///
    /// - [`SwapError::UnknownAsset`] if `base` is not in the pair.
    /// - [`SwapError::EmptyPool`] if the base reserve is zero.
    pub fn quote_for(&self, base: &AssetId) -> Result<Price, SwapError> {
        PriceOracle::quote(&self.pair, &self.reserves(), base)
    }

    /// The constant-product output formula; see [`SwapEngine::amount_out`].
    ///
    /// # Errors
    ///
    /// Same as [`SwapEngine::amount_out`].
    pub fn amount_out_for(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, SwapError> {
        SwapEngine::amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Output a trade of `amount_in` of `asset_in` would receive right now.
    ///
    /// # Errors
    ///
    /// - [`SwapError::UnknownAsset`] if `asset_in` is not in the pair.
    /// - Any error of [`SwapEngine::amount_out`].
    pub fn preview_trade(
        &self,
        asset_in: &AssetId,
        amount_in: Amount,
    ) -> Result<Amount, SwapError> {
        let side_in = self.pair.side_of(asset_in)?;
        let reserves = self.reserves();
        SwapEngine::amount_out(
            amount_in,
            reserves.reserve(side_in),
            reserves.reserve(side_in.flip()),
        )
    }

    /// Verifies that reserves and shares are consistent.
    ///
    /// # Errors
    ///
    /// [`SwapError::InvalidSnapshot`] naming the violated rule; this is
    /// the error a restore of the current state would fail with.
    pub fn check_invariants(&self) -> Result<(), SwapError> {
        self.state.read().verify().map_err(SwapError::InvalidSnapshot)
    }

    /// Exports the persisted state layout.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        let state = self.state.read();
        PoolSnapshot {
            asset_a: self.pair.asset_a(),
            asset_b: self.pair.asset_b(),
            reserve_a: state.reserves.reserve_a(),
            reserve_b: state.reserves.reserve_b(),
            total_shares: state.shares.total_supply(),
            balances: state
                .shares
                .holders()
                .map(|(holder, shares)| ShareBalance {
                    holder: *holder,
                    shares: *shares,
                })
                .collect(),
        }
    }

    /// Rebuilds a pool from a snapshot.
    ///
    /// # Errors
    ///
    /// [`SwapError::InvalidSnapshot`] if the assets are not distinct, an
    /// account appears twice, the balances do not sum to `total_shares`,
    /// or reserves and shares are inconsistent.
    pub fn from_snapshot(snapshot: &PoolSnapshot) -> Result<Self, SwapError> {
        let pair = AssetPair::new(snapshot.asset_a, snapshot.asset_b)
            .map_err(|_| SwapError::InvalidSnapshot("pool assets must be distinct"))?;
        let shares = ShareLedger::from_balances(
            snapshot
                .balances
                .iter()
                .map(|entry| (entry.holder, entry.shares)),
        )
        .map_err(|err| match err {
            SwapError::InvalidSnapshot(reason) => SwapError::InvalidSnapshot(reason),
            _ => SwapError::InvalidSnapshot("share balances overflow"),
        })?;
        if shares.total_supply() != snapshot.total_shares {
            return Err(SwapError::InvalidSnapshot(
                "share balances do not sum to total shares",
            ));
        }
        let state = PoolState {
            reserves: ReservePool::from_parts(snapshot.reserve_a, snapshot.reserve_b),
            shares,
        };
        state.verify().map_err(SwapError::InvalidSnapshot)?;
        Ok(Self::with_state(pair, state))
    }

    // -- mutations -----------------------------------------------------------

    /// Exact-input trade along `request.path()`.
    ///
    /// Takes `amount_in` of the first path asset from the caller and pays
    /// the constant-product output of the second to the recipient.
    ///
    /// The output and its floor are checked before any transfer, so a
    /// request that misses its floor reports
    /// [`SwapError::InsufficientOutputAmount`] even if the debit would
    /// also have failed.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Reentrant`] if called from inside another mutation.
    /// - [`SwapError::Expired`] if `ctx.now()` is past the deadline.
    /// - [`SwapError::InvalidPath`] / [`SwapError::UnknownAsset`] for a
    ///   malformed path.
    /// - [`SwapError::ZeroInput`] / [`SwapError::ZeroReserve`].
    /// - [`SwapError::InsufficientOutputAmount`] below the caller's floor.
    /// - [`SwapError::TransferFailed`] if the ledger refuses a transfer.
    pub fn trade<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        ctx: &CallContext,
        request: &TradeRequest,
    ) -> Result<TradeReceipt, SwapError> {
        self.guarded("trade", || {
            RequestGuard::check_deadline(request.deadline(), ctx.now())?;

            let mut reserves = self.reserves();
            let plan = SwapEngine::plan(
                &self.pair,
                &reserves,
                request.path(),
                request.amount_in(),
                request.min_amount_out(),
            )?;
            plan.apply_to(&mut reserves)?;
            debug!(
                caller = %ctx.caller(),
                asset_in = %plan.asset_in(),
                amount_in = %plan.amount_in(),
                amount_out = %plan.amount_out(),
                "trade planned"
            );

            let mut journal = TransferJournal::new(ledger);
            journal.debit(plan.asset_in(), ctx.caller(), plan.amount_in())?;
            journal.credit(plan.asset_out(), request.recipient(), plan.amount_out())?;
            journal.commit();

            self.state.write().reserves = reserves;
            info!(
                caller = %ctx.caller(),
                recipient = %request.recipient(),
                amount_in = %plan.amount_in(),
                amount_out = %plan.amount_out(),
                reserve_a = %reserves.reserve_a(),
                reserve_b = %reserves.reserve_b(),
                "trade executed"
            );
            Ok(TradeReceipt::new(plan.amount_in(), plan.amount_out()))
        })
    }

    /// Deposits both assets and mints shares to the recipient.
    ///
    /// Amounts in `request` and in the returned receipt follow the order
    /// in which the request names the assets.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Reentrant`] / [`SwapError::Expired`].
    /// - [`SwapError::UnknownAsset`] if the request does not name the pair.
    /// - [`SwapError::ZeroInput`] if both desired amounts are zero.
    /// - [`SwapError::InsufficientInitialLiquidity`] if no shares would be
    ///   minted.
    /// - [`SwapError::BelowMinimumA`] / [`SwapError::BelowMinimumB`].
    /// - [`SwapError::TransferFailed`] if the ledger refuses a debit.
    pub fn add_liquidity<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        ctx: &CallContext,
        request: &DepositRequest,
    ) -> Result<DepositReceipt, SwapError> {
        self.guarded("add_liquidity", || {
            RequestGuard::check_deadline(request.deadline(), ctx.now())?;
            let reversed = self.pair.orientation(&request.asset_a(), &request.asset_b())?;

            let (desired_a, desired_b) = oriented(
                reversed,
                request.amount_a_desired(),
                request.amount_b_desired(),
            );
            let (min_a, min_b) =
                oriented(reversed, request.amount_a_min(), request.amount_b_min());

            let mut next = self.state.read().clone();
            let plan = LiquidityEngine::plan_deposit(
                &next.reserves,
                next.shares.total_supply(),
                DepositTerms {
                    desired_a,
                    desired_b,
                    min_a,
                    min_b,
                },
            )
            .map_err(|err| reorient_error(err, reversed))?;
            plan.apply_to(&mut next.reserves)?;
            next.shares.mint(request.recipient(), plan.shares())?;
            debug!(
                caller = %ctx.caller(),
                accepted_a = %plan.accepted_a(),
                accepted_b = %plan.accepted_b(),
                shares = %plan.shares(),
                "deposit planned"
            );

            let mut journal = TransferJournal::new(ledger);
            journal.debit(self.asset_a(), ctx.caller(), plan.accepted_a())?;
            journal.debit(self.asset_b(), ctx.caller(), plan.accepted_b())?;
            journal.commit();

            let (reserve_a, reserve_b) = (next.reserves.reserve_a(), next.reserves.reserve_b());
            *self.state.write() = next;
            info!(
                caller = %ctx.caller(),
                recipient = %request.recipient(),
                accepted_a = %plan.accepted_a(),
                accepted_b = %plan.accepted_b(),
                shares = %plan.shares(),
                reserve_a = %reserve_a,
                reserve_b = %reserve_b,
                "liquidity added"
            );
            let (accepted_a, accepted_b) =
                oriented(reversed, plan.accepted_a(), plan.accepted_b());
            Ok(DepositReceipt::new(accepted_a, accepted_b, plan.shares()))
        })
    }

    /// Burns the caller's shares and pays both assets to the recipient.
    ///
    /// Amounts in `request` and in the returned receipt follow the order
    /// in which the request names the assets.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Reentrant`] / [`SwapError::Expired`].
    /// - [`SwapError::UnknownAsset`] if the request does not name the pair.
    /// - [`SwapError::ZeroInput`] if `shares` is zero.
    /// - [`SwapError::InsufficientShares`] if the caller holds fewer shares.
    /// - [`SwapError::BelowMinimumA`] / [`SwapError::BelowMinimumB`].
    /// - [`SwapError::TransferFailed`] if the ledger refuses a credit.
    pub fn remove_liquidity<L: AssetLedger + ?Sized>(
        &self,
        ledger: &mut L,
        ctx: &CallContext,
        request: &WithdrawalRequest,
    ) -> Result<WithdrawalReceipt, SwapError> {
        self.guarded("remove_liquidity", || {
            RequestGuard::check_deadline(request.deadline(), ctx.now())?;
            let reversed = self.pair.orientation(&request.asset_a(), &request.asset_b())?;
            let (min_a, min_b) =
                oriented(reversed, request.amount_a_min(), request.amount_b_min());

            let mut next = self.state.read().clone();
            let plan = LiquidityEngine::plan_withdrawal(
                &next.reserves,
                next.shares.total_supply(),
                next.shares.balance_of(&ctx.caller()),
                request.shares(),
                min_a,
                min_b,
            )
            .map_err(|err| reorient_error(err, reversed))?;
            next.shares.burn(ctx.caller(), plan.shares())?;
            plan.apply_to(&mut next.reserves)?;
            debug!(
                caller = %ctx.caller(),
                shares = %plan.shares(),
                amount_a = %plan.amount_a(),
                amount_b = %plan.amount_b(),
                "withdrawal planned"
            );

            let mut journal = TransferJournal::new(ledger);
            journal.credit(self.asset_a(), request.recipient(), plan.amount_a())?;
            journal.credit(self.asset_b(), request.recipient(), plan.amount_b())?;
            journal.commit();

            let (reserve_a, reserve_b) = (next.reserves.reserve_a(), next.reserves.reserve_b());
            *self.state.write() = next;
            info!(
                caller = %ctx.caller(),
                recipient = %request.recipient(),
                shares = %plan.shares(),
                amount_a = %plan.amount_a(),
                amount_b = %plan.amount_b(),
                reserve_a = %reserve_a,
                reserve_b = %reserve_b,
                "liquidity removed"
            );
            let (amount_a, amount_b) = oriented(reversed, plan.amount_a(), plan.amount_b());
            Ok(WithdrawalReceipt::new(amount_a, amount_b))
        })
    }

    /// Moves `amount` of the caller's shares to `to`.  No external
    /// transfers are made.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Reentrant`] if called from inside another mutation.
    /// - [`SwapError::InsufficientShares`] if the caller holds fewer shares.
    pub fn transfer_shares(
        &self,
        ctx: &CallContext,
        to: AccountId,
        amount: Shares,
    ) -> Result<(), SwapError> {
        self.guarded("transfer_shares", || {
            self.state.write().shares.transfer(ctx.caller(), to, amount)?;
            info!(from = %ctx.caller(), to = %to, shares = %amount, "shares transferred");
            Ok(())
        })
    }

    /// Runs `op` while holding the reentrancy guard, logging rejections.
    fn guarded<T>(
        &self,
        operation: &'static str,
        op: impl FnOnce() -> Result<T, SwapError>,
    ) -> Result<T, SwapError> {
        let _entered = self.guard.enter().map_err(|err| {
            warn!(operation, "reentrant call rejected");
            err
        })?;
        op().map_err(|err| {
            warn!(operation, error = %err, "request rejected");
            err
        })
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`] failures.
    fn from_config(config: &PoolConfig) -> Result<Self, SwapError> {
        config.validate()?;
        Ok(Self::new(config.pair()?))
    }
}

/// Returns `(first, second)` in pool order.
const fn oriented(reversed: bool, first: Amount, second: Amount) -> (Amount, Amount) {
    if reversed {
        (second, first)
    } else {
        (first, second)
    }
}

/// Maps pool-side minimum errors back to the sides the request named.
fn reorient_error(err: SwapError, reversed: bool) -> SwapError {
    if !reversed {
        return err;
    }
    match err {
        SwapError::BelowMinimumA { amount, minimum } => {
            SwapError::BelowMinimumB { amount, minimum }
        }
        SwapError::BelowMinimumB { amount, minimum } => {
            SwapError::BelowMinimumA { amount, minimum }
        }
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;

    const NOW: u64 = 1_000;

    fn id(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xA1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xB0; 32])
    }

    fn pool() -> Pool {
        let Ok(cfg) = PoolConfig::new(id(1), id(2)) else {
            panic!("valid config");
        };
        let Ok(pool) = Pool::from_config(&cfg) else {
            panic!("pool created");
        };
        pool
    }

    fn funded_pool() -> (Pool, InMemoryLedger) {
        let pool = pool();
        let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xEE; 32]));
        ledger.fund(id(1), alice(), Amount::from_whole(1_000));
        ledger.fund(id(2), alice(), Amount::from_whole(1_000));
        let request = DepositRequest::new(id(1), id(2), alice(), NOW)
            .desired(Amount::from_whole(100), Amount::from_whole(200));
        let Ok(_) = pool.add_liquidity(&mut ledger, &CallContext::new(alice(), NOW), &request)
        else {
            panic!("initial deposit");
        };
        (pool, ledger)
    }

    #[test]
    fn pool_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pool>();
    }

    #[test]
    fn empty_pool_reads() {
        let pool = pool();
        assert_eq!(pool.asset_a(), id(1));
        assert_eq!(pool.asset_b(), id(2));
        assert_eq!(pool.reserve_a(), Amount::ZERO);
        assert_eq!(pool.total_shares(), Shares::ZERO);
        assert_eq!(pool.quote_for(&id(1)), Err(SwapError::EmptyPool));
        assert_eq!(pool.check_invariants(), Ok(()));
    }

    #[test]
    fn quote_requires_the_pair() {
        let (pool, _) = funded_pool();
        assert_eq!(
            pool.quote(&id(1), &id(2)),
            Ok(Price::new(2_000_000_000_000_000_000))
        );
        assert_eq!(
            pool.quote(&id(2), &id(1)),
            Ok(Price::new(500_000_000_000_000_000))
        );
        assert!(matches!(
            pool.quote(&id(1), &id(1)),
            Err(SwapError::UnknownAsset(_))
        ));
        assert!(matches!(
            pool.quote(&id(1), &id(3)),
            Err(SwapError::UnknownAsset(_))
        ));
    }

    #[test]
    fn preview_matches_trade() {
        let (pool, mut ledger) = funded_pool();
        let Ok(preview) = pool.preview_trade(&id(2), Amount::from_whole(20)) else {
            panic!("preview");
        };
        let request =
            TradeRequest::new(Amount::from_whole(20), Amount::ZERO, [id(2), id(1)], bob(), NOW);
        ledger.fund(id(2), bob(), Amount::from_whole(20));
        let Ok(receipt) = pool.trade(&mut ledger, &CallContext::new(bob(), NOW), &request) else {
            panic!("trade");
        };
        assert_eq!(receipt.amount_out(), preview);
        assert_eq!(ledger.balance_of(&id(1), &bob()), preview);
    }

    #[test]
    fn floor_is_checked_before_the_debit() {
        let (pool, mut ledger) = funded_pool();
        // bob holds nothing, so the debit would fail too.
        let request = TradeRequest::new(
            Amount::from_whole(10),
            Amount::from_whole(19),
            [id(1), id(2)],
            bob(),
            NOW,
        );
        assert!(matches!(
            pool.trade(&mut ledger, &CallContext::new(bob(), NOW), &request),
            Err(SwapError::InsufficientOutputAmount { .. })
        ));
        let reachable = TradeRequest::new(
            Amount::from_whole(10),
            Amount::ZERO,
            [id(1), id(2)],
            bob(),
            NOW,
        );
        assert!(matches!(
            pool.trade(&mut ledger, &CallContext::new(bob(), NOW), &reachable),
            Err(SwapError::TransferFailed(_))
        ));
    }

    #[test]
    fn reversed_deposit_reports_in_request_order() {
        let (pool, mut ledger) = funded_pool();
        let request = DepositRequest::new(id(2), id(1), alice(), NOW)
            .desired(Amount::from_whole(100), Amount::from_whole(50));
        let Ok(receipt) =
            pool.add_liquidity(&mut ledger, &CallContext::new(alice(), NOW), &request)
        else {
            panic!("deposit");
        };
        assert_eq!(receipt.accepted_a(), Amount::from_whole(100));
        assert_eq!(receipt.accepted_b(), Amount::from_whole(50));
        assert_eq!(pool.reserve_a(), Amount::from_whole(150));
        assert_eq!(pool.reserve_b(), Amount::from_whole(300));
    }

    #[test]
    fn reversed_minimum_error_names_request_side() {
        let (pool, mut ledger) = funded_pool();
        // Request names B first; B is trimmed to 100 against a minimum of 150.
        let request = DepositRequest::new(id(2), id(1), alice(), NOW)
            .desired(Amount::from_whole(300), Amount::from_whole(50))
            .minimums(Amount::from_whole(150), Amount::ZERO);
        assert!(matches!(
            pool.add_liquidity(&mut ledger, &CallContext::new(alice(), NOW), &request),
            Err(SwapError::BelowMinimumA { .. })
        ));
    }

    #[test]
    fn transfer_shares_moves_ownership() {
        let (pool, _) = funded_pool();
        let total = pool.total_shares();
        let Ok(()) = pool.transfer_shares(&CallContext::new(alice(), NOW), bob(), Shares::new(5))
        else {
            panic!("transfer");
        };
        assert_eq!(pool.share_balance_of(&bob()), Shares::new(5));
        assert_eq!(pool.total_shares(), total);
        assert!(matches!(
            pool.transfer_shares(&CallContext::new(bob(), NOW), alice(), Shares::new(6)),
            Err(SwapError::InsufficientShares { have: 5, need: 6 })
        ));
    }

    #[test]
    fn snapshot_restores_identical_state() {
        let (pool, _) = funded_pool();
        let Ok(()) = pool.transfer_shares(&CallContext::new(alice(), NOW), bob(), Shares::new(7))
        else {
            panic!("transfer");
        };
        let snapshot = pool.snapshot();
        let Ok(restored) = Pool::from_snapshot(&snapshot) else {
            panic!("restore");
        };
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.share_balance_of(&bob()), Shares::new(7));
    }

    #[test]
    fn inconsistent_snapshots_rejected() {
        let (pool, _) = funded_pool();

        let mut bad_total = pool.snapshot();
        bad_total.total_shares = Shares::new(1);
        assert!(matches!(
            Pool::from_snapshot(&bad_total),
            Err(SwapError::InvalidSnapshot(_))
        ));

        let mut drained = pool.snapshot();
        drained.reserve_a = Amount::ZERO;
        drained.reserve_b = Amount::ZERO;
        assert!(matches!(
            Pool::from_snapshot(&drained),
            Err(SwapError::InvalidSnapshot(_))
        ));

        let mut same_assets = pool.snapshot();
        same_assets.asset_b = same_assets.asset_a;
        assert!(matches!(
            Pool::from_snapshot(&same_assets),
            Err(SwapError::InvalidSnapshot(_))
        ));
    }
}
