//! Property-based tests for the pool invariants.
//!
//! 1. **Product preservation**: `reserve_a × reserve_b` never decreases
//!    across a trade.
//! 2. **Output bounds**: `amount_out` is monotone in `amount_in` and
//!    strictly below `reserve_out`.
//! 3. **Deposit proportionality**: a deposit into a funded pool keeps the
//!    reserve ratio within one unit of rounding.
//! 4. **Round trip**: deposit then withdraw of the minted shares returns
//!    at most what was deposited.
//! 5. **Consistency**: reserves and shares stay consistent under random
//!    operation sequences.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, CallContext, DepositRequest, Shares, TradeRequest,
    WithdrawalRequest,
};
use crate::ledger::InMemoryLedger;
use crate::math::{full_mul, product_non_decreasing, U256};
use crate::traits::FromConfig;

use super::{Pool, SwapEngine};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const NOW: u64 = 1_700_000_000;

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([0x10; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0x20; 32])
}

fn ctx(who: AccountId) -> CallContext {
    CallContext::new(who, NOW)
}

/// A pool seeded by `provider()` with `(ra, rb)`; both parties are funded
/// generously in both assets.
fn seeded_pool(ra: u128, rb: u128) -> (Pool, InMemoryLedger) {
    let Ok(cfg) = PoolConfig::new(asset_a(), asset_b()) else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::from_config(&cfg) else {
        panic!("valid pool");
    };
    let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xEE; 32]));
    for who in [provider(), trader()] {
        ledger.fund(asset_a(), who, Amount::new(u128::MAX / 8));
        ledger.fund(asset_b(), who, Amount::new(u128::MAX / 8));
    }
    let request = DepositRequest::new(asset_a(), asset_b(), provider(), NOW)
        .desired(Amount::new(ra), Amount::new(rb));
    let Ok(_) = pool.add_liquidity(&mut ledger, &ctx(provider()), &request) else {
        panic!("seed deposit");
    };
    (pool, ledger)
}

fn product(pool: &Pool) -> U256 {
    full_mul(pool.reserve_a().get(), pool.reserve_b().get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves between 10^6 raw units and 10^12 whole units.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000u128..=1_000_000_000_000_000_000_000_000_000_000u128
}

/// Trade sizes from one raw unit to 10^9 whole units.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000_000u128
}

#[derive(Debug, Clone, Copy)]
enum Op {
    TradeAToB(u128),
    TradeBToA(u128),
    Deposit(u128, u128),
    WithdrawPercent(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        trade_strategy().prop_map(Op::TradeAToB),
        trade_strategy().prop_map(Op::TradeBToA),
        (trade_strategy(), trade_strategy()).prop_map(|(a, b)| Op::Deposit(a, b)),
        (1u8..=100u8).prop_map(Op::WithdrawPercent),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_trade_never_shrinks_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        trades in prop::collection::vec((any::<bool>(), trade_strategy()), 1..8),
    ) {
        let (pool, mut ledger) = seeded_pool(ra, rb);
        for (a_to_b, amount) in trades {
            let path = if a_to_b { [asset_a(), asset_b()] } else { [asset_b(), asset_a()] };
            let before = product(&pool);
            let request = TradeRequest::new(Amount::new(amount), Amount::ZERO, path, trader(), NOW);
            if pool.trade(&mut ledger, &ctx(trader()), &request).is_err() {
                continue;
            }
            prop_assert!(product(&pool) >= before, "product decreased");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Output bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amount_out_monotone_and_bounded(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        x in trade_strategy(),
        y in trade_strategy(),
    ) {
        let (small, large) = if x <= y { (x, y) } else { (y, x) };
        let out = |amount: u128| {
            SwapEngine::amount_out(Amount::new(amount), Amount::new(reserve_in), Amount::new(reserve_out))
        };
        let (Ok(out_small), Ok(out_large)) = (out(small), out(large)) else {
            return Ok(());
        };
        prop_assert!(out_small <= out_large, "not monotone: {} > {}", out_small, out_large);
        prop_assert!(out_large.get() < reserve_out, "output drained the reserve");
        prop_assert!(product_non_decreasing(
            (reserve_in, reserve_out),
            (reserve_in + large, reserve_out - out_large.get()),
        ));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Deposit proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_keeps_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in trade_strategy(),
        db in trade_strategy(),
    ) {
        let (pool, mut ledger) = seeded_pool(ra, rb);
        let request = DepositRequest::new(asset_a(), asset_b(), provider(), NOW)
            .desired(Amount::new(da), Amount::new(db));
        if pool.add_liquidity(&mut ledger, &ctx(provider()), &request).is_err() {
            return Ok(());
        }
        let (ra2, rb2) = (pool.reserve_a().get(), pool.reserve_b().get());
        // ra2/rb2 vs ra/rb, cross-multiplied.
        let lhs = full_mul(ra2, rb);
        let rhs = full_mul(rb2, ra);
        let diff = if lhs > rhs { lhs - rhs } else { rhs - lhs };
        let tolerance = U256::from(ra.max(rb));
        prop_assert!(diff <= tolerance, "ratio drifted by {} (tolerance {})", diff, tolerance);
        prop_assert!(pool.check_invariants().is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in trade_strategy(),
        db in trade_strategy(),
    ) {
        let (pool, mut ledger) = seeded_pool(ra, rb);
        let deposit = DepositRequest::new(asset_a(), asset_b(), trader(), NOW)
            .desired(Amount::new(da), Amount::new(db));
        let Ok(receipt) = pool.add_liquidity(&mut ledger, &ctx(trader()), &deposit) else {
            return Ok(());
        };
        let withdrawal = WithdrawalRequest::new(
            asset_a(),
            asset_b(),
            receipt.shares_minted(),
            trader(),
            NOW,
        );
        let Ok(back) = pool.remove_liquidity(&mut ledger, &ctx(trader()), &withdrawal) else {
            return Err(TestCaseError::fail("withdrawal of freshly minted shares failed"));
        };
        prop_assert!(back.amount_a() <= receipt.accepted_a());
        prop_assert!(back.amount_b() <= receipt.accepted_b());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Consistency under random sequences
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_random_sequences_stay_consistent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..16),
    ) {
        let (pool, mut ledger) = seeded_pool(ra, rb);
        for op in ops {
            let snapshot_before = pool.snapshot();
            let result = match op {
                Op::TradeAToB(amount) | Op::TradeBToA(amount) => {
                    let path = if matches!(op, Op::TradeAToB(_)) {
                        [asset_a(), asset_b()]
                    } else {
                        [asset_b(), asset_a()]
                    };
                    let request =
                        TradeRequest::new(Amount::new(amount), Amount::ZERO, path, trader(), NOW);
                    pool.trade(&mut ledger, &ctx(trader()), &request).map(|_| ())
                }
                Op::Deposit(a, b) => {
                    let request = DepositRequest::new(asset_a(), asset_b(), provider(), NOW)
                        .desired(Amount::new(a), Amount::new(b));
                    pool.add_liquidity(&mut ledger, &ctx(provider()), &request).map(|_| ())
                }
                Op::WithdrawPercent(pct) => {
                    let held = pool.share_balance_of(&provider()).get();
                    let shares = held / 100 * u128::from(pct);
                    let request = WithdrawalRequest::new(
                        asset_a(),
                        asset_b(),
                        Shares::new(shares),
                        provider(),
                        NOW,
                    );
                    pool.remove_liquidity(&mut ledger, &ctx(provider()), &request).map(|_| ())
                }
            };
            if result.is_err() {
                prop_assert_eq!(pool.snapshot(), snapshot_before, "failed op mutated state");
            }
            prop_assert!(pool.check_invariants().is_ok());
            prop_assert_eq!(
                ledger.custody_balance(&asset_a()),
                pool.reserve_a(),
                "custody and reserve A disagree"
            );
            prop_assert_eq!(
                ledger.custody_balance(&asset_b()),
                pool.reserve_b(),
                "custody and reserve B disagree"
            );
        }
    }
}
