//! Full pool lifecycle: seed, proportional deposit, trades in both
//! directions, a slippage rejection, a rolled-back transfer and a final
//! withdrawal, with pool events printed through `tracing-subscriber`.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=simple_swap=debug cargo run --example trade_lifecycle
//! ```

use simple_swap::prelude::*;
use tracing_subscriber::EnvFilter;

/// Ledger wrapper that refuses every credit, to show a rollback.
struct FrozenPayouts<'a>(&'a mut InMemoryLedger);

impl AssetLedger for FrozenPayouts<'_> {
    fn debit(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        self.0.debit(asset, from, amount)
    }

    fn credit(
        &mut self,
        _asset: AssetId,
        _to: AccountId,
        _amount: Amount,
    ) -> core::result::Result<(), TransferError> {
        Err(TransferError::Rejected("payouts frozen".into()))
    }
}

fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "simple_swap=debug".into()),
        )
        .init();

    println!("=== Constant-Product Pool Lifecycle ===\n");

    // ── 1. Assets, parties and the ledger ───────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let alice = AccountId::from_bytes([0xA1; 32]);
    let bob = AccountId::from_bytes([0xB0; 32]);

    let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xEE; 32]));
    for who in [alice, bob] {
        ledger.fund(usdc, who, Amount::from_whole(1_000));
        ledger.fund(weth, who, Amount::from_whole(1_000));
    }

    let now: Timestamp = 1_700_000_000;
    let deadline = now + 300;

    // ── 2. Create the pool ──────────────────────────────────────────────
    let pool = Pool::from_config(&PoolConfig::new(usdc, weth)?)?;
    println!("Pool created: {} / {}", pool.asset_a(), pool.asset_b());

    // ── 3. Seed: the first deposit sets the price ───────────────────────
    let seed = DepositRequest::new(usdc, weth, alice, deadline)
        .desired(Amount::from_whole(100), Amount::from_whole(200));
    let minted = pool.add_liquidity(&mut ledger, &CallContext::new(alice, now), &seed)?;
    println!("\nAlice seeded 100 USDC + 200 WETH");
    println!("  Shares minted: {}", minted.shares_minted());
    println!("  Price (WETH per USDC): {}", pool.quote(&usdc, &weth)?);

    // ── 4. Proportional deposit: the excess side is trimmed ─────────────
    let deposit = DepositRequest::new(usdc, weth, bob, deadline)
        .desired(Amount::from_whole(50), Amount::from_whole(120))
        .minimums(Amount::from_whole(45), Amount::from_whole(90));
    let receipt = pool.add_liquidity(&mut ledger, &CallContext::new(bob, now), &deposit)?;
    println!("\nBob offered 50 USDC + 120 WETH");
    println!(
        "  Accepted: {} USDC + {} WETH for {} shares",
        receipt.accepted_a(),
        receipt.accepted_b(),
        receipt.shares_minted()
    );

    // ── 5. Trades in both directions ────────────────────────────────────
    let preview = pool.preview_trade(&usdc, Amount::from_whole(10))?;
    let trade = TradeRequest::new(Amount::from_whole(10), preview, [usdc, weth], bob, deadline);
    let out = pool.trade(&mut ledger, &CallContext::new(bob, now), &trade)?;
    println!("\nBob sold 10 USDC for {} WETH", out.amount_out());

    let back = TradeRequest::new(Amount::from_whole(5), Amount::ZERO, [weth, usdc], bob, deadline);
    let out = pool.trade(&mut ledger, &CallContext::new(bob, now + 1), &back)?;
    println!("Bob sold 5 WETH for {} USDC", out.amount_out());
    println!("  Reserves: {} USDC / {} WETH", pool.reserve_a(), pool.reserve_b());

    // ── 6. Rejections leave the pool untouched ──────────────────────────
    let greedy = TradeRequest::new(
        Amount::from_whole(10),
        Amount::from_whole(100),
        [usdc, weth],
        bob,
        deadline,
    );
    match pool.trade(&mut ledger, &CallContext::new(bob, now), &greedy) {
        Ok(_) => println!("\nUnexpected fill"),
        Err(err) => println!("\nSlippage floor enforced: {err}"),
    }

    let expired = pool.trade(&mut ledger, &CallContext::new(bob, deadline + 1), &trade);
    if let Err(err) = expired {
        println!("Late request rejected: {err}");
    }

    let before = pool.snapshot();
    let mut frozen = FrozenPayouts(&mut ledger);
    if let Err(err) = pool.trade(&mut frozen, &CallContext::new(bob, now), &back) {
        println!("Payout refused and rolled back: {err}");
    }
    println!("  State unchanged: {}", pool.snapshot() == before);

    // ── 7. Alice withdraws everything she owns ──────────────────────────
    let shares = pool.share_balance_of(&alice);
    let exit = WithdrawalRequest::new(usdc, weth, shares, alice, deadline);
    let paid = pool.remove_liquidity(&mut ledger, &CallContext::new(alice, now), &exit)?;
    println!("\nAlice burned {shares} shares");
    println!("  Received: {} USDC + {} WETH", paid.amount_a(), paid.amount_b());
    println!("  Remaining shares: {}", pool.total_shares());

    pool.check_invariants()?;
    println!("\nInvariants hold");
    Ok(())
}
