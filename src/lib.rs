//! # Simple Swap
//!
//! Core of a two-asset constant-product exchange: a liquidity pool that
//! takes paired deposits in exchange for proportional shares, trades one
//! asset for the other along `x × y = k`, and pays shares back out as
//! reserves.
//!
//! All arithmetic is integer fixed point with 18 fractional digits.
//! Products are evaluated in 256 bits and every quotient is floored, so
//! rounding always favours the pool.  No fee is charged.
//!
//! The pool never holds external balances itself.  Assets move through
//! an [`AssetLedger`](traits::AssetLedger) supplied by the caller; the
//! pool commits its own state only after every transfer succeeded and
//! compensates partial transfer sequences.
//!
//! # Quick Start
//!
//! ```rust
//! use simple_swap::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let lp = AccountId::from_bytes([0xA1; 32]);
//! let trader = AccountId::from_bytes([0xB0; 32]);
//!
//! // 1. Create an empty pool from its configuration
//! let config = PoolConfig::new(usdc, weth).expect("distinct assets");
//! let pool = Pool::from_config(&config).expect("pool created");
//!
//! // 2. Fund parties on a ledger
//! let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xEE; 32]));
//! ledger.fund(usdc, lp, Amount::from_whole(100));
//! ledger.fund(weth, lp, Amount::from_whole(200));
//! ledger.fund(usdc, trader, Amount::from_whole(10));
//!
//! // 3. Seed the pool; the first deposit sets the price
//! let deadline = 1_700_000_600;
//! let seed = DepositRequest::new(usdc, weth, lp, deadline)
//!     .desired(Amount::from_whole(100), Amount::from_whole(200));
//! let minted = pool
//!     .add_liquidity(&mut ledger, &CallContext::new(lp, 1_700_000_000), &seed)
//!     .expect("seeded");
//! assert_eq!(minted.shares_minted(), Shares::new(141_421_356_237_309_504_880));
//!
//! // 4. Trade 10 USDC for WETH
//! let trade = TradeRequest::new(Amount::from_whole(10), Amount::ZERO, [usdc, weth], trader, deadline);
//! let receipt = pool
//!     .trade(&mut ledger, &CallContext::new(trader, 1_700_000_000), &trade)
//!     .expect("trade executed");
//! assert_eq!(receipt.amount_out().to_string(), "18.181818181818181818");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  builds requests, supplies CallContext + AssetLedger
//! └──────┬───────┘
//!        │ trade / add_liquidity / remove_liquidity
//!        ▼
//! ┌──────────────┐
//! │     Pool     │  reentrancy guard, deadline, plan, journal, commit
//! └──────┬───────┘
//!        │ plans
//!        ▼
//! ┌──────────────┐
//! │   Engines    │  SwapEngine, LiquidityEngine, PriceOracle
//! └──────┬───────┘
//!        │ deltas
//!        ▼
//! ┌──────────────┐
//! │    State     │  ReservePool, ShareLedger
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Price`](domain::Price), requests and receipts |
//! | [`math`] | Checked arithmetic and 256-bit `mul_div` / `isqrt_product` |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), the pool blueprint |
//! | [`traits`] | [`AssetLedger`](traits::AssetLedger) and [`FromConfig`](traits::FromConfig) seams |
//! | [`pool`] | [`Pool`](pool::Pool) and its components |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference collaborator |
//! | [`snapshot`] | [`PoolSnapshot`](snapshot::PoolSnapshot), the persisted state layout |
//! | [`error`] | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber:
//! `debug` for computed plans, `info` for committed operations, `warn`
//! for rejected requests and rollbacks, `error` when a compensating
//! transfer fails.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod snapshot;
pub mod traits;
