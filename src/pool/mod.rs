//! The exchange core and its components.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ReservePool`] | owns both reserves; the only writer of reserve values |
//! | [`ShareLedger`] | total share supply and per-holder balances |
//! | [`SwapEngine`] | constant-product output and trade plans |
//! | [`LiquidityEngine`] | deposit and withdrawal plans |
//! | [`PriceOracle`] | marginal price from reserves |
//! | [`RequestGuard`] | deadline check |
//! | [`ReentrancyGuard`] | serializes mutations; rejects nested ones |
//! | [`TransferJournal`] | compensates partial transfer sequences |
//! | [`Pool`] | the public facade combining all of the above |

mod exchange;
mod journal;
mod liquidity_engine;
mod price_oracle;
mod reentrancy;
mod request_guard;
mod reserve_pool;
mod share_ledger;
mod swap_engine;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use exchange::Pool;
pub use journal::TransferJournal;
pub use liquidity_engine::{DepositPlan, DepositTerms, LiquidityEngine, WithdrawalPlan};
pub use price_oracle::PriceOracle;
pub use reentrancy::{Entered, ReentrancyGuard};
pub use request_guard::RequestGuard;
pub use reserve_pool::{ReserveDelta, ReservePool};
pub use share_ledger::ShareLedger;
pub use swap_engine::{SwapEngine, TradePlan};
