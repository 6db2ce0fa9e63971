//! Trait seams of the exchange core.
//!
//! - [`AssetLedger`]: the external asset-transfer collaborator.
//! - [`FromConfig`]: configuration-driven construction.

mod asset_ledger;
mod from_config;

pub use asset_ledger::{AssetLedger, TransferError};
pub use from_config::FromConfig;
