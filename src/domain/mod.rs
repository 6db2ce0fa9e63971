//! Domain value types used throughout the exchange core.
//!
//! Amounts, shares, prices, identifiers, the asset pair, and the receipts
//! returned by mutating operations.  All types are newtypes with checked
//! or validated constructors.

mod amount;
mod asset_pair;
mod call_context;
mod ids;
mod price;
mod receipts;
mod requests;
mod shares;

pub use amount::{Amount, DECIMALS};
pub use asset_pair::{AssetPair, Side};
pub use call_context::{CallContext, Timestamp};
pub use ids::{AccountId, AssetId};
pub use price::Price;
pub use receipts::{DepositReceipt, TradeReceipt, WithdrawalReceipt};
pub use requests::{DepositRequest, TradeRequest, WithdrawalRequest};
pub use shares::Shares;
