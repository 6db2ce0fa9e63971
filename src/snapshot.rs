//! Persisted state layout of a pool.
//!
//! A [`PoolSnapshot`] is the entire durable state: the asset pair, both
//! reserves, the share supply and every non-zero share balance.  It is a
//! plain `serde` carrier; consistency is checked when it is turned back
//! into a pool with [`Pool::from_snapshot`](crate::pool::Pool::from_snapshot).
//!
//! Balances are stored as a list rather than a map so the layout
//! serializes to formats that only allow string map keys.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, AssetId, Shares};

/// Durable state of one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Asset A.
    pub asset_a: AssetId,
    /// Asset B.
    pub asset_b: AssetId,
    /// Reserve of asset A.
    pub reserve_a: Amount,
    /// Reserve of asset B.
    pub reserve_b: Amount,
    /// Outstanding shares.
    pub total_shares: Shares,
    /// Non-zero balances in account order.
    pub balances: Vec<ShareBalance>,
}

/// One holder's share balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareBalance {
    /// The holder.
    pub holder: AccountId,
    /// Shares held.
    pub shares: Shares,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn json_layout() {
        let snapshot = PoolSnapshot {
            asset_a: AssetId::from_bytes([1u8; 32]),
            asset_b: AssetId::from_bytes([2u8; 32]),
            reserve_a: Amount::new(100),
            reserve_b: Amount::new(200),
            total_shares: Shares::new(141),
            balances: vec![ShareBalance {
                holder: AccountId::from_bytes([3u8; 32]),
                shares: Shares::new(141),
            }],
        };
        let Ok(json) = serde_json::to_value(&snapshot) else {
            panic!("serializable");
        };
        assert_eq!(json["reserve_a"], 100);
        assert_eq!(json["total_shares"], 141);
        assert_eq!(json["balances"][0]["shares"], 141);
        let Ok(back) = serde_json::from_value::<PoolSnapshot>(json) else {
            panic!("deserializable");
        };
        assert_eq!(back, snapshot);
    }
}
