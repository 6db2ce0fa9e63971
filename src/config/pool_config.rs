//! Configuration for a two-asset constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{AssetId, AssetPair};
use crate::error::SwapError;

/// Immutable parameters of a pool: the asset pair, in creation order.
///
/// This is the only configuration the core knows about.  Pools always
/// start empty; the first deposit sets the initial price.
///
/// # Validation
///
/// - The two assets must be distinct.
///
/// # Loading
///
/// The struct is `serde`-deserializable, so deployments can keep it in a
/// JSON file:
///
/// ```
/// use simple_swap::config::PoolConfig;
///
/// let json = format!(
///     r#"{{"asset_a":{:?},"asset_b":{:?}}}"#,
///     [1u8; 32], [2u8; 32]
/// );
/// let cfg: PoolConfig = serde_json::from_str(&json).expect("valid json");
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the assets are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, SwapError> {
        let config = Self { asset_a, asset_b };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`PoolConfig::new`], so consumers call
    /// this again before use.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the assets are equal.
    pub fn validate(&self) -> Result<(), SwapError> {
        self.pair().map(|_| ())
    }

    /// Returns the validated asset pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the assets are equal.
    pub fn pair(&self) -> Result<AssetPair, SwapError> {
        AssetPair::new(self.asset_a, self.asset_b)
    }

    /// Returns asset A.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }
}
