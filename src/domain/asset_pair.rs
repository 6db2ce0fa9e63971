//! The pool's fixed pair of distinct assets.

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::SwapError;

/// Which side of the pair an asset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first asset given at pool creation.
    A,
    /// The second asset given at pool creation.
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Two distinct assets in creation order.
///
/// Unlike a router's canonical pair, the order here is whatever the pool
/// was created with: `asset_a` stays "A" for the pool's whole life.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{AssetId, AssetPair, Side};
///
/// let a = AssetId::from_bytes([2u8; 32]);
/// let b = AssetId::from_bytes([1u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct");
/// assert_eq!(pair.asset_a(), a);
/// assert_eq!(pair.side_of(&b), Ok(Side::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if both ids are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, SwapError> {
        if asset_a == asset_b {
            return Err(SwapError::InvalidConfiguration(
                "asset pair requires two distinct assets",
            ));
        }
        Ok(Self { asset_a, asset_b })
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

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Returns `true` if `asset` is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Resolves which side `asset` is on.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownAsset`] if `asset` is not in the pair.
    pub fn side_of(&self, asset: &AssetId) -> Result<Side, SwapError> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(SwapError::UnknownAsset("asset is not part of the pool pair"))
        }
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownAsset`] if `asset` is not in the pair.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, SwapError> {
        self.side_of(asset).map(|side| self.asset(side.flip()))
    }

    /// Checks that `(first, second)` names this pair in either order and
    /// reports whether it was given reversed.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownAsset`] if the two ids are not exactly
    /// this pair.
    pub fn orientation(&self, first: &AssetId, second: &AssetId) -> Result<bool, SwapError> {
        match (self.side_of(first)?, self.side_of(second)?) {
            (Side::A, Side::B) => Ok(false),
            (Side::B, Side::A) => Ok(true),
            _ => Err(SwapError::UnknownAsset("both assets name the same side")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn id(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(id(1), id(2)) else {
            panic!("expected valid pair");
        };
        p
    }

    #[test]
    fn rejects_same_asset() {
        let Err(e) = AssetPair::new(id(1), id(1)) else {
            panic!("expected Err");
        };
        assert!(matches!(e, SwapError::InvalidConfiguration(_)));
    }

    #[test]
    fn keeps_creation_order() {
        let Ok(p) = AssetPair::new(id(9), id(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.asset_a(), id(9));
        assert_eq!(p.asset_b(), id(1));
    }

    #[test]
    fn side_resolution() {
        let p = pair();
        assert_eq!(p.side_of(&id(1)), Ok(Side::A));
        assert_eq!(p.side_of(&id(2)), Ok(Side::B));
        assert!(matches!(p.side_of(&id(3)), Err(SwapError::UnknownAsset(_))));
        assert_eq!(p.other(&id(1)), Ok(id(2)));
        assert!(p.contains(&id(2)));
        assert!(!p.contains(&id(3)));
    }

    #[test]
    fn orientation_accepts_both_orders() {
        let p = pair();
        assert_eq!(p.orientation(&id(1), &id(2)), Ok(false));
        assert_eq!(p.orientation(&id(2), &id(1)), Ok(true));
        assert!(p.orientation(&id(1), &id(1)).is_err());
        assert!(p.orientation(&id(1), &id(5)).is_err());
    }

    #[test]
    fn flip() {
        assert_eq!(Side::A.flip(), Side::B);
        assert_eq!(Side::B.flip(), Side::A);
    }
}
