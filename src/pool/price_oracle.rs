//! Marginal price from current reserves.

use crate::domain::{Amount, AssetId, AssetPair, Price};
use crate::error::SwapError;
use crate::math::mul_div;

use super::ReservePool;

/// Read-only price queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceOracle;

impl PriceOracle {
    /// Units of the counterpart asset per one unit of `base`, scaled by
    /// 10^18: `⌊reserve_other × 10^18 / reserve_base⌋`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::UnknownAsset`] if `base` is not in the pair.
    /// - [`SwapError::EmptyPool`] if the base reserve is zero.
    /// - [`SwapError::Overflow`] if the scaled price exceeds `u128`.
    pub fn quote(
        pair: &AssetPair,
        reserves: &ReservePool,
        base: &AssetId,
    ) -> Result<Price, SwapError> {
        let side = pair.side_of(base)?;
        let reserve_base = reserves.reserve(side);
        if reserve_base.is_zero() {
            return Err(SwapError::EmptyPool);
        }
        let reserve_other = reserves.reserve(side.flip());
        mul_div(reserve_other.get(), Amount::WAD.get(), reserve_base.get())
            .map(Price::new)
            .ok_or(SwapError::Overflow("price overflow"))
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
        let Ok(pair) = AssetPair::new(id(1), id(2)) else {
            panic!("distinct assets");
        };
        pair
    }

    #[test]
    fn quote_both_directions() {
        let r = ReservePool::from_parts(Amount::from_whole(100), Amount::from_whole(200));
        assert_eq!(
            PriceOracle::quote(&pair(), &r, &id(1)),
            Ok(Price::new(2_000_000_000_000_000_000))
        );
        assert_eq!(
            PriceOracle::quote(&pair(), &r, &id(2)),
            Ok(Price::new(500_000_000_000_000_000))
        );
    }

    #[test]
    fn quote_rounds_down() {
        let r = ReservePool::from_parts(Amount::new(3), Amount::new(1));
        assert_eq!(
            PriceOracle::quote(&pair(), &r, &id(1)),
            Ok(Price::new(333_333_333_333_333_333))
        );
    }

    #[test]
    fn empty_pool() {
        assert_eq!(
            PriceOracle::quote(&pair(), &ReservePool::EMPTY, &id(1)),
            Err(SwapError::EmptyPool)
        );
    }

    #[test]
    fn unknown_asset() {
        let r = ReservePool::from_parts(Amount::from_whole(1), Amount::from_whole(1));
        assert!(matches!(
            PriceOracle::quote(&pair(), &r, &id(3)),
            Err(SwapError::UnknownAsset(_))
        ));
    }

    #[test]
    fn overflowing_price() {
        let r = ReservePool::from_parts(Amount::new(1), Amount::MAX);
        assert!(matches!(
            PriceOracle::quote(&pair(), &r, &id(1)),
            Err(SwapError::Overflow(_))
        ));
    }
}
