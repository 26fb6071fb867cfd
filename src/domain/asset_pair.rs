//! Ordered pair of distinct pooled assets.

use super::PoolAsset;
use crate::error::OracleError;

/// An ordered pair of two distinct pooled assets.
///
/// Unlike a canonically-sorted token pair, the order here is **not**
/// normalized: it must match the pool's own `token0`/`token1` ordering,
/// because reserves are read positionally and a swapped pair would value
/// each reserve against the wrong asset.  The engine verifies the order
/// against the pool at construction time.
///
/// # Examples
///
/// ```
/// use fairlp::domain::{AssetPair, Decimals, PoolAsset, PricingMode, TokenAddress};
///
/// let a0 = PoolAsset::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     Decimals::new(6).expect("valid"),
///     PricingMode::Feed,
/// );
/// let a1 = PoolAsset::new(
///     TokenAddress::from_bytes([2u8; 32]),
///     Decimals::new(18).expect("valid"),
///     PricingMode::Pegged,
/// );
///
/// let pair = AssetPair::new(a0, a1).expect("distinct assets");
/// assert_eq!(pair.first(), a0);
/// assert_eq!(pair.second(), a1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    first: PoolAsset,
    second: PoolAsset,
}

impl AssetPair {
    /// Creates a new `AssetPair`, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidConfiguration`] if both assets have
    /// the same address.
    pub fn new(first: PoolAsset, second: PoolAsset) -> Result<Self, OracleError> {
        if first.address() == second.address() {
            return Err(OracleError::InvalidConfiguration(
                "pooled assets must have distinct addresses",
            ));
        }
        Ok(Self { first, second })
    }

    /// Returns the asset at the pool's index 0.
    #[must_use]
    pub const fn first(&self) -> PoolAsset {
        self.first
    }

    /// Returns the asset at the pool's index 1.
    #[must_use]
    pub const fn second(&self) -> PoolAsset {
        self.second
    }
}
