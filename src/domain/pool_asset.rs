//! One pooled asset as seen by the pricing engine.

use super::{Decimals, PricingMode, TokenAddress};

/// The full description of one pooled asset: its on-chain identity, its
/// decimal precision, and how its unit price is obtained.
///
/// Construction is infallible because every component is validated at its
/// own construction site.
///
/// # Examples
///
/// ```
/// use fairlp::domain::{Decimals, PoolAsset, PricingMode, TokenAddress};
///
/// let usdc = PoolAsset::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     Decimals::new(6).expect("valid decimals"),
///     PricingMode::Feed,
/// );
/// assert_eq!(usdc.decimals().get(), 6);
/// assert!(!usdc.mode().is_pegged());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolAsset {
    address: TokenAddress,
    decimals: Decimals,
    mode: PricingMode,
}

impl PoolAsset {
    /// Creates a new `PoolAsset`.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals, mode: PricingMode) -> Self {
        Self {
            address,
            decimals,
            mode,
        }
    }

    /// Returns the asset address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the asset decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns how the asset's unit price is obtained.
    #[must_use]
    pub const fn mode(&self) -> PricingMode {
        self.mode
    }
}
