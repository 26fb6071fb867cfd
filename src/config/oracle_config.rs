//! Configuration for the LP share pricing engine.

use crate::domain::AssetPair;
use crate::error::OracleError;
use crate::math::BONE;

/// Immutable configuration for one pricing engine instance.
///
/// Describes the two pooled assets (in the pool's own ordering) and the
/// symmetric tolerance band used by deviation detection.
///
/// # Validation
///
/// - `max_deviation` must be strictly below [`BONE`]: a band of 1.0 or
///   more would accept any ratio, defeating the cross-check entirely.
/// - The asset pair is validated distinct at [`AssetPair`] construction
///   time, and each asset's decimals at [`Decimals`] construction time.
///
/// [`Decimals`]: crate::domain::Decimals
///
/// # Examples
///
/// ```
/// use fairlp::config::OracleConfig;
/// use fairlp::domain::{AssetPair, Decimals, PoolAsset, PricingMode, TokenAddress};
/// use fairlp::math::BONE;
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
/// let pair = AssetPair::new(a0, a1).expect("distinct");
///
/// // Accept up to 2% disagreement between reserves and feed.
/// let config = OracleConfig::new(pair, BONE / 50);
/// assert!(config.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleConfig {
    assets: AssetPair,
    max_deviation: u128,
}

impl OracleConfig {
    /// Creates a new `OracleConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidConfiguration`] if `max_deviation`
    /// is not strictly below [`BONE`].
    pub fn new(assets: AssetPair, max_deviation: u128) -> Result<Self, OracleError> {
        let config = Self {
            assets,
            max_deviation,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidConfiguration`] if `max_deviation`
    /// is not strictly below [`BONE`].
    pub fn validate(&self) -> Result<(), OracleError> {
        if self.max_deviation >= BONE {
            return Err(OracleError::InvalidConfiguration(
                "max deviation must be below one",
            ));
        }
        Ok(())
    }

    /// Returns the pooled assets, in the pool's ordering.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Returns the tolerance band half-width as an 18-decimal fraction.
    #[must_use]
    pub const fn max_deviation(&self) -> u128 {
        self.max_deviation
    }
}
