//! The LP share pricing engine.

use tracing::debug;

use crate::config::OracleConfig;
use crate::domain::{AssetPair, Price, Rounding, TokenAddress};
use crate::error::{OracleError, Result};
use crate::math::{bdiv, bmul, bsqrt_wide, TWO_BONES, U256};
use crate::traits::{LiquidityPool, PoolFactory, PriceFeed};

use super::deviation::has_deviation;
use super::normalize::asset_value;
use super::supply::effective_supply;

/// Manipulation-resistant pricer for the share token of a two-asset
/// constant-product pool.
///
/// The engine is stateless apart from its immutable configuration: every
/// query reads live collaborator state, values both reserves in a common
/// 18-decimal unit, and cross-checks the pool's reserve ratio against the
/// external feed.  When the two sources agree the per-share price is the
/// plain arithmetic mean of total value over effective supply; when they
/// disagree beyond the configured tolerance the engine falls back to a
/// constant-product-consistent geometric mean, which a single-block
/// reserve skew (the flash-loan attack shape) cannot move.
///
/// Collaborators are held behind trait seams and may be owned values or
/// references; see the [`traits`](crate::traits) module.
///
/// # Example
///
/// ```
/// use fairlp::config::OracleConfig;
/// use fairlp::domain::{
///     Amount, AssetPair, Decimals, PoolAsset, Price, PricingMode, TokenAddress,
/// };
/// use fairlp::math::{BONE, U256};
/// use fairlp::oracle::LpSharePricer;
/// use fairlp::traits::{LiquidityPool, PoolFactory, PriceFeed};
///
/// struct Pool;
///
/// impl LiquidityPool for Pool {
///     fn reserves(&self) -> (Amount, Amount, u64) {
///         // 1000 units each of a 6-decimal and an 18-decimal asset.
///         (
///             Amount::new(1_000_000_000),
///             Amount::new(1_000 * BONE),
///             1_700_000_000,
///         )
///     }
///     fn total_supply(&self) -> Amount {
///         Amount::new(2_000 * BONE)
///     }
///     fn token0(&self) -> TokenAddress {
///         TokenAddress::from_bytes([1u8; 32])
///     }
///     fn token1(&self) -> TokenAddress {
///         TokenAddress::from_bytes([2u8; 32])
///     }
///     fn k_last(&self) -> U256 {
///         U256::ZERO
///     }
///     fn lp_token(&self) -> TokenAddress {
///         TokenAddress::from_bytes([9u8; 32])
///     }
/// }
///
/// struct Feed;
///
/// impl PriceFeed for Feed {
///     fn asset_price(&self, _asset: TokenAddress) -> Price {
///         Price::ZERO // never reached: both assets are pegged
///     }
/// }
///
/// struct Factory;
///
/// impl PoolFactory for Factory {
///     fn fee_to(&self) -> TokenAddress {
///         TokenAddress::zero()
///     }
/// }
///
/// let asset_0 = PoolAsset::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     Decimals::new(6).expect("valid"),
///     PricingMode::Pegged,
/// );
/// let asset_1 = PoolAsset::new(
///     TokenAddress::from_bytes([2u8; 32]),
///     Decimals::new(18).expect("valid"),
///     PricingMode::Pegged,
/// );
/// let pair = AssetPair::new(asset_0, asset_1).expect("distinct");
/// let config = OracleConfig::new(pair, BONE / 50).expect("valid");
///
/// let pricer = LpSharePricer::new(Pool, Feed, Factory, config).expect("valid");
///
/// // 2000 units of value over 2000 shares: exactly 1.0 per share.
/// let price = pricer.latest_price().expect("priced");
/// assert_eq!(price.get(), BONE as i128);
/// ```
#[derive(Debug, Clone)]
pub struct LpSharePricer<P, F, G> {
    pool: P,
    feed: F,
    factory: G,
    config: OracleConfig,
}

impl<P, F, G> LpSharePricer<P, F, G>
where
    P: LiquidityPool,
    F: PriceFeed,
    G: PoolFactory,
{
    /// Creates a new pricing engine over the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidConfiguration`] if the configuration
    /// fails validation, or if the configured assets do not match the
    /// pool's `token0`/`token1` in both identity and order.  Reserves are
    /// read positionally, so a swapped pair would value each balance
    /// against the wrong asset.
    pub fn new(pool: P, feed: F, factory: G, config: OracleConfig) -> Result<Self> {
        config.validate()?;
        if pool.token0() != config.assets().first().address()
            || pool.token1() != config.assets().second().address()
        {
            return Err(OracleError::InvalidConfiguration(
                "configured assets do not match the pool's ordering",
            ));
        }
        Ok(Self {
            pool,
            feed,
            factory,
            config,
        })
    }

    /// Computes the current per-share price in the feed's numeraire.
    ///
    /// Reserves are read once, valued in the common 18-decimal unit, and
    /// cross-checked for deviation; the result is divided by the
    /// dilution-corrected share supply.  The whole query either completes
    /// or fails — no partial result, no caching, no retry.
    ///
    /// # Errors
    ///
    /// - [`OracleError::NoOraclePrice`] if the feed has no usable price
    ///   for a feed-priced asset.
    /// - [`OracleError::DivisionByZero`] if either reserve side holds no
    ///   value, or the effective supply is zero.
    /// - [`OracleError::Overflow`] if any wide-intermediate result does
    ///   not narrow back to its target width.
    pub fn latest_price(&self) -> Result<Price> {
        let (reserve_0, reserve_1, _) = self.pool.reserves();
        let assets = self.config.assets();
        let value_0 = asset_value(&self.feed, &assets.first(), reserve_0)?;
        let value_1 = asset_value(&self.feed, &assets.second(), reserve_1)?;

        let deviated = has_deviation(self.config.max_deviation(), value_0, value_1)?;
        let supply = effective_supply(
            self.pool.total_supply(),
            reserve_0,
            reserve_1,
            self.pool.k_last(),
            self.factory.fee_to(),
        )?;

        let wad = if deviated {
            debug!(
                %value_0,
                %value_1,
                "sources disagree beyond tolerance, pricing by geometric mean"
            );
            let root = bsqrt_wide(U256::from(value_0) * U256::from(value_1), Rounding::Up)?;
            bdiv(bmul(TWO_BONES, root)?, supply.get())?
        } else {
            let total = value_0
                .checked_add(value_1)
                .ok_or(OracleError::Overflow("combined pool value overflow"))?;
            bdiv(total, supply.get())?
        };

        Price::from_wad(wad)
    }

    /// Returns the underlying pool collaborator.
    #[must_use]
    pub const fn pool(&self) -> &P {
        &self.pool
    }

    /// Returns the pooled assets, in the pool's ordering.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        self.config.assets()
    }

    /// Returns the address of the share token being priced.
    #[must_use]
    pub fn lp_token(&self) -> TokenAddress {
        self.pool.lp_token()
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &OracleConfig {
        &self.config
    }
}
