//! Reserve normalization into the common 18-decimal value unit.

use crate::domain::{Amount, PoolAsset, PricingMode};
use crate::error::{OracleError, Result};
use crate::math::{bmul, BONE};
use crate::traits::PriceFeed;

/// Converts one asset's raw reserve balance into a value expressed in the
/// common 18-decimal unit, priced in the feed's numeraire.
///
/// A [`PricingMode::Pegged`] asset is valued at exactly 1.0 without
/// touching the feed; otherwise the feed is queried exactly once.  The
/// raw balance is lifted to 18-decimal precision before the fixed-point
/// product with the unit price.
///
/// # Errors
///
/// - [`OracleError::NoOraclePrice`] if the feed answers zero or negative
///   for a feed-priced asset.
/// - [`OracleError::Overflow`] if the lifted balance or the product does
///   not fit 128 bits.
pub(crate) fn asset_value<F: PriceFeed>(
    feed: &F,
    asset: &PoolAsset,
    reserve: Amount,
) -> Result<u128> {
    let unit_price = match asset.mode() {
        PricingMode::Pegged => BONE,
        PricingMode::Feed => feed
            .asset_price(asset.address())
            .positive_wad()
            .ok_or(OracleError::NoOraclePrice)?,
    };

    let lifted = reserve
        .get()
        .checked_mul(asset.decimals().missing_factor())
        .ok_or(OracleError::Overflow(
            "reserve does not fit 18-decimal precision",
        ))?;

    bmul(lifted, unit_price)
}
