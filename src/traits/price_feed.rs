//! External reference price feed.

use crate::domain::{Price, TokenAddress};

/// Read-only interface to an external reference price feed.
///
/// Prices are signed 18-decimal fixed-point values in the feed's
/// numeraire (nominally ETH-equivalent).  By convention a zero or
/// negative answer means the feed has no usable price for that asset;
/// the engine surfaces that as
/// [`OracleError::NoOraclePrice`](crate::error::OracleError::NoOraclePrice).
///
/// The engine trusts the feed's correctness — defending against feed
/// manipulation is the feed's own concern.
pub trait PriceFeed {
    /// Returns the unit price of `asset` in the feed's numeraire.
    fn asset_price(&self, asset: TokenAddress) -> Price;
}

impl<T: PriceFeed> PriceFeed for &T {
    fn asset_price(&self, asset: TokenAddress) -> Price {
        (**self).asset_price(asset)
    }
}
