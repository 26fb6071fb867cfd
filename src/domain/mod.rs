//! Fundamental domain value types used throughout the pricing library.
//!
//! This module contains the core value types that model the pricing
//! domain: asset identities, decimal precisions, raw amounts, signed
//! prices, and the per-asset price-source selection.  All types use
//! newtypes with validated constructors to enforce invariants.

mod amount;
mod asset_pair;
mod decimals;
mod pool_asset;
mod price;
mod pricing_mode;
mod rounding;
mod token_address;

pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use decimals::Decimals;
pub use pool_asset::PoolAsset;
pub use price::Price;
pub use pricing_mode::PricingMode;
pub use rounding::Rounding;
pub use token_address::TokenAddress;
