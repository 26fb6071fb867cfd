//! # fairlp
//!
//! Manipulation-resistant fair pricing for constant-product LP share
//! tokens.
//!
//! The share token of a two-asset constant-product pool is tempting
//! collateral, but its naive price — pool value divided by supply, with
//! pool value read straight from reserves — can be moved within a single
//! block by anyone willing to borrow enough of one asset.  This crate
//! prices the share token defensively: it values both reserves in a
//! common 18-decimal unit, cross-checks the pool's reserve ratio against
//! an external reference feed, and switches between two aggregation
//! formulas depending on whether the sources agree.
//!
//! - **Agreement** — per-share price is the arithmetic mean: total value
//!   over effective supply.
//! - **Disagreement beyond tolerance** — per-share price is the
//!   constant-product-consistent geometric mean `2·√(value₀·value₁)`
//!   over effective supply, which a single-block reserve skew cannot
//!   move because the skew preserves the product it is rooted on.
//!
//! "Effective supply" adds back the protocol-fee shares the pool will
//! mint on its next liquidity event, so pending fee dilution does not
//! overstate the price.
//!
//! # Quick Start
//!
//! Implement the three collaborator traits over your chain access layer
//! and hand them to the engine:
//!
//! ```rust
//! use fairlp::prelude::*;
//!
//! struct Snapshot;
//!
//! impl LiquidityPool for Snapshot {
//!     fn reserves(&self) -> (Amount, Amount, u64) {
//!         (Amount::new(100 * BONE), Amount::new(100 * BONE), 1_700_000_000)
//!     }
//!     fn total_supply(&self) -> Amount {
//!         Amount::new(100 * BONE)
//!     }
//!     fn token0(&self) -> TokenAddress {
//!         TokenAddress::from_bytes([1u8; 32])
//!     }
//!     fn token1(&self) -> TokenAddress {
//!         TokenAddress::from_bytes([2u8; 32])
//!     }
//!     fn k_last(&self) -> U256 {
//!         U256::ZERO
//!     }
//!     fn lp_token(&self) -> TokenAddress {
//!         TokenAddress::from_bytes([9u8; 32])
//!     }
//! }
//!
//! struct Feed;
//!
//! impl PriceFeed for Feed {
//!     fn asset_price(&self, _asset: TokenAddress) -> Price {
//!         Price::new(BONE as i128)
//!     }
//! }
//!
//! struct Factory;
//!
//! impl PoolFactory for Factory {
//!     fn fee_to(&self) -> TokenAddress {
//!         TokenAddress::zero()
//!     }
//! }
//!
//! let asset_0 = PoolAsset::new(
//!     TokenAddress::from_bytes([1u8; 32]),
//!     Decimals::new(18).expect("valid"),
//!     PricingMode::Feed,
//! );
//! let asset_1 = PoolAsset::new(
//!     TokenAddress::from_bytes([2u8; 32]),
//!     Decimals::new(18).expect("valid"),
//!     PricingMode::Pegged,
//! );
//! let pair = AssetPair::new(asset_0, asset_1).expect("distinct assets");
//!
//! // Tolerate up to 2% disagreement between reserves and the feed.
//! let config = OracleConfig::new(pair, BONE / 50).expect("valid config");
//! let pricer = LpSharePricer::new(Snapshot, Feed, Factory, config)
//!     .expect("assets match the pool");
//!
//! let price = pricer.latest_price().expect("priced");
//! assert_eq!(price.get(), 2 * BONE as i128);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  lending protocol, risk engine, …
//! └──────┬───────┘
//!        │ latest_price()
//!        ▼
//! ┌──────────────┐       ┌─────────────────────────────┐
//! │ LpSharePricer │──────▶│ normalize → deviation → supply │
//! └──────┬───────┘       └─────────────────────────────┘
//!        │ reads (never writes)
//!        ▼
//! ┌──────────────────────────────────┐
//! │ LiquidityPool · PriceFeed · PoolFactory │
//! └──────────────────────────────────┘
//! ```
//!
//! Every query is a pure read-then-compute step: the engine holds no
//! mutable state, caches nothing, and either returns a complete price or
//! fails the whole call with an [`error::OracleError`].
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`PoolAsset`](domain::PoolAsset), … |
//! | [`traits`] | Collaborator seams: [`LiquidityPool`](traits::LiquidityPool), [`PriceFeed`](traits::PriceFeed), [`PoolFactory`](traits::PoolFactory) |
//! | [`config`] | [`OracleConfig`](config::OracleConfig), validated at construction |
//! | [`oracle`] | [`LpSharePricer`](oracle::LpSharePricer), the pricing engine |
//! | [`math`] | 18-decimal fixed point and the wide integer square root |
//! | [`error`] | [`OracleError`](error::OracleError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod oracle;
pub mod prelude;
pub mod traits;
