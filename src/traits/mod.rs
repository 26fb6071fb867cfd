//! Trait seams to the engine's external collaborators.
//!
//! The pricing engine owns no chain state.  Everything it reads — pool
//! reserves and supply, feed prices, the factory fee switch — arrives
//! through these three read-only traits, which keeps the engine testable
//! against in-memory fixtures and agnostic to how the live data is
//! actually fetched.
//!
//! All three traits have blanket implementations for `&T`, so the engine
//! can be built over borrowed collaborators as easily as owned ones.

mod liquidity_pool;
mod pool_factory;
mod price_feed;

pub use liquidity_pool::LiquidityPool;
pub use pool_factory::PoolFactory;
pub use price_feed::PriceFeed;
