//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use fairlp::prelude::*;
//! ```
//!
//! This re-exports the domain types, the collaborator traits, the engine
//! and its configuration, and the error types, so that consumers don't
//! need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, AssetPair, Decimals, PoolAsset, Price, PricingMode, Rounding, TokenAddress,
};

// Re-export collaborator traits
pub use crate::traits::{LiquidityPool, PoolFactory, PriceFeed};

// Re-export the engine and configuration
pub use crate::config::OracleConfig;
pub use crate::oracle::LpSharePricer;

// Re-export math primitives
pub use crate::math::{bdiv, bmul, bsqrt_wide, BONE, U256};

// Re-export error types
pub use crate::error::{OracleError, Result};
