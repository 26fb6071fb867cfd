//! Read-only view of a constant-product liquidity pool.

use crate::domain::{Amount, TokenAddress};
use crate::math::U256;

/// Read-only interface to a two-asset constant-product pool.
///
/// The pricing engine consumes this trait to observe live pool state; it
/// never writes through it.  Implementations are expected to be cheap
/// snapshots or thin adapters over on-chain queries — the engine reads
/// each piece of state at most once per price query and never caches.
///
/// # Contract
///
/// - [`reserves`](Self::reserves) returns the raw balances of asset 0 and
///   asset 1 **in the pool's own ordering**, plus the timestamp of the
///   last reserve update.
/// - [`k_last`](Self::k_last) is the constant-product invariant
///   `reserve_0 × reserve_1` recorded at the most recent protocol-fee
///   mint, or zero if no mint has occurred.  It is 256 bits wide because
///   it is the product of two full-width reserves.
/// - [`lp_token`](Self::lp_token) identifies the pool's own share token.
pub trait LiquidityPool {
    /// Returns `(reserve_0, reserve_1, last_update_timestamp)`.
    fn reserves(&self) -> (Amount, Amount, u64);

    /// Returns the nominal outstanding LP share supply.
    fn total_supply(&self) -> Amount;

    /// Returns the address of the asset at index 0.
    fn token0(&self) -> TokenAddress;

    /// Returns the address of the asset at index 1.
    fn token1(&self) -> TokenAddress;

    /// Returns the invariant recorded at the last protocol-fee mint,
    /// or zero if fees have never been minted.
    fn k_last(&self) -> U256;

    /// Returns the address of the pool's LP share token.
    fn lp_token(&self) -> TokenAddress;
}

impl<T: LiquidityPool> LiquidityPool for &T {
    fn reserves(&self) -> (Amount, Amount, u64) {
        (**self).reserves()
    }

    fn total_supply(&self) -> Amount {
        (**self).total_supply()
    }

    fn token0(&self) -> TokenAddress {
        (**self).token0()
    }

    fn token1(&self) -> TokenAddress {
        (**self).token1()
    }

    fn k_last(&self) -> U256 {
        (**self).k_last()
    }

    fn lp_token(&self) -> TokenAddress {
        (**self).lp_token()
    }
}
