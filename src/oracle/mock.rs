//! In-memory collaborator fixtures shared by the engine test suites.

use crate::domain::{Amount, Price, TokenAddress};
use crate::math::U256;
use crate::traits::{LiquidityPool, PoolFactory, PriceFeed};

pub(crate) const TOKEN_0: TokenAddress = TokenAddress::from_bytes([1u8; 32]);
pub(crate) const TOKEN_1: TokenAddress = TokenAddress::from_bytes([2u8; 32]);
pub(crate) const LP_TOKEN: TokenAddress = TokenAddress::from_bytes([9u8; 32]);
pub(crate) const FEE_RECIPIENT: TokenAddress = TokenAddress::from_bytes([3u8; 32]);

/// Snapshot pool returning fixed reserves, supply, and `k_last`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockPool {
    pub reserve_0: u128,
    pub reserve_1: u128,
    pub supply: u128,
    pub k_last: U256,
}

impl LiquidityPool for MockPool {
    fn reserves(&self) -> (Amount, Amount, u64) {
        (
            Amount::new(self.reserve_0),
            Amount::new(self.reserve_1),
            1_700_000_000,
        )
    }

    fn total_supply(&self) -> Amount {
        Amount::new(self.supply)
    }

    fn token0(&self) -> TokenAddress {
        TOKEN_0
    }

    fn token1(&self) -> TokenAddress {
        TOKEN_1
    }

    fn k_last(&self) -> U256 {
        self.k_last
    }

    fn lp_token(&self) -> TokenAddress {
        LP_TOKEN
    }
}

/// Feed answering a fixed signed price per known asset and zero
/// ("unavailable") for anything else.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockFeed {
    pub price_0: i128,
    pub price_1: i128,
}

impl PriceFeed for MockFeed {
    fn asset_price(&self, asset: TokenAddress) -> Price {
        if asset == TOKEN_0 {
            Price::new(self.price_0)
        } else if asset == TOKEN_1 {
            Price::new(self.price_1)
        } else {
            Price::ZERO
        }
    }
}

/// Factory with a configurable fee recipient.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockFactory {
    pub fee_to: TokenAddress,
}

impl PoolFactory for MockFactory {
    fn fee_to(&self) -> TokenAddress {
        self.fee_to
    }
}
