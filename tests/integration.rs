//! Integration tests exercising the full system from configuration to
//! price query.
//!
//! These tests verify end-to-end flows through the public API: engine
//! construction and validation, both aggregation paths, the dilution
//! correction, and error propagation — all against in-memory
//! collaborators, the way a chain-access adapter would wire the engine.

#![allow(clippy::panic)]

use fairlp::config::OracleConfig;
use fairlp::domain::{
    Amount, AssetPair, Decimals, PoolAsset, Price, PricingMode, TokenAddress,
};
use fairlp::error::OracleError;
use fairlp::math::{BONE, U256};
use fairlp::oracle::LpSharePricer;
use fairlp::traits::{LiquidityPool, PoolFactory, PriceFeed};

// ---------------------------------------------------------------------------
// Shared fixtures
// ---------------------------------------------------------------------------

const STABLE: TokenAddress = TokenAddress::from_bytes([1u8; 32]);
const WRAPPED_NUMERAIRE: TokenAddress = TokenAddress::from_bytes([2u8; 32]);
const TREASURY: TokenAddress = TokenAddress::from_bytes([3u8; 32]);
const SHARE_TOKEN: TokenAddress = TokenAddress::from_bytes([9u8; 32]);

#[derive(Debug, Clone, Copy)]
struct PoolSnapshot {
    reserve_0: u128,
    reserve_1: u128,
    supply: u128,
    k_last: U256,
}

impl LiquidityPool for PoolSnapshot {
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
        STABLE
    }

    fn token1(&self) -> TokenAddress {
        WRAPPED_NUMERAIRE
    }

    fn k_last(&self) -> U256 {
        self.k_last
    }

    fn lp_token(&self) -> TokenAddress {
        SHARE_TOKEN
    }
}

#[derive(Debug, Clone, Copy)]
struct FeedTable {
    stable_price: i128,
}

impl PriceFeed for FeedTable {
    fn asset_price(&self, asset: TokenAddress) -> Price {
        if asset == STABLE {
            Price::new(self.stable_price)
        } else {
            // The wrapped numeraire is configured pegged and must never
            // reach the feed.
            Price::ZERO
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FactoryState {
    fee_to: TokenAddress,
}

impl PoolFactory for FactoryState {
    fn fee_to(&self) -> TokenAddress {
        self.fee_to
    }
}

/// A 6-decimal feed-priced stable against the 18-decimal pegged
/// numeraire — the canonical deployment shape.
fn stable_pair() -> AssetPair {
    let Ok(d6) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    let Ok(d18) = Decimals::new(18) else {
        panic!("valid decimals");
    };
    let stable = PoolAsset::new(STABLE, d6, PricingMode::Feed);
    let wrapped = PoolAsset::new(WRAPPED_NUMERAIRE, d18, PricingMode::Pegged);
    let Ok(pair) = AssetPair::new(stable, wrapped) else {
        panic!("valid pair");
    };
    pair
}

/// Same pair with both sides pegged, for tests that need exact values
/// without a feed in the loop.
fn pegged_pair() -> AssetPair {
    let Ok(d6) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    let Ok(d18) = Decimals::new(18) else {
        panic!("valid decimals");
    };
    let stable = PoolAsset::new(STABLE, d6, PricingMode::Pegged);
    let wrapped = PoolAsset::new(WRAPPED_NUMERAIRE, d18, PricingMode::Pegged);
    let Ok(pair) = AssetPair::new(stable, wrapped) else {
        panic!("valid pair");
    };
    pair
}

fn build(
    pool: PoolSnapshot,
    feed: FeedTable,
    factory: FactoryState,
    assets: AssetPair,
    max_deviation: u128,
) -> LpSharePricer<PoolSnapshot, FeedTable, FactoryState> {
    let Ok(config) = OracleConfig::new(assets, max_deviation) else {
        panic!("valid config");
    };
    let Ok(pricer) = LpSharePricer::new(pool, feed, factory, config) else {
        panic!("valid pricer");
    };
    pricer
}

fn fee_off() -> FactoryState {
    FactoryState {
        fee_to: TokenAddress::zero(),
    }
}

// ---------------------------------------------------------------------------
// Construction and query surface
// ---------------------------------------------------------------------------

#[test]
fn construction_boundary_on_max_deviation() {
    assert!(OracleConfig::new(stable_pair(), BONE - 1).is_ok());

    let Err(e) = OracleConfig::new(stable_pair(), BONE) else {
        panic!("expected Err");
    };
    assert!(matches!(e, OracleError::InvalidConfiguration(_)));
}

#[test]
fn construction_rejects_assets_in_the_wrong_order() {
    let Ok(d6) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    let Ok(d18) = Decimals::new(18) else {
        panic!("valid decimals");
    };
    // token1's address in slot 0 and vice versa.
    let Ok(flipped) = AssetPair::new(
        PoolAsset::new(WRAPPED_NUMERAIRE, d18, PricingMode::Pegged),
        PoolAsset::new(STABLE, d6, PricingMode::Feed),
    ) else {
        panic!("valid pair");
    };
    let Ok(config) = OracleConfig::new(flipped, BONE / 50) else {
        panic!("valid config");
    };

    let pool = PoolSnapshot {
        reserve_0: BONE,
        reserve_1: BONE,
        supply: BONE,
        k_last: U256::ZERO,
    };
    let result = LpSharePricer::new(pool, FeedTable { stable_price: 0 }, fee_off(), config);
    assert!(matches!(
        result,
        Err(OracleError::InvalidConfiguration(_))
    ));
}

#[test]
fn query_surface_reports_identities() {
    let pool = PoolSnapshot {
        reserve_0: 1_000_000_000,
        reserve_1: 1_000 * BONE,
        supply: 2_000 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );

    assert_eq!(pricer.lp_token(), SHARE_TOKEN);
    assert_eq!(pricer.assets().first().address(), STABLE);
    assert_eq!(pricer.assets().second().address(), WRAPPED_NUMERAIRE);
    assert_eq!(pricer.pool().total_supply(), Amount::new(2_000 * BONE));
}

// ---------------------------------------------------------------------------
// Arithmetic-mean path (sources agree)
// ---------------------------------------------------------------------------

#[test]
fn balanced_pegged_pool_prices_at_one() {
    // 1000 whole units on each side after decimal normalization, over
    // 2000 shares: exactly 1.0 per share.
    let pool = PoolSnapshot {
        reserve_0: 1_000_000_000,
        reserve_1: 1_000 * BONE,
        supply: 2_000 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );

    let Ok(price) = pricer.latest_price() else {
        panic!("expected Ok");
    };
    assert_eq!(price, Price::new(BONE as i128));
}

#[test]
fn feed_priced_pool_uses_the_feed_for_one_side_only() {
    // 2 million stable units at 0.0005 each = 1000 in the numeraire,
    // matching 1000 pegged units on the other side.  The feed table
    // answers zero for the pegged asset, so this passing also proves the
    // pegged side never queried it.
    let pool = PoolSnapshot {
        reserve_0: 2_000_000_000_000,
        reserve_1: 1_000 * BONE,
        supply: 1_000 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable {
            stable_price: (BONE / 2_000) as i128,
        },
        fee_off(),
        stable_pair(),
        BONE / 50,
    );

    let Ok(price) = pricer.latest_price() else {
        panic!("expected Ok");
    };
    assert_eq!(price, Price::new((2 * BONE) as i128));
}

// ---------------------------------------------------------------------------
// Geometric-mean path (sources disagree)
// ---------------------------------------------------------------------------

#[test]
fn reserve_skew_triggers_the_geometric_fallback() {
    // A pool manipulated from (200, 200) to (400, 100) keeps its product
    // constant, so the fallback prices it exactly as if still balanced.
    let manipulated = PoolSnapshot {
        reserve_0: 400_000_000,
        reserve_1: 100 * BONE,
        supply: 200 * BONE,
        k_last: U256::ZERO,
    };
    let honest = PoolSnapshot {
        reserve_0: 200_000_000,
        reserve_1: 200 * BONE,
        supply: 200 * BONE,
        k_last: U256::ZERO,
    };

    let attacked = build(
        manipulated,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );
    let fair = build(
        honest,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );

    let (Ok(attacked_price), Ok(fair_price)) = (attacked.latest_price(), fair.latest_price())
    else {
        panic!("expected Ok");
    };
    assert_eq!(attacked_price, fair_price);
    assert_eq!(fair_price, Price::new((2 * BONE) as i128));
}

#[test]
fn small_imbalance_stays_on_the_arithmetic_path() {
    // 1% apart with a 2% band: still the arithmetic mean.
    let pool = PoolSnapshot {
        reserve_0: 101_000_000,
        reserve_1: 100 * BONE,
        supply: 100 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );

    let Ok(price) = pricer.latest_price() else {
        panic!("expected Ok");
    };
    // (101 + 100) / 100 = 2.01 per share.
    assert_eq!(price, Price::new((201 * BONE / 100) as i128));
}

// ---------------------------------------------------------------------------
// Dilution correction
// ---------------------------------------------------------------------------

#[test]
fn pending_protocol_fees_dilute_the_price() {
    let k_last = U256::from(100 * BONE) * U256::from(100_000_000u128);
    let pool = PoolSnapshot {
        reserve_0: 110_000_000,
        reserve_1: 110 * BONE,
        supply: 1_000 * BONE,
        k_last,
    };

    let collecting = build(
        pool,
        FeedTable { stable_price: 0 },
        FactoryState { fee_to: TREASURY },
        pegged_pair(),
        BONE / 50,
    );
    let disabled = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );

    let (Ok(diluted), Ok(nominal)) = (collecting.latest_price(), disabled.latest_price()) else {
        panic!("expected Ok");
    };
    assert!(diluted.get() < nominal.get());
    assert_eq!(nominal, Price::new((220 * BONE / 1_000) as i128));
}

#[test]
fn dilution_correction_is_inert_before_any_fee_mint() {
    let pool = PoolSnapshot {
        reserve_0: 110_000_000,
        reserve_1: 110 * BONE,
        supply: 1_000 * BONE,
        k_last: U256::ZERO,
    };
    let collecting = build(
        pool,
        FeedTable { stable_price: 0 },
        FactoryState { fee_to: TREASURY },
        pegged_pair(),
        BONE / 50,
    );
    let disabled = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );

    let (Ok(a), Ok(b)) = (collecting.latest_price(), disabled.latest_price()) else {
        panic!("expected Ok");
    };
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Error propagation
// ---------------------------------------------------------------------------

#[test]
fn feed_outage_makes_the_price_unavailable() {
    let pool = PoolSnapshot {
        reserve_0: 2_000_000_000_000,
        reserve_1: 1_000 * BONE,
        supply: 1_000 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        stable_pair(),
        BONE / 50,
    );
    assert_eq!(pricer.latest_price(), Err(OracleError::NoOraclePrice));
}

#[test]
fn negative_feed_answer_makes_the_price_unavailable() {
    let pool = PoolSnapshot {
        reserve_0: 2_000_000_000_000,
        reserve_1: 1_000 * BONE,
        supply: 1_000 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: -1 },
        fee_off(),
        stable_pair(),
        BONE / 50,
    );
    assert_eq!(pricer.latest_price(), Err(OracleError::NoOraclePrice));
}

#[test]
fn drained_pool_side_is_rejected() {
    let pool = PoolSnapshot {
        reserve_0: 0,
        reserve_1: 1_000 * BONE,
        supply: 1_000 * BONE,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );
    assert_eq!(pricer.latest_price(), Err(OracleError::DivisionByZero));
}

#[test]
fn zero_share_supply_is_rejected() {
    let pool = PoolSnapshot {
        reserve_0: 100_000_000,
        reserve_1: 100 * BONE,
        supply: 0,
        k_last: U256::ZERO,
    };
    let pricer = build(
        pool,
        FeedTable { stable_price: 0 },
        fee_off(),
        pegged_pair(),
        BONE / 50,
    );
    assert_eq!(pricer.latest_price(), Err(OracleError::DivisionByZero));
}
