//! Dilution-corrected LP share supply.

use crate::domain::{Amount, Rounding, TokenAddress};
use crate::error::{OracleError, Result};
use crate::math::{bsqrt_wide, fit_u128, U256};

/// Computes the effective outstanding share count: the nominal supply
/// plus the protocol-fee shares the pool would mint on its next liquidity
/// event.
///
/// Pools mint protocol fees lazily.  Between mints the invariant grows
/// past `k_last`, and the pending shares implied by that growth dilute
/// every holder — valuing the nominal supply alone would overstate the
/// per-share price.  The pending-share formula here mirrors the pool's
/// own fee-mint arithmetic exactly, floor division included, so the
/// correction matches what the pool will actually mint:
///
/// ```text
/// pending = supply × (√k − √k_last) / (5 × √k + √k_last)
/// ```
///
/// The nominal supply is returned unchanged when fee collection is
/// disabled (`fee_to` is the zero address), when no mint has occurred yet
/// (`k_last == 0`), or when the invariant has not grown.
///
/// # Errors
///
/// Returns [`OracleError::Overflow`] if the corrected supply exceeds
/// `u128`.
pub(crate) fn effective_supply(
    total_supply: Amount,
    reserve_0: Amount,
    reserve_1: Amount,
    k_last: U256,
    fee_to: TokenAddress,
) -> Result<Amount> {
    if fee_to.is_zero() {
        return Ok(total_supply);
    }
    if k_last == U256::ZERO {
        return Ok(total_supply);
    }

    let k = U256::from(reserve_0.get()) * U256::from(reserve_1.get());
    let root_k = bsqrt_wide(k, Rounding::Down)?;
    let root_k_last = bsqrt_wide(k_last, Rounding::Down)?;
    if root_k <= root_k_last {
        return Ok(total_supply);
    }

    let numerator = U256::from(total_supply.get()) * U256::from(root_k - root_k_last);
    let denominator = U256::from(root_k) * U256::new(5) + U256::from(root_k_last);
    let pending = fit_u128(numerator / denominator, "pending fee shares overflow")?;

    total_supply
        .checked_add(&Amount::new(pending))
        .ok_or(OracleError::Overflow("effective supply overflow"))
}
