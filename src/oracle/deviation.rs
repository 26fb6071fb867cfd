//! Disagreement detection between reserve-implied and feed-implied value.

use crate::error::{OracleError, Result};
use crate::math::{bdiv, BONE};

/// Decides whether the two sides' total values disagree beyond the
/// configured tolerance.
///
/// With both reserves valued through the same feed-anchored unit, a
/// balanced constant-product pool holds equal value on each side; a ratio
/// outside `[1 − max_deviation, 1 + max_deviation]` therefore means the
/// pool's reserve ratio and the feed disagree about relative value.  The
/// ratio is tested in both directions: under integer rounding the two
/// checks are not redundant near the band edge, and the first
/// out-of-band answer short-circuits.
///
/// # Errors
///
/// Returns [`OracleError::DivisionByZero`] if either value is zero.  A
/// pool with an empty side is degenerate and must not silently yield a
/// price.
pub(crate) fn has_deviation(max_deviation: u128, value_0: u128, value_1: u128) -> Result<bool> {
    if value_0 == 0 || value_1 == 0 {
        return Err(OracleError::DivisionByZero);
    }

    let upper = BONE + max_deviation;
    let lower = BONE - max_deviation;

    let ratio = bdiv(value_0, value_1)?;
    if ratio > upper || ratio < lower {
        return Ok(true);
    }

    let ratio = bdiv(value_1, value_0)?;
    Ok(ratio > upper || ratio < lower)
}
