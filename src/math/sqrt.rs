//! Deterministic integer square root over 256-bit values.

use ethnum::U256;

use super::fixed_point::fit_u128;
use crate::domain::Rounding;
use crate::error::Result;

/// Integer square root of a 256-bit value via Babylonian iteration.
///
/// The truncated root of any `U256` fits in `u128`.  With
/// [`Rounding::Down`] the truncated root is returned; with
/// [`Rounding::Up`] the result is bumped by one unit when the exact root
/// is not integral.  Exact for perfect squares under either direction,
/// and fully deterministic (no floating point).
///
/// # Errors
///
/// Returns [`OracleError::Overflow`](crate::error::OracleError::Overflow)
/// only when rounding up pushes the root past `u128::MAX`, which requires
/// an input above `(2^128 - 1)^2`.
///
/// # Examples
///
/// ```
/// use ethnum::U256;
/// use fairlp::domain::Rounding;
/// use fairlp::math::bsqrt_wide;
///
/// assert_eq!(bsqrt_wide(U256::new(9), Rounding::Down).expect("fits"), 3);
/// assert_eq!(bsqrt_wide(U256::new(8), Rounding::Down).expect("fits"), 2);
/// assert_eq!(bsqrt_wide(U256::new(8), Rounding::Up).expect("fits"), 3);
/// assert_eq!(bsqrt_wide(U256::ZERO, Rounding::Up).expect("fits"), 0);
/// ```
pub fn bsqrt_wide(n: U256, rounding: Rounding) -> Result<u128> {
    if n == U256::ZERO {
        return Ok(0);
    }

    // Newton iteration with ceil(n / 2) as the starting guess, which is
    // always >= sqrt(n) for n >= 1 so the sequence decreases to the floor.
    let mut x = n;
    let mut y = n / U256::new(2) + n % U256::new(2);
    while y < x {
        x = y;
        y = (x + n / x) / U256::new(2);
    }

    let root = fit_u128(x, "square root exceeds 128 bits")?;
    if rounding.is_up() && U256::from(root) * U256::from(root) != n {
        return fit_u128(
            U256::from(root) + U256::ONE,
            "square root round-up overflow",
        );
    }
    Ok(root)
}
