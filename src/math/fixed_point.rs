//! 18-decimal fixed-point multiply and divide.
//!
//! All fixed-point values in the crate use the scale [`BONE`]` = 10^18`
//! representing 1.0.  Both operations compute their product in 256-bit
//! space so that no intermediate can overflow, and round to nearest by
//! adding half the divisor before the truncating division.  Only the
//! *result* is checked against the 128-bit width; an out-of-range result
//! is a fatal [`OracleError::Overflow`], never a wrapped value.

use ethnum::U256;

use crate::error::{OracleError, Result};

/// Fixed-point scale: `10^18` represents the value 1.0.
pub const BONE: u128 = 1_000_000_000_000_000_000;

/// Twice the fixed-point scale: the value 2.0.
pub const TWO_BONES: u128 = 2 * BONE;

/// Fixed-point multiplication: `round(a × b / BONE)`.
///
/// # Errors
///
/// Returns [`OracleError::Overflow`] if the rounded result does not fit
/// `u128`.
///
/// # Examples
///
/// ```
/// use fairlp::math::{bmul, BONE};
///
/// assert_eq!(bmul(BONE, BONE).expect("fits"), BONE);
/// // 3.0 × 0.5 = 1.5
/// assert_eq!(bmul(3 * BONE, BONE / 2).expect("fits"), 3 * BONE / 2);
/// ```
pub fn bmul(a: u128, b: u128) -> Result<u128> {
    let product = U256::from(a) * U256::from(b) + U256::from(BONE / 2);
    fit_u128(product / U256::from(BONE), "fixed-point multiply overflow")
}

/// Fixed-point division: `round(a × BONE / b)`.
///
/// # Errors
///
/// Returns [`OracleError::DivisionByZero`] when `b == 0`, and
/// [`OracleError::Overflow`] if the rounded result does not fit `u128`.
///
/// # Examples
///
/// ```
/// use fairlp::math::{bdiv, BONE};
///
/// // 1.0 / 2.0 = 0.5
/// assert_eq!(bdiv(BONE, 2 * BONE).expect("fits"), BONE / 2);
/// assert!(bdiv(BONE, 0).is_err());
/// ```
pub fn bdiv(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        return Err(OracleError::DivisionByZero);
    }
    let numerator = U256::from(a) * U256::from(BONE) + U256::from(b / 2);
    fit_u128(numerator / U256::from(b), "fixed-point divide overflow")
}

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`OracleError::Overflow`] carrying `context` if the high word
/// is non-zero.
pub(crate) fn fit_u128(value: U256, context: &'static str) -> Result<u128> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(OracleError::Overflow(context));
    }
    Ok(lo)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- bmul ---------------------------------------------------------------

    #[test]
    fn bmul_identity() {
        assert_eq!(bmul(BONE, BONE), Ok(BONE));
        assert_eq!(bmul(7 * BONE, BONE), Ok(7 * BONE));
    }

    #[test]
    fn bmul_zero() {
        assert_eq!(bmul(0, BONE), Ok(0));
        assert_eq!(bmul(BONE, 0), Ok(0));
    }

    #[test]
    fn bmul_fractional() {
        // 3.0 × 0.5 = 1.5
        assert_eq!(bmul(3 * BONE, BONE / 2), Ok(3 * BONE / 2));
    }

    #[test]
    fn bmul_rounds_to_nearest() {
        // 3 × 0.5 (smallest units) = 1.5 units → rounds up to 2
        assert_eq!(bmul(3, BONE / 2), Ok(2));
        // 1 × 0.4999… rounds down to 0
        assert_eq!(bmul(1, BONE / 2 - 1), Ok(0));
    }

    #[test]
    fn bmul_wide_intermediate() {
        // a × b overflows u128 but the scaled result fits.
        let a = u128::MAX / 2;
        let Ok(r) = bmul(a, BONE) else {
            panic!("expected Ok");
        };
        assert_eq!(r, a);
    }

    #[test]
    fn bmul_result_overflow() {
        let Err(e) = bmul(u128::MAX, u128::MAX) else {
            panic!("expected Err");
        };
        assert_eq!(e, OracleError::Overflow("fixed-point multiply overflow"));
    }

    // -- bdiv ---------------------------------------------------------------

    #[test]
    fn bdiv_identity() {
        assert_eq!(bdiv(BONE, BONE), Ok(BONE));
        assert_eq!(bdiv(5 * BONE, BONE), Ok(5 * BONE));
    }

    #[test]
    fn bdiv_halves() {
        assert_eq!(bdiv(BONE, 2 * BONE), Ok(BONE / 2));
    }

    #[test]
    fn bdiv_repeating_fraction() {
        // 10 / 3 in smallest units = 3.333…×10^18
        assert_eq!(bdiv(10, 3), Ok(3_333_333_333_333_333_333));
    }

    #[test]
    fn bdiv_by_zero() {
        assert_eq!(bdiv(BONE, 0), Err(OracleError::DivisionByZero));
        assert_eq!(bdiv(0, 0), Err(OracleError::DivisionByZero));
    }

    #[test]
    fn bdiv_zero_numerator() {
        assert_eq!(bdiv(0, 5 * BONE), Ok(0));
    }

    #[test]
    fn bdiv_result_overflow() {
        let Err(e) = bdiv(u128::MAX, 1) else {
            panic!("expected Err");
        };
        assert_eq!(e, OracleError::Overflow("fixed-point divide overflow"));
    }

    #[test]
    fn bdiv_rounds_to_nearest() {
        // 1 / 2.0 = 0.5 → rounds up to 1 smallest unit… at wad scale:
        // bdiv(1, 2e18) = (1e18 + 1e18) / 2e18 = 1
        assert_eq!(bdiv(1, 2 * BONE), Ok(1));
    }

    // -- fit_u128 -----------------------------------------------------------

    #[test]
    fn fit_u128_low_word() {
        assert_eq!(fit_u128(U256::from(42u128), "ctx"), Ok(42));
    }

    #[test]
    fn fit_u128_high_word_set() {
        let wide = U256::from_words(1, 0);
        assert_eq!(fit_u128(wide, "ctx"), Err(OracleError::Overflow("ctx")));
    }

    #[test]
    fn constants() {
        assert_eq!(BONE, 10u128.pow(18));
        assert_eq!(TWO_BONES, 2 * BONE);
    }
}
