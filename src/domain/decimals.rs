//! Asset decimal places.

use crate::error::OracleError;

/// Maximum allowed decimal places (the protocol value unit is an
/// 18-decimal fixed point).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places for an asset balance.
///
/// Valid range is `0..=18`.  Construction is validated: values above 18
/// are rejected, because a raw balance can only be lifted *up* to the
/// 18-decimal value unit, never truncated down.
///
/// # Examples
///
/// ```
/// use fairlp::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert_eq!(d.missing_factor(), 1_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Decimals {
    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, OracleError> {
        if value > MAX_DECIMALS {
            return Err(OracleError::InvalidConfiguration(
                "asset decimals must be 0..=18",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^(18 - decimals)`, the multiplier that lifts a raw
    /// balance to 18-decimal precision.
    ///
    /// An 18-decimal asset has a factor of 1; a 6-decimal asset has a
    /// factor of `10^12`.
    #[must_use]
    pub const fn missing_factor(&self) -> u128 {
        10u128.pow((MAX_DECIMALS - self.0) as u32)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_zero() {
        let Ok(d) = Decimals::new(0) else {
            panic!("expected Ok");
        };
        assert_eq!(d.get(), 0);
    }

    #[test]
    fn valid_six() {
        let Ok(d) = Decimals::new(6) else {
            panic!("expected Ok");
        };
        assert_eq!(d.get(), 6);
    }

    #[test]
    fn valid_eighteen() {
        let Ok(d) = Decimals::new(18) else {
            panic!("expected Ok");
        };
        assert_eq!(d.get(), 18);
    }

    #[test]
    fn invalid_nineteen() {
        let Err(e) = Decimals::new(19) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            OracleError::InvalidConfiguration("asset decimals must be 0..=18")
        );
    }

    #[test]
    fn max_constant() {
        assert_eq!(Decimals::MAX.get(), 18);
    }

    #[test]
    fn missing_factor_eighteen_is_one() {
        assert_eq!(Decimals::MAX.missing_factor(), 1);
    }

    #[test]
    fn missing_factor_six() {
        let Ok(d) = Decimals::new(6) else {
            panic!("expected Ok");
        };
        assert_eq!(d.missing_factor(), 1_000_000_000_000);
    }

    #[test]
    fn missing_factor_zero() {
        let Ok(d) = Decimals::new(0) else {
            panic!("expected Ok");
        };
        assert_eq!(d.missing_factor(), 1_000_000_000_000_000_000);
    }
}
