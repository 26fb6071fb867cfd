//! Signed 18-decimal fixed-point price.

use core::fmt;

use crate::error::OracleError;

/// A price expressed as a signed 18-decimal fixed-point value, where
/// `10^18` represents 1.0 in the numeraire (nominally ETH-equivalent).
///
/// The signed representation follows the common feed convention: a zero
/// or negative value means "no usable price".  The pricing engine never
/// *produces* a negative price, but it must be able to *receive* one
/// from an external feed and reject it.
///
/// # Examples
///
/// ```
/// use fairlp::domain::Price;
///
/// let p = Price::new(1_000_000_000_000_000_000);
/// assert!(p.is_positive());
/// assert_eq!(p.positive_wad(), Some(1_000_000_000_000_000_000));
///
/// let unavailable = Price::new(0);
/// assert_eq!(unavailable.positive_wad(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Price(i128);

impl Price {
    /// The zero price ("unavailable" by feed convention).
    pub const ZERO: Self = Self(0);

    /// Creates a new `Price` from a raw signed value.
    ///
    /// All `i128` values are representable; validity (positivity) is a
    /// property checked at the point of use, not at construction, because
    /// a feed answer must be transportable before it is judged.
    pub const fn new(value: i128) -> Self {
        Self(value)
    }

    /// Creates a `Price` from an unsigned 18-decimal fixed-point value.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Overflow`] if `wad` exceeds the signed range.
    pub const fn from_wad(wad: u128) -> Result<Self, OracleError> {
        if wad > i128::MAX as u128 {
            return Err(OracleError::Overflow("price does not fit signed range"));
        }
        Ok(Self(wad as i128))
    }

    /// Returns the raw signed value.
    #[must_use]
    pub const fn get(&self) -> i128 {
        self.0
    }

    /// Returns `true` if the price is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the price as an unsigned 18-decimal value, or `None` if it
    /// is zero or negative (the feed convention for "unavailable").
    #[must_use]
    pub const fn positive_wad(&self) -> Option<u128> {
        if self.0 > 0 {
            Some(self.0 as u128)
        } else {
            None
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
