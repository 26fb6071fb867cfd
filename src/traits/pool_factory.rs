//! Pool factory fee configuration.

use crate::domain::TokenAddress;

/// Read-only interface to the factory that deployed the pool.
///
/// The factory holds exactly one piece of state the engine cares about:
/// the global protocol-fee recipient.  When it is the zero address, fee
/// collection is disabled and no share dilution is pending, so the
/// nominal supply can be used as-is.
pub trait PoolFactory {
    /// Returns the protocol-fee recipient, or the zero address when fee
    /// collection is disabled.
    fn fee_to(&self) -> TokenAddress;
}

impl<T: PoolFactory> PoolFactory for &T {
    fn fee_to(&self) -> TokenAddress {
        (**self).fee_to()
    }
}
