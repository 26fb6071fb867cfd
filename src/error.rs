//! Unified error types for the fair LP pricing library.
//!
//! All fallible operations across the crate return [`OracleError`] as their
//! error type.  No error is caught and suppressed internally: every failure
//! aborts the whole price query with no partial result, and callers are
//! expected to treat any error as "price unavailable now".

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, OracleError>;

/// Errors produced while constructing or querying the pricing engine.
///
/// Overflow variants carry a static message identifying the operation that
/// failed, so callers can distinguish (for logging) which intermediate blew
/// up without the library allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Malformed construction parameters.  Surfaced immediately when the
    /// engine is built; the instance must be reconstructed with valid
    /// parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The external feed returned a zero or negative price for a
    /// feed-priced asset.  Not retried; query again on a later block.
    #[error("price feed returned no usable price")]
    NoOraclePrice,

    /// Degenerate zero denominator: an empty reserve side or a zero
    /// effective share supply.
    #[error("division by zero")]
    DivisionByZero,

    /// A wide-intermediate result does not fit the target width.  Fatal
    /// for the current query; never silently wrapped.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}
