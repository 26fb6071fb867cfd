//! Arithmetic utilities for fair LP share pricing.
//!
//! This module provides the 18-decimal fixed-point primitives ([`bmul`],
//! [`bdiv`], the [`BONE`] scale constant) and the deterministic wide
//! integer square root ([`bsqrt_wide`]).  All intermediates are computed
//! in 256-bit space via [`U256`]; only final results are narrowed back to
//! `u128`, with overflow surfaced as an error rather than wrapped.

mod fixed_point;
mod sqrt;

pub use ethnum::U256;
pub use fixed_point::{bdiv, bmul, BONE, TWO_BONES};
pub use sqrt::bsqrt_wide;

pub(crate) use fixed_point::fit_u128;
