//! Engine configuration.
//!
//! This module contains [`OracleConfig`], the immutable blueprint for one
//! pricing engine instance: the two pooled assets and the deviation
//! tolerance band.  Validation happens at construction, so a successfully
//! built configuration is guaranteed internally consistent.

mod oracle_config;

pub use oracle_config::OracleConfig;
