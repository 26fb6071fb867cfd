//! Per-asset price source selection.

/// How the engine obtains the unit price of one pooled asset.
///
/// Modelled as an enum rather than a boolean flag so the "no feed call
/// for a pegged asset" invariant is visible in the type: a
/// [`PricingMode::Pegged`] asset never reaches the external feed.
///
/// # Examples
///
/// ```
/// use fairlp::domain::PricingMode;
///
/// assert!(PricingMode::Pegged.is_pegged());
/// assert!(!PricingMode::Feed.is_pegged());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingMode {
    /// Query the external feed for the asset's unit price.
    Feed,
    /// Assume a fixed unit price of exactly 1.0 in the value unit,
    /// bypassing the feed (e.g. the wrapped numeraire itself).
    Pegged,
}

impl PricingMode {
    /// Returns `true` if this is [`PricingMode::Pegged`].
    #[must_use]
    pub const fn is_pegged(&self) -> bool {
        matches!(self, Self::Pegged)
    }
}
