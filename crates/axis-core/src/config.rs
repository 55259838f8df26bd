// File: crates/axis-core/src/config.rs
// Summary: Construction-time configuration for an axis model.

use crate::range::Range;

/// Initial configuration for an [`AxisModel`](crate::AxisModel).
///
/// `autoscale_padding` is the fraction of the extent width added symmetrically
/// when deriving the display range. It is not validated: 0 is legal, and a
/// negative fraction inverts the padding direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConfig {
    /// Range used verbatim for display while autoscale is off.
    pub manual_range: Range,
    pub autoscale: bool,
    pub autoscale_padding: f64,
    /// Suppresses display-range recomputation while true.
    pub frozen: bool,
}

impl AxisConfig {
    pub fn new(manual_range: Range) -> Self {
        Self {
            manual_range,
            autoscale: true,
            autoscale_padding: 0.1,
            frozen: false,
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new(Range::new(0.0, 1.0))
    }
}
