// File: crates/axis-core/src/range.rs
// Summary: Closed numeric interval used for extents, manual ranges, and display ranges.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    #[error("range min {min} is above max {max}")]
    Inverted { min: f64, max: f64 },
}

/// A closed `[min, max]` interval on the value axis.
///
/// Invariant: `min <= max` when built through [`Range::new`] or
/// [`Range::try_new`]. An absent extent or display range is modeled as
/// `Option<Range>::None`, never as a zero-width sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Create a range from two endpoints in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    /// Create a range, rejecting inverted bounds.
    pub fn try_new(min: f64, max: f64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Smallest range containing both `self` and `other`.
    pub fn union(&self, other: Range) -> Range {
        Range {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Apply symmetric padding as a fraction of the range width.
    ///
    /// A zero pad amount (zero-width range, or fraction 0 on any range with
    /// zero width) falls back to one absolute unit so a single-sample or
    /// constant-value extent still yields a renderable range. Negative
    /// fractions are accepted as-is and invert the padding direction.
    pub fn padded(&self, fraction: f64) -> Range {
        let mut pad = (self.max - self.min).abs() * fraction;
        if pad == 0.0 {
            pad = 1.0;
        }
        Range {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
