// File: crates/axis-core/src/controller.rs
// Summary: Display-range state machine over autoscale, padding, freeze, and manual range.

use crate::config::AxisConfig;
use crate::range::Range;

/// Derives the display range from `{extent, autoscale, padding, frozen,
/// manual range}`.
///
/// Each trigger method applies one input change and returns `Some(new_value)`
/// only when the display range actually changed (value equality), so the
/// caller emits at most one notification per input change. Setters whose new
/// value equals the current one do nothing.
///
/// Freeze is purely a suppressor: freezing never recomputes, and unfreezing
/// re-evaluates from the current autoscale mode rather than reviving a stale
/// value.
pub struct RangeController {
    autoscale: bool,
    autoscale_padding: f64,
    frozen: bool,
    manual_range: Range,
    display_range: Option<Range>,
}

impl RangeController {
    pub fn new(config: AxisConfig) -> Self {
        // With autoscale off from the start, the manual range is the display
        // range until told otherwise.
        let display_range = if config.autoscale { None } else { Some(config.manual_range) };
        Self {
            autoscale: config.autoscale,
            autoscale_padding: config.autoscale_padding,
            frozen: config.frozen,
            manual_range: config.manual_range,
            display_range,
        }
    }

    pub fn autoscale(&self) -> bool {
        self.autoscale
    }

    pub fn autoscale_padding(&self) -> f64 {
        self.autoscale_padding
    }

    pub fn frozen(&self) -> bool {
        self.frozen
    }

    pub fn manual_range(&self) -> Range {
        self.manual_range
    }

    pub fn display_range(&self) -> Option<Range> {
        self.display_range
    }

    /// The aggregated extent changed. Recomputes only while autoscale is on
    /// and not frozen; an absent extent clears the display range.
    pub fn extent_changed(&mut self, extent: Option<Range>) -> Option<Option<Range>> {
        if !self.autoscale || self.frozen {
            return None;
        }
        self.apply(self.autoscaled(extent))
    }

    /// Toggle autoscale. Turning it on derives the display range from the
    /// extent (absent extent clears it); turning it off snaps to the manual
    /// range. Acts regardless of freeze.
    pub fn set_autoscale(&mut self, autoscale: bool, extent: Option<Range>) -> Option<Option<Range>> {
        if self.autoscale == autoscale {
            return None;
        }
        self.autoscale = autoscale;
        log::debug!("autoscale -> {autoscale}");
        if autoscale {
            self.apply(self.autoscaled(extent))
        } else {
            self.apply(Some(self.manual_range))
        }
    }

    /// Change the padding fraction. Recomputes only while autoscale is on,
    /// not frozen, and an extent is present.
    pub fn set_autoscale_padding(&mut self, fraction: f64, extent: Option<Range>) -> Option<Option<Range>> {
        if self.autoscale_padding == fraction {
            return None;
        }
        self.autoscale_padding = fraction;
        if !self.autoscale || self.frozen || extent.is_none() {
            return None;
        }
        self.apply(self.autoscaled(extent))
    }

    /// Toggle freeze. Freezing changes no value; unfreezing re-runs the
    /// autoscale action with the current mode so the display range catches up
    /// with whatever the extent and padding are now.
    pub fn set_frozen(&mut self, frozen: bool, extent: Option<Range>) -> Option<Option<Range>> {
        if self.frozen == frozen {
            return None;
        }
        self.frozen = frozen;
        log::debug!("frozen -> {frozen}");
        if frozen {
            return None;
        }
        if self.autoscale {
            self.apply(self.autoscaled(extent))
        } else {
            self.apply(Some(self.manual_range))
        }
    }

    /// Replace the manual range. Applied to the display range only while
    /// autoscale is off; always stored for the next autoscale-off switch.
    pub fn set_manual_range(&mut self, range: Range) -> Option<Option<Range>> {
        if self.manual_range == range {
            return None;
        }
        self.manual_range = range;
        if self.autoscale {
            return None;
        }
        self.apply(Some(range))
    }

    fn autoscaled(&self, extent: Option<Range>) -> Option<Range> {
        extent.map(|e| e.padded(self.autoscale_padding))
    }

    fn apply(&mut self, display_range: Option<Range>) -> Option<Option<Range>> {
        if self.display_range == display_range {
            return None;
        }
        self.display_range = display_range;
        Some(display_range)
    }
}
