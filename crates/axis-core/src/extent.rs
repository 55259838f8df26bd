// File: crates/axis-core/src/extent.rs
// Summary: Combined extent aggregation over tracked series (adopt-or-widen, full rescan to shrink).

use std::rc::{Rc, Weak};

use crate::notify::Subscription;
use crate::range::Range;
use crate::series::{SeriesHandle, SeriesModel};

struct TrackedSeries {
    series: Weak<SeriesModel>,
    // Held so dropping the entry detaches the stats listener.
    _stats_sub: Option<Subscription>,
}

/// Maintains the combined min/max extent over all tracked series.
///
/// The combined extent keeps no per-series breakdown, so it can only be
/// widened incrementally ([`ExtentAggregator::update_stats`]); shrinking after
/// a removal or a series reporting no data goes through the full
/// O(tracked-count) rescan in [`ExtentAggregator::reset_stats`]. Series counts
/// here are dozens, not millions, so the rescan is the deliberate tradeoff
/// over an incremental order-statistics structure.
#[derive(Default)]
pub struct ExtentAggregator {
    tracked: Vec<TrackedSeries>,
    combined: Option<Range>,
}

impl ExtentAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combined extent, `None` while no tracked series reports data.
    pub fn combined(&self) -> Option<Range> {
        self.combined
    }

    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    /// Start tracking a series, keeping its stats subscription alive for as
    /// long as the entry exists. Idempotent: a second track of the same
    /// series is refused. Does not recompute; the caller batches that.
    pub fn track(&mut self, series: &SeriesHandle, stats_sub: Option<Subscription>) -> bool {
        if self.is_tracked(series) {
            return false;
        }
        self.tracked.push(TrackedSeries {
            series: Rc::downgrade(series),
            _stats_sub: stats_sub,
        });
        true
    }

    /// Stop tracking a series (dropping its stats subscription). Returns
    /// false when the series was not tracked. The caller follows up with
    /// [`ExtentAggregator::reset_stats`] to shrink the combined extent.
    pub fn untrack(&mut self, series: &SeriesHandle) -> bool {
        let before = self.tracked.len();
        // entries whose series has been dropped are pruned here as well
        self.tracked.retain(|t| {
            t.series
                .upgrade()
                .map(|s| !Rc::ptr_eq(&s, series))
                .unwrap_or(false)
        });
        self.tracked.len() < before
    }

    pub fn is_tracked(&self, series: &SeriesHandle) -> bool {
        self.tracked.iter().any(|t| {
            t.series
                .upgrade()
                .map(|s| Rc::ptr_eq(&s, series))
                .unwrap_or(false)
        })
    }

    /// Still-live tracked series, in tracking (collection) order.
    pub fn tracked_series(&self) -> Vec<SeriesHandle> {
        self.tracked.iter().filter_map(|t| t.series.upgrade()).collect()
    }

    /// Fold one series' reported extent into the combined extent:
    /// adopt it when there is none yet, otherwise widen. Returns whether the
    /// combined extent actually changed (value equality, so re-reporting an
    /// interior extent is a no-op).
    pub fn update_stats(&mut self, series_extent: Range) -> bool {
        let widened = match self.combined {
            None => series_extent,
            Some(combined) => combined.union(series_extent),
        };
        if self.combined == Some(widened) {
            return false;
        }
        log::trace!("extent widened to {widened}");
        self.combined = Some(widened);
        true
    }

    /// Recompute the combined extent from scratch over every still-tracked
    /// series, in order. This is the only way the extent shrinks. Returns
    /// whether the result differs from the value before the reset; at most
    /// one notification follows from the caller.
    pub fn reset_stats(&mut self) -> bool {
        let previous = self.combined.take();
        for series in self.tracked_series() {
            if let Some(stats) = series.stats() {
                self.update_stats(stats);
            }
        }
        log::debug!(
            "reset_stats over {} series: {:?} -> {:?}",
            self.tracked.len(),
            previous,
            self.combined
        );
        self.combined != previous
    }

    /// Drop every tracked entry (detaching all stats subscriptions).
    pub fn clear(&mut self) {
        self.tracked.clear();
    }
}
