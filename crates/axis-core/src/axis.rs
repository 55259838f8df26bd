// File: crates/axis-core/src/axis.rs
// Summary: Axis model tying extent aggregation and range control to series/collection subscriptions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::AxisConfig;
use crate::controller::RangeController;
use crate::extent::ExtentAggregator;
use crate::notify::{Notifier, Subscription};
use crate::range::Range;
use crate::series::{CollectionEvent, SeriesCollection, SeriesHandle};

/// Reactive range model for one plotted axis.
///
/// Attach it to a [`SeriesCollection`] with [`AxisModel::observe`]; from then
/// on every membership change and every per-series stats change propagates
/// synchronously: the extent aggregation finishes (emitting at most one
/// stats notification) before the range controller recomputes the display
/// range (emitting at most one display-range notification). All notifications
/// fire after interior borrows are released, so listeners may call the
/// getters re-entrantly.
///
/// The model owns its extent, display range, and configuration; it holds only
/// weak references to the tracked series and never mutates the collection.
/// Clones are handles onto the same shared state.
#[derive(Clone)]
pub struct AxisModel {
    inner: Rc<RefCell<Inner>>,
    outputs: Outputs,
}

struct Inner {
    aggregator: ExtentAggregator,
    controller: RangeController,
    collection_sub: Option<Subscription>,
}

/// Output notifiers, clonable into subscription callbacks.
#[derive(Clone)]
struct Outputs {
    stats: Notifier<Option<Range>>,
    display_range: Notifier<Option<Range>>,
}

/// Pending notifications collected while the state borrow is held; dispatched
/// afterwards, stats before display range.
#[derive(Default)]
struct Pending {
    stats: Option<Option<Range>>,
    display_range: Option<Option<Range>>,
}

impl Outputs {
    fn dispatch(&self, pending: Pending) {
        if let Some(stats) = pending.stats {
            self.stats.emit(&stats);
        }
        if let Some(display_range) = pending.display_range {
            self.display_range.emit(&display_range);
        }
    }
}

impl Inner {
    /// Route a (possibly changed) extent through the controller.
    fn propagate_extent(&mut self, extent_changed: bool) -> Pending {
        let mut pending = Pending::default();
        if extent_changed {
            let extent = self.aggregator.combined();
            pending.stats = Some(extent);
            pending.display_range = self.controller.extent_changed(extent);
        }
        pending
    }

    /// One tracked series reported a new extent. `None` shrinks like an
    /// untrack (full rescan) while the series stays subscribed.
    fn series_stats_changed(&mut self, stats: &Option<Range>) -> Pending {
        let changed = match stats {
            Some(extent) => self.aggregator.update_stats(*extent),
            None => self.aggregator.reset_stats(),
        };
        self.propagate_extent(changed)
    }

    /// Track a newly added series and fold in whatever it reports right now.
    fn series_added(&mut self, series: &SeriesHandle, stats_sub: Subscription) -> Pending {
        if !self.aggregator.track(series, Some(stats_sub)) {
            return Pending::default();
        }
        let changed = match series.stats() {
            Some(extent) => self.aggregator.update_stats(extent),
            None => false,
        };
        self.propagate_extent(changed)
    }

    fn series_removed(&mut self, series: &SeriesHandle) -> Pending {
        if !self.aggregator.untrack(series) {
            return Pending::default();
        }
        let changed = self.aggregator.reset_stats();
        self.propagate_extent(changed)
    }
}

/// Build the per-series stats listener: upgrade the model, fold the change,
/// then dispatch with the borrow released.
fn series_subscription(
    series: &SeriesHandle,
    inner: &Weak<RefCell<Inner>>,
    outputs: &Outputs,
) -> Subscription {
    let inner = Weak::clone(inner);
    let outputs = outputs.clone();
    series.on_stats_changed(move |stats| {
        let Some(model) = inner.upgrade() else { return };
        let pending = model.borrow_mut().series_stats_changed(stats);
        outputs.dispatch(pending);
    })
}

impl AxisModel {
    pub fn new(config: AxisConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                aggregator: ExtentAggregator::new(),
                controller: RangeController::new(config),
                collection_sub: None,
            })),
            outputs: Outputs {
                stats: Notifier::new(),
                display_range: Notifier::new(),
            },
        }
    }

    /// Attach to a series collection: subscribe to add/remove, track every
    /// current member, and run one initial full aggregation (a single batch,
    /// so at most one stats and one display-range notification fire).
    ///
    /// Observing a second collection detaches from the first.
    pub fn observe(&self, collection: &SeriesCollection) {
        let weak = Rc::downgrade(&self.inner);
        let outputs = self.outputs.clone();
        let collection_sub = collection.on_event(move |event| {
            let Some(model) = weak.upgrade() else { return };
            let pending = match event {
                CollectionEvent::Added(series) => {
                    let stats_sub = series_subscription(series, &weak, &outputs);
                    model.borrow_mut().series_added(series, stats_sub)
                }
                CollectionEvent::Removed(series) => model.borrow_mut().series_removed(series),
            };
            outputs.dispatch(pending);
        });

        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.aggregator.clear();
            inner.collection_sub = Some(collection_sub);
            for series in collection.handles() {
                let stats_sub =
                    series_subscription(&series, &Rc::downgrade(&self.inner), &self.outputs);
                inner.aggregator.track(&series, Some(stats_sub));
            }
            let changed = inner.aggregator.reset_stats();
            inner.propagate_extent(changed)
        };
        self.outputs.dispatch(pending);
    }

    /// Detach every series subscription and the collection subscription.
    /// Idempotent; dropping the model detaches as well.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.aggregator.clear();
        inner.collection_sub = None;
    }

    // ── observable outputs ─────────────────────────────────────────────

    /// Combined extent over all tracked series, `None` while no data.
    pub fn stats(&self) -> Option<Range> {
        self.inner.borrow().aggregator.combined()
    }

    /// Range used to scale the axis, `None` while autoscale is on with no
    /// data.
    pub fn display_range(&self) -> Option<Range> {
        self.inner.borrow().controller.display_range()
    }

    pub fn on_stats_changed(&self, listener: impl FnMut(&Option<Range>) + 'static) -> Subscription {
        self.outputs.stats.subscribe(listener)
    }

    pub fn on_display_range_changed(
        &self,
        listener: impl FnMut(&Option<Range>) + 'static,
    ) -> Subscription {
        self.outputs.display_range.subscribe(listener)
    }

    /// Still-live tracked series in collection order, for the external
    /// metadata/label collaborator. No label or unit derivation happens here.
    pub fn tracked_series(&self) -> Vec<SeriesHandle> {
        self.inner.borrow().aggregator.tracked_series()
    }

    // ── configuration ──────────────────────────────────────────────────

    pub fn autoscale(&self) -> bool {
        self.inner.borrow().controller.autoscale()
    }

    pub fn autoscale_padding(&self) -> f64 {
        self.inner.borrow().controller.autoscale_padding()
    }

    pub fn frozen(&self) -> bool {
        self.inner.borrow().controller.frozen()
    }

    pub fn manual_range(&self) -> Range {
        self.inner.borrow().controller.manual_range()
    }

    pub fn set_autoscale(&self, autoscale: bool) {
        self.with_controller(|controller, extent| controller.set_autoscale(autoscale, extent));
    }

    pub fn set_autoscale_padding(&self, fraction: f64) {
        self.with_controller(|controller, extent| {
            controller.set_autoscale_padding(fraction, extent)
        });
    }

    pub fn set_frozen(&self, frozen: bool) {
        self.with_controller(|controller, extent| controller.set_frozen(frozen, extent));
    }

    pub fn set_manual_range(&self, range: Range) {
        self.with_controller(|controller, _extent| controller.set_manual_range(range));
    }

    fn with_controller(
        &self,
        trigger: impl FnOnce(&mut RangeController, Option<Range>) -> Option<Option<Range>>,
    ) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            let extent = inner.aggregator.combined();
            Pending {
                stats: None,
                display_range: trigger(&mut inner.controller, extent),
            }
        };
        self.outputs.dispatch(pending);
    }
}
