// File: crates/axis-core/src/series.rs
// Summary: Per-series stats collaborator and the externally-owned series collection.

use std::cell::RefCell;
use std::rc::Rc;

use crate::notify::{Notifier, Subscription};
use crate::range::Range;

/// Shared handle to a series. The axis model only ever keeps weak copies.
pub type SeriesHandle = Rc<SeriesModel>;

/// One plotted data series as seen by the axis model: a name and an observed
/// value extent (`None` while the series has no data), with a change
/// notification fired whenever the extent changes.
///
/// Whatever produces the data (a live feed, a loaded file) owns the values;
/// this model only carries the reported min/max.
pub struct SeriesModel {
    name: String,
    stats: RefCell<Option<Range>>,
    stats_changed: Notifier<Option<Range>>,
}

impl SeriesModel {
    pub fn new(name: impl Into<String>) -> SeriesHandle {
        Rc::new(Self {
            name: name.into(),
            stats: RefCell::new(None),
            stats_changed: Notifier::new(),
        })
    }

    /// Create a series that already reports an extent.
    pub fn with_stats(name: impl Into<String>, stats: Range) -> SeriesHandle {
        let series = Self::new(name);
        series.set_stats(Some(stats));
        series
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently reported extent, `None` when the series has no data.
    pub fn stats(&self) -> Option<Range> {
        *self.stats.borrow()
    }

    /// Report a new extent (or `None` for no data). No-op when the value is
    /// unchanged; otherwise fires the stats-changed notification.
    pub fn set_stats(&self, stats: Option<Range>) {
        {
            let mut current = self.stats.borrow_mut();
            if *current == stats {
                return;
            }
            *current = stats;
        }
        self.stats_changed.emit(&stats);
    }

    pub fn on_stats_changed(&self, listener: impl FnMut(&Option<Range>) + 'static) -> Subscription {
        self.stats_changed.subscribe(listener)
    }
}

impl std::fmt::Debug for SeriesModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesModel")
            .field("name", &self.name)
            .field("stats", &self.stats.borrow())
            .finish()
    }
}

/// Membership change in a [`SeriesCollection`].
#[derive(Clone)]
pub enum CollectionEvent {
    Added(SeriesHandle),
    Removed(SeriesHandle),
}

/// Ordered, externally-owned collection of series.
///
/// The axis model observes membership through [`SeriesCollection::on_event`]
/// and iterates via [`SeriesCollection::handles`]; it never mutates the
/// collection. Several axis models may observe the same collection.
#[derive(Default)]
pub struct SeriesCollection {
    items: RefCell<Vec<SeriesHandle>>,
    events: Notifier<CollectionEvent>,
}

impl SeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, series: SeriesHandle) {
        self.items.borrow_mut().push(Rc::clone(&series));
        self.events.emit(&CollectionEvent::Added(series));
    }

    /// Remove a series by identity. Returns false when it was not a member.
    pub fn remove(&self, series: &SeriesHandle) -> bool {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|s| !Rc::ptr_eq(s, series));
            items.len() < before
        };
        if removed {
            self.events.emit(&CollectionEvent::Removed(Rc::clone(series)));
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SeriesHandle> {
        self.items.borrow().get(index).cloned()
    }

    /// Snapshot of the current members in collection order.
    pub fn handles(&self) -> Vec<SeriesHandle> {
        self.items.borrow().clone()
    }

    pub fn on_event(&self, listener: impl FnMut(&CollectionEvent) + 'static) -> Subscription {
        self.events.subscribe(listener)
    }
}
