// File: crates/axis-core/src/notify.rs
// Summary: Single-threaded typed change notifications with token-based unsubscribe.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Entry<E> {
    id: u64,
    callback: Callback<E>,
}

struct Registry<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

/// Synchronous broadcast point for one typed event.
///
/// Listeners are plain closures registered via [`Notifier::subscribe`], which
/// hands back a [`Subscription`] token; dropping (or cancelling) the token
/// removes the listener. Everything runs on the caller's thread: `emit`
/// invokes every listener before returning.
pub struct Notifier<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for Notifier<E> {
    fn clone(&self) -> Self {
        Self { registry: Rc::clone(&self.registry) }
    }
}

impl<E: 'static> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Notifier<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry { next_id: 0, entries: Vec::new() })),
        }
    }

    /// Register a listener. The listener stays attached until the returned
    /// token is dropped or cancelled.
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.entries.push(Entry { id, callback: Rc::new(RefCell::new(listener)) });
            id
        };
        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().entries.retain(|e| e.id != id);
                }
            })),
        }
    }

    /// Invoke every current listener with `event`.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// cancel on this notifier from within their own callback. A listener
    /// cancelled during dispatch may still observe the in-flight event.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Callback<E>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|e| Rc::clone(&e.callback))
            .collect();
        for callback in snapshot {
            (callback.borrow_mut())(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// Token for one listener registration; removing the listener is done by
/// dropping the token or calling [`Subscription::cancel`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Detach the listener now instead of at drop time.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
