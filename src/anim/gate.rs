//! Shared hover gate between the scroll cinematic and the pointer tilt.
//!
//! While the cinematic exit is playing, the scroll controller owns the
//! showcase transforms; pointer tilt must not fight it. The gate is that
//! handshake: the cinematic writes it, tilt reads it per sample and gets a
//! notification on each transition so it can reset to neutral.
//!
//! Listeners must not subscribe or unsubscribe from inside a notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubscriptionId = u32;

struct GateInner {
    enabled: Cell<bool>,
    next_id: Cell<SubscriptionId>,
    listeners: RefCell<Vec<(SubscriptionId, Box<dyn Fn(bool)>)>>,
}

/// Cloneable handle to the gate; clones share one underlying state.
#[derive(Clone)]
pub struct GateHandle {
    inner: Rc<GateInner>,
}

// Yew re-renders compare props by value; two handles are "equal" when they
// point at the same gate.
impl PartialEq for GateHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for GateHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl GateHandle {
    /// Starts enabled: the hero is fully visible on load.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(GateInner {
                enabled: Cell::new(true),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.get()
    }

    /// Edge-triggered write: listeners are only notified when the value
    /// actually changes.
    pub fn set(&self, enabled: bool) {
        if self.inner.enabled.get() == enabled {
            return;
        }
        self.inner.enabled.set(enabled);
        self.notify(enabled);
    }

    /// Re-broadcast the current state without requiring a transition. Used
    /// once at cinematic mount so dependents start consistent.
    pub fn announce(&self) {
        self.notify(self.inner.enabled.get());
    }

    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> SubscriptionId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    fn notify(&self, value: bool) {
        for (_, listener) in self.inner.listeners.borrow().iter() {
            listener(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_enabled() {
        assert!(GateHandle::new().is_enabled());
    }

    #[test]
    fn duplicate_set_produces_one_transition() {
        let gate = GateHandle::new();
        let transitions = Rc::new(Cell::new(0u32));
        let seen = transitions.clone();
        gate.subscribe(move |_| seen.set(seen.get() + 1));

        gate.set(false);
        gate.set(false);
        gate.set(false);
        assert_eq!(transitions.get(), 1);
        assert!(!gate.is_enabled());

        gate.set(true);
        gate.set(true);
        assert_eq!(transitions.get(), 2);
        assert!(gate.is_enabled());
    }

    #[test]
    fn disable_notification_carries_state_for_reset() {
        // The tilt controller resets to neutral exactly when it sees a
        // `false` notification; make sure the payload matches the edge.
        let gate = GateHandle::new();
        let resets = Rc::new(Cell::new(0u32));
        let seen = resets.clone();
        gate.subscribe(move |enabled| {
            if !enabled {
                seen.set(seen.get() + 1);
            }
        });

        gate.set(false);
        gate.set(false);
        assert_eq!(resets.get(), 1);
        gate.set(true);
        assert_eq!(resets.get(), 1);
        gate.set(false);
        assert_eq!(resets.get(), 2);
    }

    #[test]
    fn announce_rebroadcasts_without_transition() {
        let gate = GateHandle::new();
        let heard = Rc::new(RefCell::new(Vec::new()));
        let seen = heard.clone();
        gate.subscribe(move |enabled| seen.borrow_mut().push(enabled));

        gate.announce();
        assert_eq!(*heard.borrow(), vec![true]);
        // State unchanged; a later real transition still fires.
        gate.set(false);
        assert_eq!(*heard.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let gate = GateHandle::new();
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();
        let id = gate.subscribe(move |_| seen.set(seen.get() + 1));
        gate.set(false);
        gate.unsubscribe(id);
        gate.set(true);
        assert_eq!(count.get(), 1);
    }
}
