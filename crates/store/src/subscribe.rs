//! Change notification for view layers.
//!
//! Stores are explicit owned objects rather than ambient globals, so a view
//! layer that wants to re-render on mutation registers a callback here. The
//! whole system is single-threaded and every mutation runs to completion
//! before the next one begins, so callbacks are invoked synchronously right
//! after the mutated slice has been persisted.

/// Which slice of state a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The raw cart id list changed.
    Cart,
    /// The favorites set changed.
    Favorites,
    /// The order list changed (placement or status update).
    Orders,
    /// The auth session changed (login or logout).
    Auth,
}

/// Handle returned by `subscribe`, used to unsubscribe.
pub type Subscription = usize;

/// Registry of change listeners owned by a store.
#[derive(Default)]
pub(crate) struct Subscribers {
    listeners: Vec<(Subscription, Box<dyn Fn(ChangeKind)>)>,
    next_id: Subscription,
}

impl Subscribers {
    /// Register a callback, returning a handle for removal.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeKind) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered callback. Unknown handles are no-ops.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription);
    }

    /// Invoke every listener with the given change kind.
    pub fn notify(&self, kind: ChangeKind) {
        for (_, listener) in &self.listeners {
            listener(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let sink = Rc::clone(&seen);
        subscribers.subscribe(move |kind| sink.borrow_mut().push(kind));

        subscribers.notify(ChangeKind::Cart);
        subscribers.notify(ChangeKind::Orders);
        assert_eq!(*seen.borrow(), vec![ChangeKind::Cart, ChangeKind::Orders]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let sink = Rc::clone(&seen);
        let handle = subscribers.subscribe(move |kind| sink.borrow_mut().push(kind));
        subscribers.notify(ChangeKind::Favorites);
        subscribers.unsubscribe(handle);
        subscribers.notify(ChangeKind::Favorites);

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_handle_is_noop() {
        let mut subscribers = Subscribers::default();
        subscribers.unsubscribe(42);
        subscribers.notify(ChangeKind::Auth);
    }
}
