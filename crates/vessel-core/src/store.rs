use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{MiddlewareError, StoreError};
use crate::watch::{Subscription, Watch};

pub type SubId = u64;

/// Cloneable handle to a single reactive value.
///
/// Replacing the value with [`set`](Store::set) runs the middleware chain,
/// the before hook, the commit, observer notification, and the after hook,
/// in that order, synchronously on the caller's thread.
#[derive(Clone)]
pub struct Store<T: 'static>(Rc<RefCell<Inner<T>>>);

pub(crate) struct Inner<T: 'static> {
    pub(crate) value: T,
    pub(crate) middlewares: Vec<Rc<dyn Fn(T) -> Result<T, MiddlewareError>>>,
    pub(crate) observers: Vec<Observer<T>>,
    // Handles produced by `subscribe`, so `unsubscribe_all` can find them.
    pub(crate) tracked: Vec<Subscription<T>>,
    pub(crate) before: Option<Rc<dyn Fn(&T)>>,
    pub(crate) after: Option<Rc<dyn Fn(&T)>>,
    pub(crate) debug: Option<Rc<dyn Fn(&T, &T)>>,
    pub(crate) closed: bool,
    pub(crate) next_id: SubId,
}

pub(crate) struct Observer<T> {
    pub(crate) id: SubId,
    pub(crate) callback: Rc<dyn Fn(&T)>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            middlewares: Vec::new(),
            observers: Vec::new(),
            tracked: Vec::new(),
            before: None,
            after: None,
            debug: None,
            closed: false,
            next_id: 0,
        })))
    }

    /// Snapshot of the current value. May go stale the moment anyone calls
    /// `set` on another handle to the same store.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.0.borrow().closed
    }

    /// Replaces the current value.
    ///
    /// The candidate is folded left-to-right through every registered
    /// middleware before it is committed; a middleware error aborts the call
    /// and leaves the current value untouched. Once committed, every observer
    /// registered at commit time is notified in registration order with the
    /// transformed value. An observer that panics aborts delivery to the
    /// observers after it.
    pub fn set(&self, next: T) -> Result<(), StoreError>
    where
        T: Clone,
    {
        let (middlewares, before) = {
            let inner = self.0.borrow();
            if inner.closed {
                return Err(StoreError::Closed);
            }
            if let Some(debug) = &inner.debug {
                debug(&inner.value, &next);
            }
            (inner.middlewares.clone(), inner.before.clone())
        };

        let mut next = next;
        for middleware in &middlewares {
            next = middleware(next).map_err(StoreError::Middleware)?;
        }

        // The before hook observes the transformed value while `get` still
        // returns the old one.
        if let Some(before) = before {
            before(&next);
        }

        let (snapshot, after) = {
            let mut inner = self.0.borrow_mut();
            inner.value = next.clone();
            let snapshot: Vec<Rc<dyn Fn(&T)>> =
                inner.observers.iter().map(|o| o.callback.clone()).collect();
            (snapshot, inner.after.clone())
        };

        // Borrow is released: observer callbacks may call `get`, cancel
        // their own subscription, or attach new observers. The snapshot
        // fixes who gets this emission.
        for callback in &snapshot {
            callback(&next);
        }

        if let Some(after) = after {
            after(&next);
        }
        Ok(())
    }

    /// Computes a replacement from the current value and `set`s it. The old
    /// value is never mutated in place.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Result<(), StoreError>
    where
        T: Clone,
    {
        let next = f(&self.get());
        self.set(next)
    }

    /// Read-only notification channel for this store.
    pub fn watch(&self) -> Watch<T> {
        Watch::new(self.0.clone())
    }

    /// Attaches `f` to the notification channel and tracks the handle so
    /// [`unsubscribe_all`](Store::unsubscribe_all) can cancel it later.
    ///
    /// `f` immediately receives the current value once, then every value
    /// committed by future `set` calls.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Result<Subscription<T>, StoreError>
    where
        T: Clone,
    {
        let sub = self.watch().attach(f)?;
        self.0.borrow_mut().tracked.push(sub.clone());
        Ok(sub)
    }

    /// Cancels every handle produced by `subscribe`. Observers attached
    /// directly through `watch()` are unaffected.
    pub fn unsubscribe_all(&self) {
        let tracked = std::mem::take(&mut self.0.borrow_mut().tracked);
        for sub in tracked {
            sub.cancel();
        }
    }

    /// Appends a pure transformation applied to every future `set`. Never
    /// re-applied retroactively to the current value.
    pub fn use_middleware(&self, f: impl Fn(T) -> T + 'static) {
        self.use_try_middleware(move |value| Ok(f(value)));
    }

    /// Fallible variant of [`use_middleware`](Store::use_middleware): an
    /// `Err` aborts the `set` that triggered it.
    pub fn use_try_middleware(&self, f: impl Fn(T) -> Result<T, MiddlewareError> + 'static) {
        self.0.borrow_mut().middlewares.push(Rc::new(f));
    }

    /// Runs strictly before a transformed value is committed, before any
    /// observer sees it.
    pub fn on_before_set(&self, f: impl Fn(&T) + 'static) {
        self.0.borrow_mut().before = Some(Rc::new(f));
    }

    /// Runs after all observers have been notified.
    pub fn on_after_set(&self, f: impl Fn(&T) + 'static) {
        self.0.borrow_mut().after = Some(Rc::new(f));
    }

    /// Marks the store closed and terminates the notification channel: every
    /// later `set` fails and no observer is ever notified again. Idempotent.
    pub fn close(&self) {
        let mut inner = self.0.borrow_mut();
        if inner.closed {
            return;
        }
        inner.closed = true;
        inner.observers.clear();
        inner.tracked.clear();
    }
}

impl<T: fmt::Debug + 'static> Store<T> {
    /// Logs the outgoing and incoming value on every `set`, at debug level.
    /// A missing or failing log sink never affects `set` semantics.
    pub fn enable_debug(&self) {
        self.0.borrow_mut().debug = Some(Rc::new(|current: &T, next: &T| {
            log::debug!(target: "vessel", "current value: {current:?}");
            log::debug!(target: "vessel", "next value: {next:?}");
        }));
    }
}

pub fn store<T>(value: T) -> Store<T> {
    Store::new(value)
}
