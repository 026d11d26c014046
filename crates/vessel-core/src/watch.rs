use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::StoreError;
use crate::store::{Inner, Observer, SubId};

/// Read-only notification channel of a [`Store`](crate::Store).
///
/// Attaching a callback registers it for every future committed value and
/// replays the current value to it once, synchronously, at attach time.
pub struct Watch<T: 'static> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Watch<T> {
    pub(crate) fn new(inner: Rc<RefCell<Inner<T>>>) -> Self {
        Self { inner }
    }

    pub fn attach(&self, f: impl Fn(&T) + 'static) -> Result<Subscription<T>, StoreError>
    where
        T: Clone,
    {
        let callback: Rc<dyn Fn(&T)> = Rc::new(f);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return Err(StoreError::Closed);
            }
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push(Observer {
                id,
                callback: callback.clone(),
            });
            (id, inner.value.clone())
        };

        // Replay outside the borrow so the callback may call back into
        // the store.
        callback(&current);

        Ok(Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        })
    }
}

impl<T> Clone for Watch<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Handle to one attached observer.
///
/// Holds only a weak reference to the store, so keeping a handle around does
/// not keep the store alive.
pub struct Subscription<T: 'static> {
    inner: Weak<RefCell<Inner<T>>>,
    id: SubId,
}

impl<T> Subscription<T> {
    /// Removes the observer from future notifications. Safe to call more
    /// than once, and a no-op once the store is gone.
    pub fn cancel(&self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.observers.retain(|o| o.id != self.id);
            inner.tracked.retain(|s| s.id != self.id);
        }
    }
}

impl<T> Clone for Subscription<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            id: self.id,
        }
    }
}
