//! # Stores, Watches, and Subscriptions
//!
//! Vessel's core is a single reactive primitive instead of a widget tree or
//! an event bus. There are three pieces:
//!
//! - `Store<T>` — observable holder of exactly one current value.
//! - `Watch<T>` — read-only notification channel of a store.
//! - `Subscription<T>` — cancellable handle to one attached observer.
//!
//! ## Stores
//!
//! `Store<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use vessel_core::*;
//!
//! let count = store(0);
//! count.set(1).unwrap();
//! count.update(|v| v + 1).unwrap();
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Every `set` runs the same synchronous pipeline on the caller's thread:
//! closed check, debug log, middleware chain, before hook, commit, observer
//! notification in registration order, after hook. There is no queueing and
//! no background scheduling; `set` returns after the last observer has.
//!
//! ## Middleware
//!
//! Middlewares are pure `T -> T` transformations folded left-to-right over
//! every candidate value before it becomes current:
//!
//! ```rust
//! use vessel_core::*;
//!
//! let level = store(5i32);
//! level.use_middleware(|v| v.clamp(0, 10));
//! level.set(42).unwrap();
//! assert_eq!(level.get(), 10);
//! ```
//!
//! A fallible middleware (`use_try_middleware`) that returns `Err` aborts
//! the `set` before anything is committed, so the current value is exactly
//! what it was before the call.
//!
//! ## Observers
//!
//! Observers attach through `subscribe` (tracked, so `unsubscribe_all` can
//! tear them down) or directly through `watch()`. Either way a new observer
//! immediately receives the value that is current at attach time, then every
//! later committed value:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vessel_core::*;
//!
//! let name = store("ada".to_string());
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sub = name
//!     .subscribe({
//!         let seen = seen.clone();
//!         move |v: &String| seen.borrow_mut().push(v.clone())
//!     })
//!     .unwrap();
//!
//! name.set("grace".to_string()).unwrap();
//! sub.cancel();
//! name.set("ida".to_string()).unwrap();
//!
//! assert_eq!(*seen.borrow(), ["ada".to_string(), "grace".to_string()]);
//! ```
//!
//! ## Closing
//!
//! `close()` is one-directional. A closed store rejects every `set` and its
//! channel is terminated: nobody already attached hears anything again.
//!
//! ```rust
//! use vessel_core::*;
//!
//! let s = store(7);
//! s.close();
//! assert!(matches!(s.set(8), Err(StoreError::Closed)));
//! assert_eq!(s.get(), 7);
//! ```
//!
//! Stores are single-threaded by design (`Rc`-based); put one behind your
//! own synchronization if you need cross-thread access.

pub mod error;
pub mod state;
pub mod store;
pub mod watch;

pub use error::*;
pub use state::*;
pub use store::*;
pub use watch::*;
