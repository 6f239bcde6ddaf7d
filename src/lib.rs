//! # rxsync: serialized delivery for Reactive Extensions style streams
//!
//! A source may call its observer from any number of threads. The
//! [`synchronize`](observable::Observable::synchronize) operator puts a gate in
//! front of the downstream observer so that it sees one notification at a
//! time and nothing after a terminal `error` or `complete`.
//!
//! ```rust
//! use rxsync::prelude::*;
//!
//! let mut values = vec![];
//! observable::from_iter(0..5)
//!   .synchronize()
//!   .subscribe(|v| values.push(v));
//! assert_eq!(values, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`CoreObservable`] | Attaches an observer, returns a [`Subscription`] |
//! | [`SharedGate`] | A lock several synchronized streams can share |
//! | [`Synchronize`] | The serializing operator |
//!
//! [`Observer`]: observer::Observer
//! [`CoreObservable`]: observable::CoreObservable
//! [`Subscription`]: subscription::Subscription
//! [`SharedGate`]: gate::SharedGate
//! [`Synchronize`]: ops::synchronize::Synchronize

pub mod gate;
pub mod notification;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod sink;
pub mod subscription;

pub use prelude::*;
