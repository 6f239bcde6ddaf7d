//! Observable traits and the synchronous sources.
//!
//! An observable is anything implementing [`CoreObservable<O>`] for the
//! observers it accepts. The [`Observable`] extension trait is implemented for
//! every [`ObservableType`] and carries the user-facing methods.

use crate::{
  gate::SharedGate,
  observer::{FnMutObserver, Observer},
  ops::synchronize::Synchronize,
  subscription::Subscription,
};

mod create;
mod from_iter;
mod throw_err;

pub use create::*;
pub use from_iter::*;
pub use throw_err::*;

/// Names the value and error types a stream emits.
pub trait ObservableType {
  type Item;
  type Err;
}

/// The subscription primitive: attach `observer` and hand back the handle
/// that detaches it.
///
/// Implementations may call into `observer` synchronously before returning,
/// or from any number of other threads afterwards.
pub trait CoreObservable<O> {
  type Unsub: Subscription;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

/// User-facing methods available on every observable.
pub trait Observable: ObservableType + Sized {
  /// Subscribe with a closure receiving each value.
  ///
  /// Only available for streams that cannot fail; use
  /// [`subscribe_with`](Observable::subscribe_with) to observe errors.
  fn subscribe<F>(self, next: F) -> <Self as CoreObservable<FnMutObserver<F>>>::Unsub
  where
    F: FnMut(Self::Item),
    Self: CoreObservable<FnMutObserver<F>>,
  {
    self.actual_subscribe(FnMutObserver(next))
  }

  /// Subscribe a full observer.
  fn subscribe_with<O>(self, observer: O) -> <Self as CoreObservable<O>>::Unsub
  where
    O: Observer<Self::Item, Self::Err>,
    Self: CoreObservable<O>,
  {
    self.actual_subscribe(observer)
  }

  /// Serialize notifications through a gate private to each subscription.
  ///
  /// Whatever threads the source emits on, the downstream observer never
  /// sees two notifications at once and sees nothing after a terminal one.
  ///
  /// ```rust
  /// use rxsync::prelude::*;
  ///
  /// let mut values = vec![];
  /// observable::from_iter(0..3)
  ///   .synchronize()
  ///   .subscribe(|v| values.push(v));
  /// assert_eq!(values, vec![0, 1, 2]);
  /// ```
  fn synchronize(self) -> Synchronize<Self> { Synchronize::new(self, None) }

  /// Serialize notifications through `gate`, which may be shared with other
  /// subscriptions.
  ///
  /// All subscriptions built on the same gate exclude one another, even when
  /// their sources and observers are unrelated.
  fn synchronize_with(self, gate: &SharedGate) -> Synchronize<Self> {
    Synchronize::new(self, Some(gate.clone()))
  }
}

impl<T: ObservableType> Observable for T {}
