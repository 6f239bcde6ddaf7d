//! Synchronize operator implementation
//!
//! This module contains the Synchronize operator, which serializes the
//! notifications of a source that may emit from several threads at once, so
//! the downstream observer sees them one at a time and never after a terminal
//! notification.

use std::sync::{Arc, Mutex};

use crate::{
  gate::{lock, Gate, SharedGate},
  observable::{CoreObservable, ObservableType},
  observer::Observer,
  sink::Sink,
  subscription::{BoxedSubscriptionSend, Subscription},
};

/// Synchronize operator: delivers every notification under a gate
///
/// With no gate, each subscription gets a private one. With a
/// [`SharedGate`], every subscription built on that gate is mutually
/// exclusive with every other, which gives one lock to reason about at the
/// price of coarser exclusion.
///
/// The gate is not reentrant. A downstream handler that synchronously makes
/// the source emit again on the same thread, into this subscription or into
/// another one sharing the gate, deadlocks. Unsubscribing from inside a
/// handler is fine.
///
/// # Examples
///
/// ```
/// use rxsync::prelude::*;
///
/// let gate = SharedGate::new();
/// let mut values = vec![];
/// observable::from_iter([1, 2, 3])
///   .synchronize_with(&gate)
///   .subscribe(|v| values.push(v));
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct Synchronize<S> {
  pub source: S,
  pub gate: Option<SharedGate>,
}

impl<S> Synchronize<S> {
  pub fn new(source: S, gate: Option<SharedGate>) -> Self { Self { source, gate } }
}

impl<S: ObservableType> ObservableType for Synchronize<S> {
  type Item = S::Item;
  type Err = S::Err;
}

struct SynchronizeCore<O> {
  gate: Gate,
  observer: Mutex<Option<O>>,
  sink: Arc<Sink>,
}

/// The forwarding sink subscribed to the source.
///
/// Cheap to clone; a source emitting from several threads hands each one a
/// clone.
pub struct SynchronizeObserver<O>(Arc<SynchronizeCore<O>>);

impl<O> Clone for SynchronizeObserver<O> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<O, Item, Err> Observer<Item, Err> for SynchronizeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    let core = &*self.0;
    if core.sink.is_closed() {
      tracing::trace!("next dropped: sink terminated");
      return;
    }

    let _gate = core.gate.enter();
    let mut slot = lock(&core.observer);
    match slot.as_mut() {
      Some(observer) if !core.sink.is_closed() => observer.next(value),
      _ => tracing::trace!("next dropped: sink terminated"),
    }
    // Disposed while waiting for the gate or from inside the handler.
    if core.sink.is_closed() {
      *slot = None;
    }
  }

  fn error(self, err: Err) {
    let core = &*self.0;
    let _gate = core.gate.enter();
    let observer = lock(&core.observer).take();
    match observer {
      Some(observer) if !core.sink.is_closed() => {
        let _dispose = DisposeOnDrop(&core.sink);
        observer.error(err);
      }
      _ => tracing::trace!("error dropped: sink terminated"),
    }
  }

  fn complete(self) {
    let core = &*self.0;
    let _gate = core.gate.enter();
    let observer = lock(&core.observer).take();
    match observer {
      Some(observer) if !core.sink.is_closed() => {
        let _dispose = DisposeOnDrop(&core.sink);
        observer.complete();
      }
      _ => tracing::trace!("complete dropped: sink terminated"),
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.sink.is_closed() }
}

/// Disposes the sink when dropped, so a terminal handler that panics still
/// releases the upstream. Must be created after the gate guard so it runs
/// first.
struct DisposeOnDrop<'a>(&'a Sink);

impl Drop for DisposeOnDrop<'_> {
  fn drop(&mut self) { self.0.dispose(); }
}

/// Subscription returned by [`Synchronize`].
///
/// Unsubscribing is idempotent and may happen from any thread, while a
/// notification is in flight, or from inside the downstream handler. It
/// never waits for the gate: an in-flight notification finishes normally and
/// nothing is forwarded after it.
#[derive(Clone)]
pub struct SynchronizeSubscription(Arc<Sink>);

impl Subscription for SynchronizeSubscription {
  fn unsubscribe(self) { self.0.dispose(); }

  fn is_closed(&self) -> bool { self.0.is_closed() }
}

impl<S, O> CoreObservable<O> for Synchronize<S>
where
  S: CoreObservable<SynchronizeObserver<O>>,
  S::Unsub: Send + 'static,
{
  type Unsub = SynchronizeSubscription;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Synchronize { source, gate } = self;

    // The handle exists before the source can emit, so a synchronous
    // terminal notification or an early unsubscribe on another thread still
    // tears the upstream down once it is registered below.
    let sink = Arc::new(Sink::new());
    let gate = Gate::from_option(gate);
    tracing::trace!(shared_gate = gate.is_shared(), "synchronize subscribed");
    let core = SynchronizeCore {
      gate,
      observer: Mutex::new(Some(observer)),
      sink: sink.clone(),
    };

    let upstream = source.actual_subscribe(SynchronizeObserver(Arc::new(core)));
    sink.add(BoxedSubscriptionSend::new(upstream));
    SynchronizeSubscription(sink)
  }
}
