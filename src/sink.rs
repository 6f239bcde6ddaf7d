//! Disposal state shared between a forwarding sink and its subscription
//! handle.
//!
//! A [`Sink`] is a two-state machine, `Active -> Terminated`, plus the list
//! of upstream subscriptions to tear down on that transition. The transition
//! happens exactly once, whether triggered by a terminal notification or by
//! the downstream unsubscribing, and every later request is a no-op.
//!
//! Neither the transition nor registration ever touches the gate, so a
//! downstream handler may dispose its own subscription while the gate is
//! held without deadlocking.

use std::sync::{
  atomic::{AtomicU8, Ordering},
  Mutex,
};

use smallvec::SmallVec;

use crate::{
  gate::lock,
  subscription::{BoxedSubscriptionSend, Subscription},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SinkState {
  Active = 0,
  Terminated = 1,
}

#[derive(Default)]
pub struct Sink {
  state: AtomicU8,
  teardown: Mutex<SmallVec<[BoxedSubscriptionSend; 1]>>,
}

impl Sink {
  pub fn new() -> Self { Self::default() }

  pub fn state(&self) -> SinkState {
    match self.state.load(Ordering::Acquire) {
      0 => SinkState::Active,
      _ => SinkState::Terminated,
    }
  }

  #[inline]
  pub fn is_closed(&self) -> bool { self.state() == SinkState::Terminated }

  /// Register an upstream subscription to release on disposal.
  ///
  /// If the sink already terminated, `subscription` is released right away.
  pub fn add(&self, subscription: BoxedSubscriptionSend) {
    let mut teardown = lock(&self.teardown);
    if self.is_closed() {
      drop(teardown);
      subscription.unsubscribe();
    } else {
      teardown.retain(|s| !s.is_closed());
      teardown.push(subscription);
    }
  }

  /// Move to `Terminated` and release every registered subscription.
  ///
  /// Returns `true` only for the call that performed the transition.
  pub fn dispose(&self) -> bool {
    let transitioned = self
      .state
      .compare_exchange(
        SinkState::Active as u8,
        SinkState::Terminated as u8,
        Ordering::AcqRel,
        Ordering::Acquire,
      )
      .is_ok();
    if !transitioned {
      return false;
    }

    // Released outside the lock: an upstream teardown may call back into us.
    let drained: SmallVec<[BoxedSubscriptionSend; 1]> = lock(&self.teardown).drain(..).collect();
    tracing::debug!(upstreams = drained.len(), "sink disposed");
    for subscription in drained {
      subscription.unsubscribe();
    }
    true
  }

  /// Number of upstream subscriptions still registered.
  pub fn teardown_size(&self) -> usize { lock(&self.teardown).len() }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  };

  use super::*;
  use crate::subscription::ClosureSubscription;

  fn counting(counter: &Arc<AtomicUsize>) -> BoxedSubscriptionSend {
    let counter = counter.clone();
    BoxedSubscriptionSend::new(ClosureSubscription(move || {
      counter.fetch_add(1, Ordering::SeqCst);
    }))
  }

  #[rxsync_macro::test]
  fn test_dispose_releases_registered() {
    let released = Arc::new(AtomicUsize::new(0));
    let sink = Sink::new();
    sink.add(counting(&released));
    assert_eq!(sink.teardown_size(), 1);
    assert_eq!(sink.state(), SinkState::Active);

    assert!(sink.dispose());

    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert_eq!(sink.teardown_size(), 0);
    assert_eq!(sink.state(), SinkState::Terminated);
  }

  #[rxsync_macro::test]
  fn test_dispose_is_idempotent() {
    let released = Arc::new(AtomicUsize::new(0));
    let sink = Sink::new();
    sink.add(counting(&released));

    assert!(sink.dispose());
    assert!(!sink.dispose());
    assert!(!sink.dispose());

    assert_eq!(released.load(Ordering::SeqCst), 1);
  }

  #[rxsync_macro::test]
  fn test_add_after_dispose_releases_immediately() {
    let released = Arc::new(AtomicUsize::new(0));
    let sink = Sink::new();
    sink.dispose();

    sink.add(counting(&released));

    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert_eq!(sink.teardown_size(), 0);
  }

  #[rxsync_macro::test]
  fn test_add_prunes_closed_subscriptions() {
    let sink = Sink::new();
    sink.add(BoxedSubscriptionSend::new(()));
    sink.add(BoxedSubscriptionSend::new(()));
    // Unit subscriptions are always closed, so only the newest survives.
    assert_eq!(sink.teardown_size(), 1);
  }

  #[rxsync_macro::test]
  fn test_concurrent_dispose_transitions_once() {
    let released = Arc::new(AtomicUsize::new(0));
    let sink = Arc::new(Sink::new());
    sink.add(counting(&released));

    let winners: usize = (0..8)
      .map(|_| {
        let sink = sink.clone();
        std::thread::spawn(move || sink.dispose())
      })
      .collect::<Vec<_>>()
      .into_iter()
      .map(|h| h.join().unwrap() as usize)
      .sum();

    assert_eq!(winners, 1);
    assert_eq!(released.load(Ordering::SeqCst), 1);
  }
}
