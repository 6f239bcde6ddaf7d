//! The mutual-exclusion primitive that serializes notification delivery.
//!
//! A [`Gate`] is either private to one subscription ([`Gate::Owned`]) or a
//! handle on an externally supplied lock ([`Gate::Shared`]). A
//! [`SharedGate`] may be handed to any number of `synchronize_with` calls;
//! every subscription built from it is then mutually exclusive with every
//! other one, even when their sources and observers are unrelated.
//!
//! Acquisition is scoped: [`Gate::enter`] returns a guard and the lock is
//! released when the guard drops, including while unwinding from a panic
//! raised by a downstream handler. Poisoning left behind by such a panic is
//! cleared on the next acquisition.

use std::{
  fmt::{Debug, Formatter},
  sync::{Arc, Mutex, MutexGuard},
};

/// Proof that the holder currently owns a gate.
pub type GateGuard<'a> = MutexGuard<'a, ()>;

/// Externally owned gate, cheap to clone and share across subscriptions.
///
/// ```rust
/// use rxsync::prelude::*;
///
/// let gate = SharedGate::new();
/// let twin = gate.clone();
/// assert!(gate.ptr_eq(&twin));
/// ```
#[derive(Clone, Default)]
pub struct SharedGate(Arc<Mutex<()>>);

impl SharedGate {
  pub fn new() -> Self { Self::default() }

  /// Block until the gate is held by the current thread.
  #[inline]
  pub fn enter(&self) -> GateGuard<'_> { lock(&self.0) }

  /// Returns `true` if both handles refer to the same lock.
  #[inline]
  pub fn ptr_eq(&self, other: &SharedGate) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl Debug for SharedGate {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SharedGate").field("handles", &Arc::strong_count(&self.0)).finish()
  }
}

/// The gate one forwarding sink serializes through.
pub enum Gate {
  /// Created for, and dropped with, a single subscription.
  Owned(Mutex<()>),
  /// Supplied from outside; the subscription never decides its lifetime.
  Shared(SharedGate),
}

impl Gate {
  /// A fresh private gate.
  pub fn owned() -> Self { Gate::Owned(Mutex::new(())) }

  /// Shares `gate` when given one, otherwise creates a private gate.
  pub fn from_option(gate: Option<SharedGate>) -> Self {
    gate.map_or_else(Gate::owned, Gate::Shared)
  }

  #[inline]
  pub fn enter(&self) -> GateGuard<'_> {
    match self {
      Gate::Owned(mutex) => lock(mutex),
      Gate::Shared(shared) => shared.enter(),
    }
  }

  #[inline]
  pub fn is_shared(&self) -> bool { matches!(self, Gate::Shared(_)) }
}

impl Debug for Gate {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Gate::Owned(_) => f.write_str("Gate::Owned"),
      Gate::Shared(shared) => f.debug_tuple("Gate::Shared").field(shared).finish(),
    }
  }
}

/// Lock `mutex`, recovering from poisoning.
///
/// A poisoned lock only means a downstream handler panicked while holding
/// it; the protected data carries no invariant that panic could break.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(|poisoned| {
    mutex.clear_poison();
    poisoned.into_inner()
  })
}
