//! Subscription trait and the handles returned by `subscribe`.

mod boxed;
pub use boxed::*;

/// Subscription returned from `subscribe` to allow unsubscribing.
pub trait Subscription {
  /// Deregister from a stream before it has finished delivering all its
  /// events.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;
}

/// The unit subscription owns no resources and is always closed.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

/// Subscription that runs a teardown closure on unsubscribe.
///
/// ```rust
/// use rxsync::prelude::*;
///
/// let subscription = ClosureSubscription(|| println!("torn down"));
/// subscription.unsubscribe();
/// ```
pub struct ClosureSubscription<F>(pub F);

impl<F: FnOnce()> Subscription for ClosureSubscription<F> {
  #[inline]
  fn unsubscribe(self) { (self.0)() }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

impl<S: Subscription> Subscription for Option<S> {
  fn unsubscribe(self) {
    if let Some(inner) = self {
      inner.unsubscribe();
    }
  }

  fn is_closed(&self) -> bool { self.as_ref().is_none_or(Subscription::is_closed) }
}

/// Provides the `unsubscribe_when_dropped()` method on every subscription.
pub trait SubscriptionExt: Subscription + Sized {
  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self> { SubscriptionGuard::new(self) }
}

impl<S: Subscription> SubscriptionExt for S {}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[must_use]
pub struct SubscriptionGuard<S: Subscription>(Option<S>);

impl<S: Subscription> SubscriptionGuard<S> {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  pub fn new(subscription: S) -> SubscriptionGuard<S> { SubscriptionGuard(Some(subscription)) }
}

impl<S: Subscription> Drop for SubscriptionGuard<S> {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe();
    }
  }
}
