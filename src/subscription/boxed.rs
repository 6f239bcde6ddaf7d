use super::Subscription;

/// Helper trait for calling unsubscribe on boxed trait objects
///
/// Since `Subscription::unsubscribe(self)` requires `Sized`, we need this
/// workaround trait to enable `Box<dyn Subscription>` to call unsubscribe.
pub trait BoxedSubscriptionInner {
  fn boxed_unsubscribe(self: Box<Self>);
  fn boxed_is_closed(&self) -> bool;
}

impl<T: Subscription> BoxedSubscriptionInner for T {
  #[inline]
  fn boxed_unsubscribe(self: Box<Self>) { (*self).unsubscribe() }

  #[inline]
  fn boxed_is_closed(&self) -> bool { self.is_closed() }
}

/// A type-erased, thread-safe subscription.
///
/// Operators that must store an upstream subscription whose concrete type
/// depends on their own observer type (a cycle the type system cannot
/// express) keep it behind this box instead.
///
/// Subscriptions are control handles, not data views, hence `'static`: they
/// are stored and called at an arbitrary later time, possibly on another
/// thread.
///
/// # Examples
///
/// ```rust
/// use rxsync::prelude::*;
///
/// let subs: Vec<BoxedSubscriptionSend> =
///   vec![BoxedSubscriptionSend::new(()), BoxedSubscriptionSend::new(())];
///
/// for sub in subs {
///   sub.unsubscribe();
/// }
/// ```
pub struct BoxedSubscriptionSend(Box<dyn BoxedSubscriptionInner + Send>);

impl BoxedSubscriptionSend {
  /// Create a new thread-safe boxed subscription from any Send subscription
  /// type.
  #[inline]
  pub fn new(subscription: impl Subscription + Send + 'static) -> Self {
    Self(Box::new(subscription))
  }
}

impl Subscription for BoxedSubscriptionSend {
  #[inline]
  fn unsubscribe(self) { self.0.boxed_unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.boxed_is_closed() }
}
