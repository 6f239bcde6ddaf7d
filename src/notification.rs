use crate::observer::Observer;

/// A single event of an observable sequence.
///
/// A well-behaved sequence is `Next*` followed by at most one terminal
/// notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<Item, Err> {
  Next(Item),
  Error(Err),
  Completed,
}

impl<Item, Err> Notification<Item, Err> {
  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Notification::Next(_)) }

  /// Replay this notification into `observer`.
  ///
  /// Terminal notifications consume the observer, so it is returned only
  /// when it can still receive events.
  pub fn deliver<O>(self, mut observer: O) -> Option<O>
  where
    O: Observer<Item, Err>,
  {
    match self {
      Notification::Next(value) => {
        observer.next(value);
        Some(observer)
      }
      Notification::Error(err) => {
        observer.error(err);
        None
      }
      Notification::Completed => {
        observer.complete();
        None
      }
    }
  }
}
