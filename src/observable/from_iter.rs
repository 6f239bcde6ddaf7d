use std::convert::Infallible;

use crate::{
  observable::{CoreObservable, ObservableType},
  observer::Observer,
};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error.
///
/// # Examples
///
/// ```
/// use rxsync::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3]).subscribe(|v| println!("{},", v));
/// ```
pub fn from_iter<Iter>(iter: Iter) -> FromIter<Iter>
where
  Iter: IntoIterator,
{
  FromIter(iter)
}

#[derive(Clone)]
pub struct FromIter<Iter>(Iter);

impl<Iter: IntoIterator> ObservableType for FromIter<Iter> {
  type Item = Iter::Item;
  type Err = Infallible;
}

impl<O, Iter> CoreObservable<O> for FromIter<Iter>
where
  Iter: IntoIterator,
  O: Observer<Iter::Item, Infallible>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    for v in self.0 {
      if observer.is_closed() {
        return;
      }
      observer.next(v);
    }
    if !observer.is_closed() {
      observer.complete();
    }
  }
}
