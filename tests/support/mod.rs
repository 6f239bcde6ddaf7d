//! Sources and observers shared by the integration tests.
#![allow(dead_code)]

use std::{
  convert::Infallible,
  marker::PhantomData,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Barrier, Mutex,
  },
  thread::{self, JoinHandle},
};

use rxsync::prelude::*;

/// Emits `per_thread` values from each of `threads` threads released at the
/// same instant, waits for all of them, then completes.
#[derive(Clone, Copy)]
pub struct Burst {
  pub threads: usize,
  pub per_thread: usize,
}

impl ObservableType for Burst {
  type Item = usize;
  type Err = Infallible;
}

impl<O> CoreObservable<O> for Burst
where
  O: Observer<usize, Infallible> + Clone + Send + 'static,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) {
    let Burst { threads, per_thread } = self;
    let start = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
      .map(|t| {
        let mut observer = observer.clone();
        let start = start.clone();
        thread::spawn(move || {
          start.wait();
          for i in 0..per_thread {
            observer.next(t * per_thread + i);
          }
        })
      })
      .collect();
    for handle in handles {
      handle.join().unwrap();
    }
    observer.complete();
  }
}

/// Emits from `threads` threads until the observer reports closed. The
/// emitting threads are parked in `handles` for the test to join.
pub struct Endless {
  pub threads: usize,
  pub handles: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl ObservableType for Endless {
  type Item = usize;
  type Err = Infallible;
}

impl<O> CoreObservable<O> for Endless
where
  O: Observer<usize, Infallible> + Clone + Send + 'static,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) {
    let mut handles = self.handles.lock().unwrap();
    for _ in 0..self.threads {
      let mut observer = observer.clone();
      handles.push(thread::spawn(move || {
        let mut i = 0;
        while !observer.is_closed() {
          observer.next(i);
          i += 1;
        }
      }));
    }
  }
}

/// Replays a script on clones of its observer, ignoring the terminal
/// contract the way a broken upstream would.
pub struct Scripted<Item, Err>(pub Vec<Notification<Item, Err>>);

impl<Item, Err> ObservableType for Scripted<Item, Err> {
  type Item = Item;
  type Err = Err;
}

impl<O, Item, Err> CoreObservable<O> for Scripted<Item, Err>
where
  O: Observer<Item, Err> + Clone,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) {
    for n in self.0 {
      match n {
        Notification::Next(v) => observer.next(v),
        Notification::Error(e) => observer.clone().error(e),
        Notification::Completed => observer.clone().complete(),
      }
    }
  }
}

/// Parks the observer so the test can drive it by hand.
pub struct Handoff<O, Item, Err>(pub Arc<Mutex<Option<O>>>, PhantomData<(Item, Err)>);

impl<O, Item, Err> Handoff<O, Item, Err> {
  pub fn new(slot: Arc<Mutex<Option<O>>>) -> Self { Self(slot, PhantomData) }
}

impl<O, Item, Err> ObservableType for Handoff<O, Item, Err> {
  type Item = Item;
  type Err = Err;
}

impl<O, Item, Err> CoreObservable<O> for Handoff<O, Item, Err> {
  type Unsub = ();

  fn actual_subscribe(self, observer: O) { *self.0.lock().unwrap() = Some(observer); }
}

/// Counts how many threads are inside a handler at once.
#[derive(Clone, Default)]
pub struct OverlapCounter {
  pub inside: Arc<AtomicUsize>,
  pub max_inside: Arc<AtomicUsize>,
  pub received: Arc<AtomicUsize>,
  pub completed: Arc<AtomicUsize>,
}

impl OverlapCounter {
  /// A counter counting into the same `inside` counter as `self`.
  pub fn sibling(&self) -> Self {
    Self {
      inside: self.inside.clone(),
      max_inside: self.max_inside.clone(),
      ..Default::default()
    }
  }

  fn enter(&self) {
    let now = self.inside.fetch_add(1, Ordering::SeqCst) + 1;
    self.max_inside.fetch_max(now, Ordering::SeqCst);
    thread::yield_now();
  }

  fn exit(&self) { self.inside.fetch_sub(1, Ordering::SeqCst); }

  pub fn max_inside(&self) -> usize { self.max_inside.load(Ordering::SeqCst) }

  pub fn received(&self) -> usize { self.received.load(Ordering::SeqCst) }

  pub fn completed(&self) -> usize { self.completed.load(Ordering::SeqCst) }
}

impl Observer<usize, Infallible> for OverlapCounter {
  fn next(&mut self, _: usize) {
    self.enter();
    self.received.fetch_add(1, Ordering::SeqCst);
    self.exit();
  }

  fn error(self, _: Infallible) {}

  fn complete(self) {
    self.enter();
    self.completed.fetch_add(1, Ordering::SeqCst);
    self.exit();
  }

  fn is_closed(&self) -> bool { false }
}

pub type Log<Item, Err> = Arc<Mutex<Vec<Notification<Item, Err>>>>;

/// Records every notification it receives.
pub struct Recorder<Item, Err>(pub Log<Item, Err>);

impl<Item, Err> Observer<Item, Err> for Recorder<Item, Err> {
  fn next(&mut self, value: Item) { self.0.lock().unwrap().push(Notification::Next(value)); }

  fn error(self, err: Err) { self.0.lock().unwrap().push(Notification::Error(err)); }

  fn complete(self) { self.0.lock().unwrap().push(Notification::Completed); }

  fn is_closed(&self) -> bool { false }
}
