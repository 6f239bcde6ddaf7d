//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

pub use crate::{
  gate::{Gate, SharedGate},
  notification::Notification,
  observable::{self, CoreObservable, Observable, ObservableType},
  observer::{Emitter, FnMutObserver, Observer},
  ops::synchronize::{Synchronize, SynchronizeObserver, SynchronizeSubscription},
  subscription::*,
};
