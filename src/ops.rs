//! Operators.
//!
//! Each operator is a struct wrapping its source, implementing
//! `CoreObservable` by wrapping the downstream observer before subscribing
//! upstream.

pub mod synchronize;
