// Copyright (c) 2025 - Cowboy AI, Inc.
//! Signal Trait - Base abstraction for time-varying values

use std::fmt::Debug;

/// Base trait for time-varying values
///
/// A `Signal<T>` represents a value of type `T` that changes over time.
/// Signals are functors, meaning they support the `map` operation.
pub trait Signal<T: Send + Sync>: Clone + Debug + Send + Sync {
    /// The type of signal produced by map
    type Mapped<U: Clone + Debug + Send + Sync + 'static>: Signal<U>;

    /// Apply a function to the signal's values
    ///
    /// Must satisfy the Functor laws:
    /// 1. `signal.map(id) == signal`
    /// 2. `signal.map(f).map(g) == signal.map(|x| g(f(x)))`
    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Clone + Debug + Send + Sync + 'static;
}

/// Signals that can be sampled at any time
pub trait Samplable<T: Send + Sync>: Signal<T> {
    /// Get the current value of the signal
    fn sample(&self) -> T;
}
