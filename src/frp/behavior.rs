// Copyright (c) 2025 - Cowboy AI, Inc.
//! Behavior - Continuous-Time Signals
//!
//! A `Behavior<T>` always has a value. Sampling reads whatever the owner
//! last published; nothing is cached inside the behavior itself.
//!
//! ```text
//! Behavior<T> ≅ Time → T
//! ```

use super::signal::{Samplable, Signal};
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::watch;

/// Continuous-time signal that always has a value
///
/// Implemented as `Arc<dyn Fn() -> T>` so clones share the sampler.
#[derive(Clone)]
pub struct Behavior<T> {
    sampler: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: Debug> Debug for Behavior<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Behavior<{}>", std::any::type_name::<T>())
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Behavior<T> {
    /// Create a constant behavior with a fixed value
    pub fn constant(value: T) -> Self {
        Self {
            sampler: Arc::new(move || value.clone()),
        }
    }

    /// Track the latest value published on a watch channel
    ///
    /// The behavior keeps its own receiver, so it never marks the value as
    /// seen for other subscribers.
    pub fn from_watch(receiver: watch::Receiver<T>) -> Self {
        Self {
            sampler: Arc::new(move || receiver.borrow().clone()),
        }
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Signal<T> for Behavior<T> {
    type Mapped<U: Clone + Debug + Send + Sync + 'static> = Behavior<U>;

    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Clone + Debug + Send + Sync + 'static,
    {
        let sampler = self.sampler;
        Behavior {
            sampler: Arc::new(move || f(sampler())),
        }
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Samplable<T> for Behavior<T> {
    fn sample(&self) -> T {
        (self.sampler)()
    }
}
