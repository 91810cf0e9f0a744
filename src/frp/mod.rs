// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reactive Read-Only Views
//!
//! The store and the carousel both publish their state through channels.
//! Consumers that only need "the value right now" receive a [`Behavior`]
//! instead: a continuous-time signal that can be sampled at any moment and
//! mapped into derived views without touching the owner.
//!
//! ```text
//! Time:  ────────────────────────────→
//! Value:  ≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈
//!          ↑ sample()    ↑ sample()
//! ```
//!
//! # Functor Laws
//!
//! ```text
//! map id = id
//! map (g . f) = map g . map f
//! ```
//!
//! # Example
//!
//! ```rust
//! use event_showcase::frp::{Behavior, Samplable, Signal};
//!
//! let count = Behavior::constant(3usize);
//! let label = count.map(|n| format!("{n} items"));
//! assert_eq!(label.sample(), "3 items");
//! ```

pub mod behavior;
pub mod signal;

pub use behavior::Behavior;
pub use signal::{Samplable, Signal};
