// Copyright (c) 2025 - Cowboy AI, Inc.
//! Feed Load Lifecycle State Machine
//!
//! # States
//!
//! - Unloaded: nothing fetched yet, or invalidated
//! - Loading: exactly one fetch in flight
//! - Loaded: feed available
//! - Failed: last fetch failed
//!
//! # Inputs
//!
//! - Begin: Unloaded | Failed → Loading
//! - Resolve: Loading → Loaded
//! - Reject: Loading → Failed
//! - Invalidate: Loaded | Failed → Unloaded
//!
//! Every `Loading` is left through exactly one of `Resolve` or `Reject`;
//! nothing leads back into `Loading` while a fetch is in flight.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StateMachine, TransitionError, TransitionResult};

/// Session load status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadStatus {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

impl LoadStatus {
    /// Loaded or Failed
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadStatus::Loaded | LoadStatus::Failed)
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadStatus::Unloaded => "unloaded",
            LoadStatus::Loading => "loading",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Load lifecycle input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadInput {
    Begin,
    Resolve,
    Reject,
    Invalidate,
}

impl StateMachine for LoadStatus {
    type Input = LoadInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use LoadInput::*;
        use LoadStatus::*;

        match (self, input) {
            (Unloaded | Failed, Begin) => Ok((Loading, ())),
            (Loading, Resolve) => Ok((Loaded, ())),
            (Loading, Reject) => Ok((Failed, ())),
            (Loaded | Failed, Invalidate) => Ok((Unloaded, ())),
            (Loading, Begin) => Err(TransitionError::PreconditionFailed(
                "a fetch is already in flight".to_string(),
            )),
            (from, input) => Err(TransitionError::invalid(from, input)),
        }
    }
}
