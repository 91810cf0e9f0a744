// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! Both stateful pieces of the showcase are modelled as pure state machines.
//! Transitions are deterministic functions; the components owning them are
//! the only writers and apply side effects (fetching, arming timers) around
//! the returned state.
//!
//! # Machines
//!
//! ```text
//! LoadStatus:     Unloaded ─Begin→ Loading ─Resolve→ Loaded
//!                                   └──────Reject──→ Failed
//!                 Loaded | Failed ─Invalidate→ Unloaded
//!                 Failed ─Begin→ Loading            (explicit reload)
//!
//! CarouselState:  Empty ─Refresh{len>0}→ Displaying(0)
//!                 Displaying(i) ─Advance→ Displaying((i+1) mod len)
//!                 Displaying(i) ─Select(j)→ Displaying(j)
//!                 Displaying(i) ─Refresh{len}→ Displaying(i) | Displaying(0) | Empty
//! ```
//!
//! # Example
//!
//! ```rust
//! use event_showcase::state_machine::{CarouselInput, CarouselState, StateMachine};
//!
//! let state = CarouselState::Displaying { index: 1, len: 2 };
//! let (next, _) = state.transition(&CarouselInput::Advance).unwrap();
//! assert_eq!(next, CarouselState::Displaying { index: 0, len: 2 });
//! ```

pub mod carousel;
pub mod load_status;

pub use carousel::{CarouselInput, CarouselOutput, CarouselState};
pub use load_status::{LoadInput, LoadStatus};

/// Result of a state transition
pub type TransitionResult<S> = Result<S, TransitionError>;

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Transition from current state with this input is not allowed
    #[error("Invalid transition from {from} on {input}")]
    InvalidTransition { from: String, input: String },

    /// Precondition not met for transition
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

impl TransitionError {
    pub(crate) fn invalid(from: impl std::fmt::Debug, input: impl std::fmt::Debug) -> Self {
        TransitionError::InvalidTransition {
            from: format!("{:?}", from),
            input: format!("{:?}", input),
        }
    }
}

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Attempt to transition to a new state given an input
    ///
    /// # Returns
    /// - Ok((new_state, output)) if transition is valid
    /// - Err(TransitionError) if transition is invalid
    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)>;

    /// Check if a transition is valid without performing it
    fn can_transition(&self, input: &Self::Input) -> bool {
        self.transition(input).is_ok()
    }
}

/// Trait for states with invariants
pub trait StateInvariant {
    /// Check if state invariants hold
    fn check_invariants(&self) -> Result<(), String>;
}

/// Transition metadata
///
/// Records information about a state transition for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, I> {
    /// State before transition
    pub from: S,

    /// State after transition
    pub to: S,

    /// Input that triggered transition
    pub input: I,

    /// Timestamp of transition
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<S, I> Transition<S, I> {
    /// Create a new transition record
    pub fn new(from: S, to: S, input: I, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            from,
            to,
            input,
            timestamp,
        }
    }
}

/// State machine with history
///
/// Wraps a state machine and tracks transition history.
#[derive(Debug, Clone)]
pub struct StateMachineWithHistory<FSM: StateMachine> {
    current: FSM,
    history: Vec<Transition<FSM, FSM::Input>>,
}

impl<FSM: StateMachine> StateMachineWithHistory<FSM> {
    /// Create a new state machine with history tracking
    pub fn new(initial: FSM) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    /// Transition with history recording
    ///
    /// A rejected input leaves both the state and the history untouched.
    pub fn transition_with_history(
        &mut self,
        input: FSM::Input,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) -> TransitionResult<FSM::Output>
    where
        FSM::Input: Clone,
    {
        let from = self.current.clone();
        let (to, output) = self.current.transition(&input)?;

        self.history
            .push(Transition::new(from, to.clone(), input, timestamp));

        self.current = to;
        Ok(output)
    }

    /// Get transition history
    pub fn get_history(&self) -> &[Transition<FSM, FSM::Input>] {
        &self.history
    }

    /// Get current state
    pub fn current_state(&self) -> &FSM {
        &self.current
    }
}
