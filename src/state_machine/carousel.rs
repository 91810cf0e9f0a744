// Copyright (c) 2025 - Cowboy AI, Inc.
//! Carousel Display State Machine
//!
//! A **Mealy machine** over the sorted focus list: the output tells the
//! owning component whether the advance timer must be re-armed or
//! cancelled.
//!
//! # States
//!
//! - Empty: no items (feed not loaded, failed, or empty focus)
//! - Displaying { index, len }: `index < len` always holds
//!
//! # Inputs
//!
//! - Advance: timer fired, move to the next item, wrapping
//! - Select(j): user picked item `j`
//! - Refresh { len }: the sorted list was rebuilt with `len` items

use super::{StateInvariant, StateMachine, TransitionError, TransitionResult};

/// Carousel display state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselState {
    #[default]
    Empty,
    Displaying { index: usize, len: usize },
}

impl CarouselState {
    /// Initial state for a list of `len` items
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            CarouselState::Empty
        } else {
            CarouselState::Displaying { index: 0, len }
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            CarouselState::Empty => None,
            CarouselState::Displaying { index, .. } => Some(*index),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CarouselState::Empty => 0,
            CarouselState::Displaying { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CarouselState::Empty)
    }
}

/// Carousel input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    Advance,
    Select(usize),
    Refresh { len: usize },
}

/// What the owner must do with its advance timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselOutput {
    /// Discard any pending timer and arm a fresh one
    Rearm,
    /// Discard any pending timer
    Cancel,
}

impl StateMachine for CarouselState {
    type Input = CarouselInput;
    type Output = CarouselOutput;

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use CarouselInput::*;
        use CarouselState::*;

        match (*self, *input) {
            (_, Refresh { len: 0 }) => Ok((Empty, CarouselOutput::Cancel)),
            (Empty, Refresh { len }) => Ok((Displaying { index: 0, len }, CarouselOutput::Rearm)),
            (Displaying { index, .. }, Refresh { len }) => {
                let index = if index < len { index } else { 0 };
                Ok((Displaying { index, len }, CarouselOutput::Rearm))
            }
            (Displaying { index, len }, Advance) => Ok((
                Displaying {
                    index: (index + 1) % len,
                    len,
                },
                CarouselOutput::Rearm,
            )),
            (Displaying { len, .. }, Select(j)) if j < len => {
                Ok((Displaying { index: j, len }, CarouselOutput::Rearm))
            }
            (Displaying { len, .. }, Select(j)) => Err(TransitionError::PreconditionFailed(
                format!("index {} out of range for {} items", j, len),
            )),
            (Empty, input) => Err(TransitionError::invalid(Empty, input)),
        }
    }
}

impl StateInvariant for CarouselState {
    fn check_invariants(&self) -> Result<(), String> {
        match self {
            CarouselState::Displaying { len: 0, .. } => {
                Err("displaying state with zero items".to_string())
            }
            CarouselState::Displaying { index, len } if index >= len => {
                Err(format!("index {} out of range for {} items", index, len))
            }
            _ => Ok(()),
        }
    }
}
