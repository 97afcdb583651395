// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress transition tracker
//!
//! The resolver is stateless; the state machine lives in the sequence of
//! inputs an orchestrator feeds over time. `ProgressTracker` checks that
//! sequence: indices only move forward within a run, the step list stays
//! fixed, and terminal states only accept a re-render or a retry reset.

use crate::contract::{StatusInput, StatusView};
use crate::resolver::{InvalidInput, RenderState};
use thiserror::Error;

/// Rejected input sequences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
    #[error("step list changed while a run was in progress")]
    StepsChanged,
    #[error("step index regressed from {from} to {to}")]
    IndexRegressed { from: usize, to: usize },
    #[error("input after terminal {state} state must be a re-render or a retry reset")]
    AfterTerminal { state: &'static str },
}

/// Where the observed run currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerPhase {
    /// Nothing observed yet
    Idle,
    /// A run is in progress at `index`
    Running { steps: Vec<String>, index: usize },
    /// The run ended with an error
    Failed {
        steps: Vec<String>,
        index: usize,
        message: String,
    },
    /// The run finished
    Succeeded { steps: Vec<String> },
}

impl TrackerPhase {
    pub fn name(&self) -> &'static str {
        match self {
            TrackerPhase::Idle => "idle",
            TrackerPhase::Running { .. } => "running",
            TrackerPhase::Failed { .. } => "failed",
            TrackerPhase::Succeeded { .. } => "succeeded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TrackerPhase::Failed { .. } | TrackerPhase::Succeeded { .. }
        )
    }

    fn from_resolved(input: &StatusInput, index: usize, state: &RenderState) -> Self {
        let steps = input.steps.clone();
        match state {
            RenderState::Error { message } => TrackerPhase::Failed {
                steps,
                index,
                message: message.clone(),
            },
            RenderState::Success => TrackerPhase::Succeeded { steps },
            RenderState::InProgress { .. } => TrackerPhase::Running { steps, index },
        }
    }
}

/// Validates successive inputs from one orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    pub phase: TrackerPhase,
    /// Number of accepted inputs
    pub frames: usize,
    /// Number of retry resets after a terminal state
    pub retries: usize,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            phase: TrackerPhase::Idle,
            frames: 0,
            retries: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Pure transition function - returns the next tracker and the resolved view
    pub fn observe(
        &self,
        input: &StatusInput,
    ) -> Result<(ProgressTracker, StatusView), TransitionError> {
        self.check(input).inspect_err(|e| {
            tracing::warn!(
                phase = self.phase.name(),
                frame = self.frames,
                error = %e,
                "rejected progress input"
            );
        })
    }

    fn check(&self, input: &StatusInput) -> Result<(ProgressTracker, StatusView), TransitionError> {
        let view = input.resolve()?;
        let index = input.index()?;
        let next = TrackerPhase::from_resolved(input, index, &view.state);
        let mut retries = self.retries;

        match &self.phase {
            TrackerPhase::Idle => {}

            TrackerPhase::Running {
                steps,
                index: previous,
            } => {
                if *steps != input.steps {
                    return Err(TransitionError::StepsChanged);
                }
                if index < *previous {
                    return Err(TransitionError::IndexRegressed {
                        from: *previous,
                        to: index,
                    });
                }
            }

            // Terminal: absorbing except for an identical re-render or a reset
            TrackerPhase::Failed { .. } | TrackerPhase::Succeeded { .. } => {
                if next != self.phase {
                    let is_reset = input.error_message().is_none() && index == 0;
                    if !is_reset {
                        return Err(TransitionError::AfterTerminal {
                            state: self.phase.name(),
                        });
                    }
                    retries += 1;
                    tracing::info!(retries, "progress reset after terminal state");
                }
            }
        }

        tracing::debug!(
            from = self.phase.name(),
            to = next.name(),
            index,
            state = view.state.name(),
            "accepted progress input"
        );

        let tracker = ProgressTracker {
            phase: next,
            frames: self.frames + 1,
            retries,
        };
        Ok((tracker, view))
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
