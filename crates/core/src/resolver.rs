// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status resolver
//!
//! Maps a step list, the index of the active step and an optional error
//! to exactly one of three render states. The resolver keeps no state
//! between calls.

use crate::step::{ChecklistRow, ProgressFraction, StepStatus};
use serde::Serialize;
use thiserror::Error;

/// Caller bugs detected before resolving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("step list is empty")]
    EmptySteps,
    #[error("current step index {index} is out of range for {len} steps")]
    IndexOutOfRange { index: i64, len: usize },
}

/// What the rendering layer should draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderState {
    /// The task terminated abnormally
    Error { message: String },
    /// Every step finished without error
    Success,
    /// Work is ongoing
    InProgress {
        progress: ProgressFraction,
        rows: Vec<ChecklistRow>,
    },
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RenderState::InProgress { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Error { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RenderState::Success)
    }

    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            RenderState::Error { .. } => "error",
            RenderState::Success => "success",
            RenderState::InProgress { .. } => "in_progress",
        }
    }

    pub fn progress(&self) -> Option<ProgressFraction> {
        match self {
            RenderState::InProgress { progress, .. } => Some(*progress),
            _ => None,
        }
    }

    /// Per-row statuses, empty for terminal states
    pub fn per_step(&self) -> Vec<StepStatus> {
        match self {
            RenderState::InProgress { rows, .. } => rows.iter().map(|r| r.status()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn rows(&self) -> &[ChecklistRow] {
        match self {
            RenderState::InProgress { rows, .. } => rows,
            _ => &[],
        }
    }
}

/// Resolve the render state for one evaluation.
///
/// Rules, in priority order:
/// 1. a non-empty `error` yields [`RenderState::Error`]
/// 2. an index at (or past) the last step yields [`RenderState::Success`]
/// 3. anything else is [`RenderState::InProgress`]
///
/// The last step is the "done" label and never becomes a checklist row.
/// Empty step lists and out-of-range indices are rejected rather than
/// clamped.
pub fn resolve<S: AsRef<str>>(
    steps: &[S],
    current_step_index: usize,
    error: Option<&str>,
) -> Result<RenderState, InvalidInput> {
    let len = steps.len();
    if len == 0 {
        return Err(InvalidInput::EmptySteps);
    }
    if current_step_index >= len {
        return Err(InvalidInput::IndexOutOfRange {
            index: i64::try_from(current_step_index).unwrap_or(i64::MAX),
            len,
        });
    }

    if let Some(message) = error.filter(|m| !m.is_empty()) {
        return Ok(RenderState::Error {
            message: message.to_string(),
        });
    }

    let last = len - 1;
    if current_step_index >= last {
        return Ok(RenderState::Success);
    }

    let progress = ProgressFraction::new(current_step_index, len).ok_or(
        InvalidInput::IndexOutOfRange {
            index: i64::try_from(current_step_index).unwrap_or(i64::MAX),
            len,
        },
    )?;

    // Rows are steps[0..last]; a connector joins each row to the next one.
    let rows = steps[..last]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            ChecklistRow::new(
                label.as_ref(),
                StepStatus::for_row(i, current_step_index),
                i + 1 < last,
            )
        })
        .collect();

    Ok(RenderState::InProgress { progress, rows })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
