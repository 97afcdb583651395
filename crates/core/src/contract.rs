// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input and output contracts
//!
//! `StatusInput` is what an orchestrator hands over on every change;
//! `StatusView` is what a renderer consumes.

use crate::resolver::{resolve, InvalidInput, RenderState};
use serde::{Deserialize, Serialize};

/// One evaluation request from the task orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInput {
    pub title: String,
    pub steps: Vec<String>,
    /// Signed so that negative indices reach validation instead of failing to parse
    pub current_step_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusInput {
    pub fn new(title: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            title: title.into(),
            steps,
            current_step_index: 0,
            error: None,
        }
    }

    /// Move to the given step index
    pub fn at(mut self, index: i64) -> Self {
        self.current_step_index = index;
        self
    }

    /// Mark the task as failed
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Parse from the JSON form of the input contract
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The error message, if present and non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.is_empty())
    }

    /// The step index as a position in `steps`
    pub fn index(&self) -> Result<usize, InvalidInput> {
        if self.steps.is_empty() {
            return Err(InvalidInput::EmptySteps);
        }
        usize::try_from(self.current_step_index)
            .ok()
            .filter(|i| *i < self.steps.len())
            .ok_or(InvalidInput::IndexOutOfRange {
                index: self.current_step_index,
                len: self.steps.len(),
            })
    }

    /// Resolve this input into a view for the rendering layer
    pub fn resolve(&self) -> Result<StatusView, InvalidInput> {
        let index = self.index()?;
        let state = resolve(&self.steps, index, self.error_message())?;
        Ok(StatusView {
            title: self.title.clone(),
            state,
        })
    }
}

/// A resolved state together with the title it was resolved for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub title: String,
    pub state: RenderState,
}

impl StatusView {
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
