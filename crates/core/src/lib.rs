// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! genstatus-core: status derivation for multi-step generation tasks
//!
//! This crate provides:
//! - A pure resolver from (steps, current step index, error) to a render state
//! - The input and output contracts exchanged with orchestrators and renderers
//! - A transition tracker that validates a sequence of inputs over time
//!
//! Nothing here knows how a state is drawn.

mod contract;
mod resolver;
mod step;
mod tracker;

pub use contract::{StatusInput, StatusView};
pub use resolver::{resolve, InvalidInput, RenderState};
pub use step::{ChecklistRow, ProgressFraction, StepStatus};
pub use tracker::{ProgressTracker, TrackerPhase, TransitionError};
