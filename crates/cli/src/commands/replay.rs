// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `genstatus replay` - Validate and draw a recorded sequence of inputs
//!
//! The file holds one JSON status input per line, in the order the
//! orchestrator produced them. Blank lines are skipped.

use super::read_source;
use crate::config::RenderConfig;
use crate::error::CliError;
use crate::output::{format_frame, OutputFormat};
use anyhow::Result;
use clap::Args;
use genstatus_core::{ProgressTracker, StatusInput};
use std::path::PathBuf;

#[derive(Args)]
pub struct ReplayArgs {
    /// Newline-delimited JSON inputs (`-` for stdin)
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn replay(args: ReplayArgs, config: &RenderConfig) -> Result<()> {
    let content = read_source(&args.path)?;
    let mut tracker = ProgressTracker::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let input =
            StatusInput::from_json(line).map_err(|e| CliError::malformed_line(line_no, e))?;
        let (next, view) = tracker
            .observe(&input)
            .map_err(|e| CliError::transition_rejected(line_no, e))?;

        if args.format == OutputFormat::Text && tracker.frames > 0 {
            println!();
        }
        println!("{}", format_frame(&view, args.format, config)?);
        tracker = next;
    }

    tracing::info!(
        frames = tracker.frames,
        retries = tracker.retries,
        phase = tracker.phase.name(),
        "replay finished"
    );
    Ok(())
}
