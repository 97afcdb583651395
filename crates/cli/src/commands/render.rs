// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `genstatus render` - Resolve and draw a single status input

use super::read_source;
use crate::config::RenderConfig;
use crate::error::CliError;
use crate::output::{format_view, OutputFormat};
use anyhow::Result;
use clap::Args;
use genstatus_core::StatusInput;
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Title shown above the checklist
    #[arg(long, default_value = "Generating")]
    pub title: String,
    /// Step label, repeated in order (the last one is the "done" label)
    #[arg(long = "step", value_name = "LABEL")]
    pub steps: Vec<String>,
    /// Index of the step currently being performed
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub index: i64,
    /// Report the task as failed with this message
    #[arg(long)]
    pub error: Option<String>,
    /// Read a JSON status input from a file (`-` for stdin)
    #[arg(long, conflicts_with_all = ["title", "steps", "index", "error"])]
    pub input: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RenderArgs {
    fn status_input(&self) -> Result<StatusInput, CliError> {
        if let Some(path) = &self.input {
            let content = read_source(path)?;
            return StatusInput::from_json(&content)
                .map_err(|e| CliError::malformed_input(path, e));
        }
        let mut input = StatusInput::new(self.title.clone(), self.steps.clone()).at(self.index);
        if let Some(error) = &self.error {
            input = input.with_error(error.clone());
        }
        Ok(input)
    }
}

pub fn render(args: RenderArgs, config: &RenderConfig) -> Result<()> {
    let input = args.status_input()?;
    let view = input.resolve().map_err(CliError::invalid_input)?;
    tracing::debug!(state = view.state.name(), "resolved status");

    println!("{}", format_view(&view, args.format, config)?);
    Ok(())
}
