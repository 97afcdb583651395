// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use crate::config::RenderConfig;
use crate::render::render_text;
use clap::ValueEnum;
use genstatus_core::StatusView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Format a single view (pretty JSON)
pub fn format_view(
    view: &StatusView,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(view, config)),
        OutputFormat::Json => serde_json::to_string_pretty(view),
    }
}

/// Format one frame of a replay (one JSON object per line)
pub fn format_frame(
    view: &StatusView,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(view, config)),
        OutputFormat::Json => serde_json::to_string(view),
    }
}
