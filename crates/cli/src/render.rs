// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of resolved status views

use crate::config::RenderConfig;
use genstatus_core::{ChecklistRow, ProgressFraction, RenderState, StatusView, StepStatus};

/// Render a view as plain terminal text (no trailing newline)
pub fn render_text(view: &StatusView, config: &RenderConfig) -> String {
    let lines = match &view.state {
        RenderState::Error { message } => vec![
            format!("{} {}", config.glyphs.error, config.copy.error_heading),
            message.clone(),
        ],
        RenderState::Success => vec![
            format!("{} {}", config.glyphs.success, config.copy.success_heading),
            config.copy.success_detail.clone(),
        ],
        RenderState::InProgress { progress, rows } => {
            let mut lines = vec![view.title.clone(), progress_bar(*progress, config)];
            for row in rows {
                lines.extend(row_lines(row, config));
            }
            lines
        }
    };
    lines.join("\n")
}

/// `[████░░░░] 33%`
pub fn progress_bar(progress: ProgressFraction, config: &RenderConfig) -> String {
    let width = config.bar_width;
    let filled = progress.scaled(width).min(width);
    format!(
        "[{}{}] {}%",
        config.glyphs.bar_filled.repeat(filled),
        config.glyphs.bar_empty.repeat(width - filled),
        progress.percent()
    )
}

fn row_lines(row: &ChecklistRow, config: &RenderConfig) -> Vec<String> {
    let glyph = match row.status() {
        StepStatus::Completed => &config.glyphs.completed,
        StepStatus::Current => &config.glyphs.current,
        StepStatus::Pending => &config.glyphs.pending,
    };
    let mut lines = vec![format!("  {} {}", glyph, row.label())];
    if row.has_connector() {
        let connector = if row.connector_active() {
            &config.glyphs.connector_active
        } else {
            &config.glyphs.connector
        };
        lines.push(format!("  {}", connector));
    }
    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
