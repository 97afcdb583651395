// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render configuration
//!
//! Glyphs, copy text and bar width for the terminal renderer, loaded from
//! an optional TOML file. Every field has a default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a render config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Glyphs used by the terminal renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Glyphs {
    pub completed: String,
    pub current: String,
    pub pending: String,
    pub connector: String,
    pub connector_active: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub error: String,
    pub success: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            completed: "✓".to_string(),
            current: "◌".to_string(),
            pending: "·".to_string(),
            connector: "│".to_string(),
            connector_active: "┃".to_string(),
            bar_filled: "█".to_string(),
            bar_empty: "░".to_string(),
            error: "!".to_string(),
            success: "✔".to_string(),
        }
    }
}

/// User-facing text for the terminal views
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyText {
    pub error_heading: String,
    pub success_heading: String,
    pub success_detail: String,
}

impl Default for CopyText {
    fn default() -> Self {
        Self {
            error_heading: "Generation failed".to_string(),
            success_heading: "Creation complete!".to_string(),
            success_detail: "Your masterpiece is ready.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Number of cells in the progress bar
    pub bar_width: usize,
    pub glyphs: Glyphs,
    pub copy: CopyText,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bar_width: 30,
            glyphs: Glyphs::default(),
            copy: CopyText::default(),
        }
    }
}

/// Widest progress bar the renderer will draw
pub const MAX_BAR_WIDTH: usize = 200;

/// Parse a render config from TOML content
pub fn parse_config(content: &str) -> Result<RenderConfig, ConfigError> {
    let config: RenderConfig = toml::from_str(content)?;
    if config.bar_width == 0 || config.bar_width > MAX_BAR_WIDTH {
        return Err(ConfigError::Invalid(format!(
            "bar_width must be between 1 and {}, got {}",
            MAX_BAR_WIDTH, config.bar_width
        )));
    }
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "loaded render config");
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
