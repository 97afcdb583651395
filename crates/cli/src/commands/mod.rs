// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod render;
pub mod replay;

use crate::error::CliError;
use std::io::Read;
use std::path::Path;

/// Read an input source; `-` means stdin
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::unreadable_input(path, e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| CliError::unreadable_input(path, e))
}
