// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Every failure the CLI reports carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use genstatus_core::{InvalidInput, TransitionError};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Hint shared by every report of an unparsable status input.
const INPUT_SHAPE_HINT: &str =
    "A status input is a JSON object with title, steps and currentStepIndex (error is optional)";

impl CliError {
    /// Create an error with only a message; add context and suggestions with the builders.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add a line explaining why the input might have been rejected.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a numbered suggestion shown under `suggestions:`.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Keep the underlying error so it stays reachable through `source()`.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures the commands report.
impl CliError {
    /// Input that violates the resolver's preconditions.
    pub fn invalid_input(err: InvalidInput) -> Self {
        let error = CliError::new(format!("invalid status input: {}", err));
        let error = match &err {
            InvalidInput::EmptySteps => error
                .with_context("At least one step is required; the last one is the \"done\" label")
                .with_suggestion("Pass steps with: genstatus render --step Draft --step Done!"),
            InvalidInput::IndexOutOfRange { len, .. } => error
                .with_context(format!(
                    "Valid indices are 0 to {} for {} steps",
                    len.saturating_sub(1),
                    len
                ))
                .with_context("The orchestrator driving the index may have a bug")
                .with_suggestion("Check the currentStepIndex sent by the orchestrator"),
        };
        error.with_source(err)
    }

    /// A replay frame rejected by the transition tracker.
    pub fn transition_rejected(line: usize, err: TransitionError) -> Self {
        let error = CliError::new(format!("line {}: {}", line, err));
        let error = match &err {
            TransitionError::Invalid(_) => error,
            TransitionError::StepsChanged => {
                error.with_context("The step list must stay fixed for the whole run")
            }
            TransitionError::IndexRegressed { .. } => error
                .with_context("Completed steps must stay completed")
                .with_suggestion("Only move currentStepIndex forward"),
            TransitionError::AfterTerminal { .. } => error
                .with_context("Error and success are terminal states")
                .with_suggestion("Retry by clearing the error and restarting at index 0"),
        };
        error.with_source(err)
    }

    /// A replay line that is not a valid input document.
    pub fn malformed_line(line: usize, err: serde_json::Error) -> Self {
        CliError::new(format!("line {}: malformed status input", line))
            .with_context(err.to_string())
            .with_suggestion(format!("Put one input per line. {}", INPUT_SHAPE_HINT))
            .with_source(err)
    }

    /// An `--input` document that is not a valid status input.
    pub fn malformed_input(path: &Path, err: serde_json::Error) -> Self {
        CliError::new(format!("malformed status input in {}", path.display()))
            .with_context(err.to_string())
            .with_suggestion(INPUT_SHAPE_HINT)
            .with_source(err)
    }

    /// An input file that could not be read or parsed.
    pub fn unreadable_input(path: &Path, err: std::io::Error) -> Self {
        CliError::new(format!("cannot read status input from {}", path.display()))
            .with_context(err.to_string())
            .with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::new("Something went wrong")
            .with_context("First context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = CliError::invalid_input(InvalidInput::IndexOutOfRange { index: 5, len: 3 });
        let output = format!("{}", err);
        assert!(output.contains("current step index 5 is out of range for 3 steps"));
        assert!(output.contains("Valid indices are 0 to 2"));
    }

    #[test]
    fn test_malformed_input_names_file_and_shape() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CliError::malformed_input(Path::new("status.json"), json_err);
        let output = format!("{}", err);
        assert!(output.contains("malformed status input in status.json"));
        assert!(!output.contains("cannot read"));
        assert!(output.contains("title, steps and currentStepIndex"));
    }

    #[test]
    fn test_transition_error_names_line() {
        let err = CliError::transition_rejected(
            4,
            TransitionError::IndexRegressed { from: 2, to: 1 },
        );
        let output = format!("{}", err);
        assert!(output.contains("line 4: step index regressed from 2 to 1"));
        assert!(output.contains("Only move currentStepIndex forward"));
    }
}
