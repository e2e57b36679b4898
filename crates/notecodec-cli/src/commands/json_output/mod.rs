//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! every command.

mod convert;
mod records;

pub use convert::note_error_to_json;
pub use records::{
    NameOutput, NameRecord, ParseOutput, ParseRecord, PitchClassRecord, TableOutput,
};

use serde::{Deserialize, Serialize};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "N001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The note name that caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            input: None,
            suggestion: None,
        }
    }

    /// Sets the offending input for this error.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
