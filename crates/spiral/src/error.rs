//! CLI errors with structured context.
//!
//! Each error maps to a semantic code and category, which in turn picks a
//! sysexits.h-compatible exit code.

use std::io;

use serde_json::{Value, json};
use spiral_common::error_codes::{self, ErrorCategory};
use spiral_core::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Nothing to encode: input is empty after normalization")]
    EmptyInput,

    #[error("Input character {index} is {placeholder:?}, the empty-cell placeholder")]
    PlaceholderInSource { placeholder: char, index: usize },

    #[error("Round trip failed: encoded {expected:?} but decoded {decoded:?}")]
    RoundTrip { expected: String, decoded: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub fn code(&self) -> i32 {
        match self {
            CliError::Grid(e) => e.code(),
            CliError::EmptyInput | CliError::PlaceholderInSource { .. } => {
                error_codes::INVALID_INPUT
            }
            CliError::RoundTrip { .. } => error_codes::GENERIC_ERROR,
            CliError::Io(_) => error_codes::IO_ERROR,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        error_codes::category_for_code(self.code())
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Grid(e) => Some(e.suggestion()),
            CliError::EmptyInput => {
                Some("Pass at least one non-whitespace character, or use --raw.".to_string())
            }
            CliError::PlaceholderInSource { .. } => Some(
                "Set SPIRAL_PLACEHOLDER to a character the text does not use.".to_string(),
            ),
            CliError::RoundTrip { .. } => None,
            CliError::Io(_) => Some("Check that stdout is writable.".to_string()),
        }
    }

    pub fn is_retryable(&self) -> bool {
        error_codes::is_retryable(self.code())
    }

    pub fn context(&self) -> Value {
        match self {
            CliError::Grid(e) => e.context(),
            CliError::EmptyInput => json!({ "input_len": 0 }),
            CliError::PlaceholderInSource { placeholder, index } => json!({
                "placeholder": placeholder.to_string(),
                "index": index
            }),
            CliError::RoundTrip { expected, decoded } => json!({
                "expected": expected,
                "decoded": decoded
            }),
            CliError::Io(e) => json!({ "reason": e.to_string() }),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut error = json!({
            "code": self.code(),
            "category": self.category().as_str(),
            "message": self.to_string(),
            "retryable": self.is_retryable(),
            "context": self.context()
        });
        if let Some(suggestion) = self.suggestion() {
            error["suggestion"] = json!(suggestion);
        }
        json!({
            "success": false,
            "error": error
        })
    }
}
