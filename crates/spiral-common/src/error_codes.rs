use crate::exit_codes;

pub const INVALID_DIMENSIONS: i32 = -32001;
pub const CAPACITY_EXCEEDED: i32 = -32002;
pub const OUT_OF_BOUNDS: i32 = -32003;

pub const INVALID_INPUT: i32 = -32004;
pub const IO_ERROR: i32 = -32008;

pub const GENERIC_ERROR: i32 = -32000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    InvalidInput,
    Internal,
    External,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Internal => "internal",
            ErrorCategory::External => "external",
        }
    }

    /// UNIX sysexits.h code for this category.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::InvalidInput => exit_codes::USAGE,
            ErrorCategory::NotFound => exit_codes::DATAERR,
            ErrorCategory::Internal => exit_codes::SOFTWARE,
            ErrorCategory::External => exit_codes::IOERR,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Only I/O failures can succeed on retry; grid errors come from caller input.
pub fn is_retryable(code: i32) -> bool {
    matches!(code, IO_ERROR)
}

pub fn category_for_code(code: i32) -> ErrorCategory {
    match code {
        INVALID_DIMENSIONS | CAPACITY_EXCEEDED | INVALID_INPUT => ErrorCategory::InvalidInput,
        OUT_OF_BOUNDS => ErrorCategory::NotFound,
        IO_ERROR => ErrorCategory::External,
        _ => ErrorCategory::Internal,
    }
}
