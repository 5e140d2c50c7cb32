//! Common utilities shared across spiral crates.
//!
//! Provides error and exit codes, color handling, input normalization and the
//! grid dimension convention used by callers of the core.

#![deny(clippy::all)]

mod color;
mod dimensions;
pub mod error_codes;
pub mod exit_codes;
mod string_utils;

pub use color::Colors;
pub use color::init as color_init;
pub use color::is_disabled as color_is_disabled;
pub use dimensions::derive_dimensions;
pub use string_utils::normalize_source;
