//! String utility functions shared across spiral crates.

/// Normalize user-supplied text before it is laid into a grid.
///
/// Trims, uppercases and drops every whitespace character, so
/// `" have a nice day "` becomes `"HAVEANICEDAY"`.
pub fn normalize_source(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
