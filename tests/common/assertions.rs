//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating folder-colors command output, error messages,
//! and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the standard error prefix
pub fn has_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}

/// Creates a predicate that checks for missing folder errors
pub fn folder_not_found(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Folder does not exist: {path}"))
}

/// Creates a predicate that checks for invalid color errors
pub fn invalid_hex_color(input: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Invalid hex color: '{input}'"))
}

/// Creates a predicate that checks for the section header of a folder
pub fn has_header(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{path}:"))
}

/// Creates a predicate that checks for a label/value row whose value contains `value`
pub fn has_field(label: &str, value: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"(?m)^  {label}\s+.*{}", regex_escape(value)))
        .expect("valid field pattern")
}

/// Creates a predicate that checks for numbered palette entries
pub fn has_palette_index(index: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}

fn regex_escape(value: &str) -> String {
    value
        .chars()
        .flat_map(|c| match c {
            '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$' | '\\' => {
                vec!['\\', c]
            }
            _ => vec![c],
        })
        .collect()
}
