//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all folder-colors output,
//! ensuring consistent colors, spacing, and message structure across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, bright_black for labels
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Aligned fields**: Label/value rows share one label width

use colored::*;

/// Width of the label column in [`print_field`] rows
pub const FIELD_LABEL_WIDTH: usize = 12;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints one aligned `label  value` row
pub fn print_field(label: &str, value: &str) {
    println!(
        "  {}{}",
        format!("{label:<FIELD_LABEL_WIDTH$}").bright_black(),
        value
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Override saved");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }

    #[test]
    fn test_print_section_header_does_not_panic() {
        print_section_header("Projects/Sub");
    }

    #[test]
    fn test_print_field_does_not_panic() {
        print_field("base", "#3B82F6");
    }
}
