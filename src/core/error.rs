//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`FolderColorsError`] which covers every failure that can occur
//! at the edges of folder-colors: parsing user input, talking to the file system and
//! loading or saving the settings blob. It uses `thiserror` for ergonomic error
//! definitions and includes named constructors for the common cases.
//!
//! The color resolution engine never produces these errors. Resolution always has a
//! fallback value ("no color"), so errors only surface at the boundaries.
//!
//! # Public API
//! - [`FolderColorsError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, FolderColorsError>`
//!
//! # Error Categories
//! - **Input validation**: Invalid hex colors, empty folder paths, empty override updates
//! - **Folder tree**: Missing vault directory, folder not present in the vault
//! - **Settings**: Directory lookup, read, parse, serialize and write failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for folder-colors
#[derive(Error, Debug)]
pub enum FolderColorsError {
    // Input validation errors
    #[error("Invalid hex color: '{input}'. Use format like #3B82F6")]
    InvalidHexColor { input: String },

    #[error("Invalid folder path: '{input}'")]
    InvalidFolderPath { input: String },

    #[error("Nothing to update for '{path}'. Pass at least one color, icon or flag")]
    EmptyOverrideUpdate { path: String },

    // Folder tree errors
    #[error("Folder does not exist: {path}")]
    FolderNotFound { path: String },

    #[error("Vault directory does not exist: {path}")]
    VaultNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Settings errors
    #[error("Could not find settings directory")]
    SettingsDirectoryNotFound,

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings: {source}")]
    SettingsSerializationFailed { source: serde_json::Error },

    #[error("Failed to write settings file '{path}': {source}")]
    SettingsWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using FolderColorsError
pub type Result<T> = std::result::Result<T, FolderColorsError>;

impl FolderColorsError {
    /// Create an invalid hex color error
    pub fn invalid_hex_color(input: impl Into<String>) -> Self {
        Self::InvalidHexColor {
            input: input.into(),
        }
    }

    /// Create an invalid folder path error
    pub fn invalid_folder_path(input: impl Into<String>) -> Self {
        Self::InvalidFolderPath {
            input: input.into(),
        }
    }

    /// Create an empty override update error
    pub fn empty_override_update(path: impl Into<String>) -> Self {
        Self::EmptyOverrideUpdate { path: path.into() }
    }

    /// Create a folder not found error
    pub fn folder_not_found(path: impl Into<String>) -> Self {
        Self::FolderNotFound { path: path.into() }
    }

    /// Create a vault not found error
    pub fn vault_not_found(path: impl Into<PathBuf>) -> Self {
        Self::VaultNotFound { path: path.into() }
    }

    /// Create a settings read failed error
    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse failed error
    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings serialization failed error
    pub fn settings_serialization_failed(source: serde_json::Error) -> Self {
        Self::SettingsSerializationFailed { source }
    }

    /// Create a settings write failed error
    pub fn settings_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsWriteFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_color_error() {
        let err = FolderColorsError::invalid_hex_color("#12");
        assert_eq!(
            err.to_string(),
            "Invalid hex color: '#12'. Use format like #3B82F6"
        );
    }

    #[test]
    fn test_folder_not_found_error() {
        let err = FolderColorsError::folder_not_found("Projects/Sub");
        assert_eq!(err.to_string(), "Folder does not exist: Projects/Sub");
    }

    #[test]
    fn test_vault_not_found_error() {
        let err = FolderColorsError::vault_not_found("/no/vault");
        assert_eq!(err.to_string(), "Vault directory does not exist: /no/vault");
    }

    #[test]
    fn test_empty_override_update_error() {
        let err = FolderColorsError::empty_override_update("Notes");
        assert!(err.to_string().contains("Nothing to update for 'Notes'"));
    }

    #[test]
    fn test_settings_read_failed() {
        let path = PathBuf::from("/test/settings.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = FolderColorsError::settings_read_failed(&path, io_err);
        assert!(err.to_string().contains("/test/settings.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_settings_parse_failed() {
        let path = PathBuf::from("/test/settings.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = FolderColorsError::settings_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/settings.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_settings_write_failed() {
        let path = PathBuf::from("/test/settings.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no space left");
        let err = FolderColorsError::settings_write_failed(&path, io_err);
        assert!(err.to_string().contains("/test/settings.json"));
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_settings_serialization_failed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = FolderColorsError::settings_serialization_failed(parse_err);
        assert!(err.to_string().contains("Failed to serialize settings"));
    }
}
