//! Test data generation utilities and predefined scenarios
//!
//! Provides settings presets and vaults with specific folder layouts to test
//! resolution scenarios consistently.

#![allow(dead_code)]

use super::vault::*;
use folder_colors::core::{
    error::Result,
    folder_override::FolderOverride,
    settings::{AutoColorMode, ColorSettings, Palette},
    transform::{ChildBaseTransformation, ColorTransformation},
};

/// Settings with root auto-coloring from a single-color palette and a lightening
/// child transformation that halves opacity per level
pub fn projects_settings() -> ColorSettings {
    ColorSettings {
        palettes: vec![Palette::new("blue", vec!["#3B82F6".to_string()])],
        active_palette: "blue".to_string(),
        auto_color_roots: true,
        auto_color_mode: AutoColorMode::Repeat,
        child_transformation: ChildBaseTransformation {
            transformation: ColorTransformation::lightness(10),
            use_gradient: false,
            background_opacity: Some(50.0),
        },
        background_opacity: 100.0,
        ..Default::default()
    }
}

/// Settings that auto-color roots from a two-color palette
pub fn two_color_settings(mode: AutoColorMode) -> ColorSettings {
    ColorSettings {
        palettes: vec![Palette::new(
            "duo",
            vec!["#FF0000".to_string(), "#00FF00".to_string()],
        )],
        active_palette: "duo".to_string(),
        auto_color_roots: true,
        auto_color_mode: mode,
        ..Default::default()
    }
}

/// Scenario: `Projects/Sub` with the projects settings written to disk
pub fn create_projects_vault() -> Result<TestVault> {
    let vault = setup_test_vault()?;
    create_folders(&vault.path, &["Projects/Sub"])?;
    vault.write_settings(&projects_settings())?;
    Ok(vault)
}

/// Scenario: three roots, one with nested folders and a note file that must be ignored
pub fn create_multi_root_vault() -> Result<TestVault> {
    let vault = setup_test_vault()?;
    create_folders(&vault.path, &["Archive", "journal/2024", "Projects/Alpha"])?;
    create_file(&vault.path, "Projects/readme.md", "# Projects")?;
    Ok(vault)
}

/// Scenario: a folder with an explicit base color override
pub fn create_override_vault(base_color: &str) -> Result<TestVault> {
    let vault = setup_test_vault()?;
    create_folders(&vault.path, &["Notes/Daily"])?;

    let mut settings = ColorSettings::default();
    settings.folder_overrides.insert(
        "Notes".to_string(),
        FolderOverride {
            base_color: Some(base_color.to_string()),
            ..Default::default()
        },
    );
    vault.write_settings(&settings)?;
    Ok(vault)
}
