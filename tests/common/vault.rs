//! Vault directory management and setup utilities
//!
//! Provides functions for creating temporary vaults with folder hierarchies and a
//! settings file next to them, plus helpers to drive the CLI against them.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use folder_colors::core::{error::Result, settings::ColorSettings};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test vault setup result. The TempDir must be kept alive for the duration of the
/// test to prevent cleanup.
pub struct TestVault {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    pub settings_path: PathBuf,
}

impl TestVault {
    /// Get the vault path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A `folder-colors` command pointed at this vault and its settings file
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("folder-colors")?;
        cmd.arg("--vault")
            .arg(&self.path)
            .arg("--settings")
            .arg(&self.settings_path)
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    pub fn write_settings(&self, settings: &ColorSettings) -> Result<()> {
        let mut settings = settings.clone();
        settings.save(&self.settings_path)
    }

    pub fn read_settings(&self) -> Result<ColorSettings> {
        ColorSettings::load_or_default(&self.settings_path)
    }
}

/// Sets up an empty vault with its settings file location
///
/// The vault lives in `<tmp>/vault` and the settings file at `<tmp>/settings.json`,
/// which does not exist until something is saved.
pub fn setup_test_vault() -> Result<TestVault> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("vault");
    fs::create_dir_all(&path)?;
    let settings_path = temp_dir.path().join("settings.json");

    Ok(TestVault {
        temp_dir,
        path,
        settings_path,
    })
}

/// Creates folders (and their parents) inside the vault
pub fn create_folders(vault: &Path, folders: &[&str]) -> Result<()> {
    for folder in folders {
        fs::create_dir_all(vault.join(folder))?;
    }
    Ok(())
}

/// Creates a file with specific content inside the vault
pub fn create_file(vault: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(vault.join(name), content)?;
    Ok(())
}
