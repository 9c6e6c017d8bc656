//! Centralized initialization for CLI commands.
//!
//! Every command needs the same three things: the vault directory as a folder tree,
//! the settings blob, and an engine over both. [`CommandContext::initialize`] builds
//! them from the global CLI options so commands only deal with their own arguments.
//!
//! # Initialization Steps
//! 1. **Vault validation**: The vault (default: current directory) must be a directory
//! 2. **Settings loading**: `--settings` or the default location; missing file means defaults
//! 3. **Engine construction**: Settings are sanitized as the engine takes ownership

use crate::core::{
    dirs::default_settings_path,
    engine::FolderColorEngine,
    error::{FolderColorsError, Result},
    folder_path::FolderPath,
    folder_tree::{FolderTree, FsFolderTree},
    settings::ColorSettings,
};
use std::env;
use std::path::PathBuf;

/// Global options shared by every command
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub vault: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

pub struct CommandContext {
    pub settings_path: PathBuf,
    pub engine: FolderColorEngine<FsFolderTree>,
}

impl CommandContext {
    pub fn initialize(options: &CommandOptions) -> Result<Self> {
        // Step 1: Resolve and validate the vault directory
        let vault = match &options.vault {
            Some(vault) => vault.clone(),
            None => env::current_dir()?,
        };
        if !vault.is_dir() {
            return Err(FolderColorsError::vault_not_found(vault));
        }

        // Step 2: Load settings
        let settings_path = match &options.settings {
            Some(path) => path.clone(),
            None => default_settings_path()?,
        };
        log::debug!("Using settings file {}", settings_path.display());
        let settings = ColorSettings::load_or_default(&settings_path)?;

        // Step 3: Build the engine
        let engine = FolderColorEngine::new(settings, FsFolderTree::new(vault));

        Ok(Self {
            settings_path,
            engine,
        })
    }

    /// Parse a folder argument and make sure it exists in the vault
    pub fn resolve_folder(&self, raw: &str) -> Result<FolderPath> {
        let path = FolderPath::parse(raw)?;
        if !self.engine.tree().folder_exists(&path) {
            return Err(FolderColorsError::folder_not_found(path.to_string()));
        }
        Ok(path)
    }

    /// Persist the engine's settings
    pub fn save(self) -> Result<()> {
        let mut settings = self.engine.into_settings();
        settings.save(&self.settings_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_vault_is_rejected() {
        let options = CommandOptions {
            vault: Some(PathBuf::from("/definitely/not/a/vault")),
            settings: None,
        };
        let result = CommandContext::initialize(&options);
        assert!(matches!(result, Err(FolderColorsError::VaultNotFound { .. })));
    }

    #[test]
    fn test_resolve_folder_checks_existence() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::create_dir_all(temp_dir.path().join("vault/Projects"))?;
        let options = CommandOptions {
            vault: Some(temp_dir.path().join("vault")),
            settings: Some(temp_dir.path().join("settings.json")),
        };

        let context = CommandContext::initialize(&options)?;
        assert_eq!(context.resolve_folder("Projects")?.to_string(), "Projects");
        assert!(matches!(
            context.resolve_folder("Missing"),
            Err(FolderColorsError::FolderNotFound { .. })
        ));
        assert!(matches!(
            context.resolve_folder("//"),
            Err(FolderColorsError::InvalidFolderPath { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_save_writes_settings_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let settings_path = temp_dir.path().join("config").join("settings.json");
        let options = CommandOptions {
            vault: Some(temp_dir.path().to_path_buf()),
            settings: Some(settings_path.clone()),
        };

        CommandContext::initialize(&options)?.save()?;
        assert!(settings_path.exists());
        Ok(())
    }
}
