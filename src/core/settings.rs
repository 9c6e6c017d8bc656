//! The settings blob: palettes, transformations, opacity and per-folder overrides.
//!
//! [`ColorSettings`] is the single configuration value every resolver reads. It is
//! stored as pretty-printed JSON with camelCase keys, by default at
//! `<config dir>/folder-colors/settings.json`.
//!
//! Numeric fields are clamped by [`ColorSettings::sanitize`], which runs after every
//! load (the file may have been edited by hand) and after every engine setter.

use crate::core::color_element::ColorElement;
use crate::core::color_math::{generate_gradient_colors, generate_repeating_colors, hex_to_rgb};
use crate::core::error::{FolderColorsError, Result};
use crate::core::folder_override::FolderOverride;
use crate::core::folder_path::FolderPath;
use crate::core::transform::{ChildBaseTransformation, ColorTransformation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_PALETTE_NAME: &str = "default";

/// A named, ordered list of `#RRGGBB` colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            DEFAULT_PALETTE_NAME,
            [
                "#EF4444", "#F97316", "#EAB308", "#22C55E", "#14B8A6", "#3B82F6", "#8B5CF6",
                "#EC4899",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        )
    }
}

/// How root folders are assigned palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoColorMode {
    /// Stretch the palette across all root folders
    #[default]
    Gradient,
    /// Cycle through the palette
    Repeat,
}

impl AutoColorMode {
    pub fn generate(&self, palette: &[String], count: usize) -> Vec<String> {
        match self {
            AutoColorMode::Gradient => generate_gradient_colors(palette, count),
            AutoColorMode::Repeat => generate_repeating_colors(palette, count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
    pub palettes: Vec<Palette>,
    pub active_palette: String,
    pub auto_color_roots: bool,
    pub auto_color_mode: AutoColorMode,
    pub icon_transformation: ColorTransformation,
    pub folder_transformation: ColorTransformation,
    pub text_transformation: ColorTransformation,
    pub child_transformation: ChildBaseTransformation,
    /// Background opacity of root folders, in percent
    pub background_opacity: f64,
    pub folder_overrides: BTreeMap<String, FolderOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            palettes: vec![Palette::default()],
            active_palette: DEFAULT_PALETTE_NAME.to_string(),
            auto_color_roots: false,
            auto_color_mode: AutoColorMode::default(),
            icon_transformation: ColorTransformation::None,
            folder_transformation: ColorTransformation::None,
            text_transformation: ColorTransformation::None,
            child_transformation: ChildBaseTransformation::default(),
            background_opacity: 20.0,
            folder_overrides: BTreeMap::new(),
            updated_at: None,
        }
    }
}

impl ColorSettings {
    /// Load settings from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| FolderColorsError::settings_read_failed(path, e))?;
        let mut settings: Self = serde_json::from_str(&content)
            .map_err(|e| FolderColorsError::settings_parse_failed(path, e))?;
        settings.sanitize();

        log::debug!(
            "Loaded settings from {} ({} overrides)",
            path.display(),
            settings.folder_overrides.len()
        );
        Ok(settings)
    }

    /// Write settings to `path` as pretty JSON, stamping `updated_at`
    pub fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| FolderColorsError::settings_write_failed(dir, e))?;
        }

        self.updated_at = Some(chrono::Utc::now());
        let content = serde_json::to_string_pretty(self)
            .map_err(FolderColorsError::settings_serialization_failed)?;
        std::fs::write(path, content)
            .map_err(|e| FolderColorsError::settings_write_failed(path, e))?;

        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Clamp every numeric field into range and prune empty overrides
    pub fn sanitize(&mut self) {
        self.icon_transformation = self.icon_transformation.clamped();
        self.folder_transformation = self.folder_transformation.clamped();
        self.text_transformation = self.text_transformation.clamped();
        self.child_transformation = self.child_transformation.clamped();
        self.background_opacity = clamp_opacity(self.background_opacity);

        self.folder_overrides.retain(|path, record| {
            for color in [
                &record.base_color,
                &record.icon_color,
                &record.folder_color,
                &record.text_color,
            ]
            .into_iter()
            .flatten()
            {
                if hex_to_rgb(color).is_err() {
                    log::warn!("Override for '{path}' holds unparseable color '{color}'");
                }
            }
            !record.is_empty()
        });
    }

    /// Colors of the active palette, empty if it does not exist
    pub fn active_palette_colors(&self) -> &[String] {
        self.palettes
            .iter()
            .find(|p| p.name == self.active_palette)
            .map(|p| p.colors.as_slice())
            .unwrap_or_default()
    }

    pub fn element_transformation(&self, element: ColorElement) -> &ColorTransformation {
        match element {
            ColorElement::Icon => &self.icon_transformation,
            ColorElement::Folder => &self.folder_transformation,
            ColorElement::Text => &self.text_transformation,
        }
    }

    pub fn element_transformation_mut(&mut self, element: ColorElement) -> &mut ColorTransformation {
        match element {
            ColorElement::Icon => &mut self.icon_transformation,
            ColorElement::Folder => &mut self.folder_transformation,
            ColorElement::Text => &mut self.text_transformation,
        }
    }

    pub fn folder_override(&self, path: &FolderPath) -> Option<&FolderOverride> {
        self.folder_overrides.get(&path.to_string())
    }
}

pub fn clamp_opacity(value: f64) -> f64 {
    if value.is_nan() {
        return 100.0;
    }
    value.clamp(0.0, 100.0)
}
