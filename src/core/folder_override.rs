//! Per-folder overrides and their merge semantics.
//!
//! # Public API
//! - [`FolderOverride`]: The persisted record for one folder
//! - [`OverrideUpdate`]: A partial update, one [`Patch`] per field
//! - [`Patch`]: Leave a field alone, set it, or remove it
//!
//! An override with no field set is equivalent to having no override at all; callers
//! check [`FolderOverride::is_empty`] after merging and prune the record.

use crate::core::color_math::normalize_hex;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};

fn default_inherit_base_color() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub apply_to_subfolders: bool,
    #[serde(
        default = "default_inherit_base_color",
        skip_serializing_if = "is_true"
    )]
    pub inherit_base_color: bool,
}

impl Default for FolderOverride {
    fn default() -> Self {
        Self {
            base_color: None,
            icon_color: None,
            folder_color: None,
            text_color: None,
            icon: None,
            apply_to_subfolders: false,
            inherit_base_color: true,
        }
    }
}

impl FolderOverride {
    /// True when every field is at its unset value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply a partial update in place
    pub fn merge(&mut self, update: &OverrideUpdate) {
        update.base_color.apply_to(&mut self.base_color);
        update.icon_color.apply_to(&mut self.icon_color);
        update.folder_color.apply_to(&mut self.folder_color);
        update.text_color.apply_to(&mut self.text_color);
        update.icon.apply_to(&mut self.icon);

        match &update.apply_to_subfolders {
            Patch::Unchanged => {}
            Patch::Set(value) => self.apply_to_subfolders = *value,
            Patch::Remove => self.apply_to_subfolders = false,
        }
        match &update.inherit_base_color {
            Patch::Unchanged => {}
            Patch::Set(value) => self.inherit_base_color = *value,
            Patch::Remove => self.inherit_base_color = default_inherit_base_color(),
        }
    }
}

/// A single field change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Set(T),
    Remove,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T: Clone> Patch<T> {
    fn apply_to(&self, field: &mut Option<T>) {
        match self {
            Patch::Unchanged => {}
            Patch::Set(value) => *field = Some(value.clone()),
            Patch::Remove => *field = None,
        }
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }
}

/// Partial update for a [`FolderOverride`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverrideUpdate {
    pub base_color: Patch<String>,
    pub icon_color: Patch<String>,
    pub folder_color: Patch<String>,
    pub text_color: Patch<String>,
    pub icon: Patch<String>,
    pub apply_to_subfolders: Patch<bool>,
    pub inherit_base_color: Patch<bool>,
}

impl OverrideUpdate {
    pub fn is_empty(&self) -> bool {
        self.base_color.is_unchanged()
            && self.icon_color.is_unchanged()
            && self.folder_color.is_unchanged()
            && self.text_color.is_unchanged()
            && self.icon.is_unchanged()
            && self.apply_to_subfolders.is_unchanged()
            && self.inherit_base_color.is_unchanged()
    }

    /// Check every color being set and canonicalize it to uppercase `#RRGGBB`
    pub fn validate(mut self) -> Result<Self> {
        for patch in [
            &mut self.base_color,
            &mut self.icon_color,
            &mut self.folder_color,
            &mut self.text_color,
        ] {
            if let Patch::Set(color) = patch {
                *color = normalize_hex(color)?;
            }
        }
        Ok(self)
    }
}
