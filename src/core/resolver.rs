//! Base-color, opacity and element-color resolution for one configuration snapshot.
//!
//! A [`ColorResolver`] borrows an immutable view of everything resolution depends on:
//! the settings, the folder tree, the ordered root list and a [`BaseColorMemo`]. All
//! queries are pure functions of that view.
//!
//! # Base color precedence
//! 1. An explicit `baseColor` override on the folder
//! 2. Root folders: the auto-color sequence entry at the folder's root index
//! 3. Nested folders: the parent's base color run through the child transformation,
//!    unless an ancestor disables inheritance or the child transformation is `none`
//!
//! # Gradient mode
//! With `useGradient`, a child's base is first interpolated between its parent's color
//! and the color of the parent's next sibling, according to the child's position among
//! its siblings. The child transformation is then applied to that interpolated color.

use crate::core::color_element::ColorElement;
use crate::core::color_math::interpolate_color;
use crate::core::folder_override::FolderOverride;
use crate::core::folder_path::{sort_folder_names, FolderPath};
use crate::core::folder_tree::FolderTree;
use crate::core::settings::{clamp_opacity, ColorSettings};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Effective colors of one folder. `None` means "use the theme default"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColorSet {
    pub icon_color: Option<String>,
    pub folder_color: Option<String>,
    pub text_color: Option<String>,
}

impl ResolvedColorSet {
    pub fn get(&self, element: ColorElement) -> Option<&str> {
        match element {
            ColorElement::Icon => self.icon_color.as_deref(),
            ColorElement::Folder => self.folder_color.as_deref(),
            ColorElement::Text => self.text_color.as_deref(),
        }
    }

    fn set(&mut self, element: ColorElement, color: Option<String>) {
        match element {
            ColorElement::Icon => self.icon_color = color,
            ColorElement::Folder => self.folder_color = color,
            ColorElement::Text => self.text_color = color,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.icon_color.is_none() && self.folder_color.is_none() && self.text_color.is_none()
    }
}

/// Resolved base colors keyed by path, valid for one configuration version
#[derive(Debug, Default)]
pub struct BaseColorMemo {
    version: Cell<u64>,
    entries: RefCell<HashMap<FolderPath, Option<String>>>,
}

impl BaseColorMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry if they were computed under another configuration version
    pub fn sync(&self, version: u64) {
        if self.version.get() != version {
            log::debug!(
                "Base color memo reset (version {} -> {version})",
                self.version.get()
            );
            self.version.set(version);
            self.clear();
        }
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn get(&self, path: &FolderPath) -> Option<Option<String>> {
        self.entries.borrow().get(path).cloned()
    }

    fn insert(&self, path: &FolderPath, color: Option<String>) {
        self.entries.borrow_mut().insert(path.clone(), color);
    }
}

pub struct ColorResolver<'a> {
    settings: &'a ColorSettings,
    tree: &'a dyn FolderTree,
    roots: &'a [String],
    memo: &'a BaseColorMemo,
}

impl<'a> ColorResolver<'a> {
    /// `roots` must already be in case-insensitive name order
    pub fn new(
        settings: &'a ColorSettings,
        tree: &'a dyn FolderTree,
        roots: &'a [String],
        memo: &'a BaseColorMemo,
    ) -> Self {
        Self {
            settings,
            tree,
            roots,
            memo,
        }
    }

    fn folder_override(&self, path: &FolderPath) -> Option<&'a FolderOverride> {
        self.settings.folder_override(path)
    }

    /// True if any ancestor of `path` disables base color inheritance
    pub fn inheritance_blocked(&self, path: &FolderPath) -> bool {
        path.ancestors().any(|ancestor| {
            self.folder_override(&ancestor)
                .is_some_and(|record| !record.inherit_base_color)
        })
    }

    pub fn base_color(&self, path: &FolderPath) -> Option<String> {
        if let Some(cached) = self.memo.get(path) {
            return cached;
        }

        let color = self.resolve_base_color(path);
        self.memo.insert(path, color.clone());
        color
    }

    fn resolve_base_color(&self, path: &FolderPath) -> Option<String> {
        if let Some(color) = self.folder_override(path).and_then(|r| r.base_color.clone()) {
            return Some(color);
        }

        let Some(parent) = path.parent() else {
            return self.auto_color(path);
        };

        if self.inheritance_blocked(path) {
            return None;
        }

        let child_transformation = &self.settings.child_transformation;
        if child_transformation.disables_inheritance() {
            return None;
        }

        let parent_color = self.base_color(&parent)?;
        let base = if child_transformation.use_gradient {
            self.gradient_base(&parent_color, path, &parent)
        } else {
            parent_color
        };

        Some(child_transformation.transformation.apply(&base))
    }

    fn auto_color(&self, root: &FolderPath) -> Option<String> {
        if !self.settings.auto_color_roots {
            return None;
        }

        let index = self.roots.iter().position(|name| name == root.name())?;
        self.root_color_sequence().into_iter().nth(index)
    }

    /// Auto-color sequence for the current root folders
    pub fn root_color_sequence(&self) -> Vec<String> {
        self.settings
            .auto_color_mode
            .generate(self.settings.active_palette_colors(), self.roots.len())
    }

    fn sorted_children(&self, parent: &FolderPath) -> Vec<String> {
        let mut children = self.tree.list_direct_children(parent);
        sort_folder_names(&mut children);
        children
    }

    /// The sibling after `folder` in display order
    fn next_sibling(&self, folder: &FolderPath) -> Option<FolderPath> {
        match folder.parent() {
            None => {
                let index = self.roots.iter().position(|name| name == folder.name())?;
                self.roots.get(index + 1).map(|name| FolderPath::root(name.as_str()))
            }
            Some(grandparent) => {
                let siblings = self.sorted_children(&grandparent);
                let index = siblings.iter().position(|name| name == folder.name())?;
                siblings.get(index + 1).map(|name| grandparent.child(name.as_str()))
            }
        }
    }

    /// Parent color interpolated towards the parent's next sibling
    fn gradient_base(&self, parent_color: &str, child: &FolderPath, parent: &FolderPath) -> String {
        let children = self.sorted_children(parent);
        let Some(child_index) = children.iter().position(|name| name == child.name()) else {
            return parent_color.to_string();
        };

        let Some(next_color) = self
            .next_sibling(parent)
            .and_then(|sibling| self.base_color(&sibling))
        else {
            return parent_color.to_string();
        };

        // Parent sits at step 0, the next sibling at the last step, children in between
        let position = if children.len() == 1 {
            0.5
        } else {
            let total_steps = children.len() + 2;
            ((child_index + 1) as f64 / (total_steps - 1) as f64).clamp(0.0, 1.0)
        };

        interpolate_color(parent_color, &next_color, position)
    }

    /// Effective background opacity in percent.
    ///
    /// Roots use the global setting. Nested folders multiply their parent's opacity by
    /// the child transformation's per-level factor, or get `0` when an ancestor
    /// disables inheritance.
    pub fn computed_opacity(&self, path: &FolderPath) -> f64 {
        let Some(parent) = path.parent() else {
            return clamp_opacity(self.settings.background_opacity);
        };

        if self.inheritance_blocked(path) {
            return 0.0;
        }

        let factor = self.settings.child_transformation.opacity_factor();
        clamp_opacity(self.computed_opacity(&parent) * factor)
    }

    pub fn computed_colors(&self, path: &FolderPath) -> ResolvedColorSet {
        let record = self.folder_override(path);
        let base = self.base_color(path);

        let mut colors = ResolvedColorSet::default();
        for element in ColorElement::ALL {
            let explicit = record.and_then(|r| match element {
                ColorElement::Icon => r.icon_color.clone(),
                ColorElement::Folder => r.folder_color.clone(),
                ColorElement::Text => r.text_color.clone(),
            });
            let color = explicit.or_else(|| {
                base.as_deref()
                    .map(|base| self.settings.element_transformation(element).apply(base))
            });
            colors.set(element, color);
        }
        colors
    }

    /// The folder's own icon, or the nearest ancestor icon marked for subfolders
    pub fn icon(&self, path: &FolderPath) -> Option<String> {
        if let Some(icon) = self.folder_override(path).and_then(|r| r.icon.clone()) {
            return Some(icon);
        }

        path.ancestors().find_map(|ancestor| {
            self.folder_override(&ancestor)
                .filter(|record| record.apply_to_subfolders)
                .and_then(|record| record.icon.clone())
        })
    }
}
