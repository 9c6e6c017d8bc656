//! The folder color engine: settings, folder tree and caches behind one facade.
//!
//! [`FolderColorEngine`] is what UI and persistence collaborators talk to. Queries
//! (`get_*`) build a [`ColorResolver`] over the current snapshot; mutations (`set_*`,
//! `remove_*`, [`handle_folder_event`](FolderColorEngine::handle_folder_event)) take
//! `&mut self`, sanitize what they store and bump the configuration version, which
//! resets the base-color memo before the next query.

use crate::core::color_element::ColorElement;
use crate::core::color_math::normalize_hex;
use crate::core::folder_override::{FolderOverride, OverrideUpdate};
use crate::core::folder_path::FolderPath;
use crate::core::folder_tree::FolderTree;
use crate::core::resolver::{BaseColorMemo, ColorResolver, ResolvedColorSet};
use crate::core::root_cache::RootFolderCache;
use crate::core::settings::{clamp_opacity, AutoColorMode, ColorSettings, Palette};
use crate::core::transform::{ChildBaseTransformation, ColorTransformation};
use std::cell::RefCell;
use std::time::Duration;

/// Structural change reported by the folder tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderEvent {
    Created(FolderPath),
    Renamed { from: FolderPath, to: FolderPath },
    Removed(FolderPath),
}

pub struct FolderColorEngine<T: FolderTree> {
    settings: ColorSettings,
    tree: T,
    root_cache: RefCell<RootFolderCache>,
    memo: BaseColorMemo,
    version: u64,
}

impl<T: FolderTree> FolderColorEngine<T> {
    pub fn new(mut settings: ColorSettings, tree: T) -> Self {
        settings.sanitize();
        Self {
            settings,
            tree,
            root_cache: RefCell::new(RootFolderCache::default()),
            memo: BaseColorMemo::new(),
            version: 0,
        }
    }

    pub fn with_root_cache_ttl(mut self, ttl: Duration) -> Self {
        self.root_cache = RefCell::new(RootFolderCache::new(ttl));
        self
    }

    pub fn settings(&self) -> &ColorSettings {
        &self.settings
    }

    pub fn into_settings(self) -> ColorSettings {
        self.settings
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Mutable access to the tree. Report each structural change through
    /// [`handle_folder_event`](Self::handle_folder_event) afterwards.
    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn with_resolver<R>(&self, query: impl FnOnce(&ColorResolver<'_>) -> R) -> R {
        // Memoized gradients depend on nested children too, not just the root order
        if self.root_cache.borrow_mut().refresh_if_stale(&self.tree) {
            self.memo.clear();
        }
        self.memo.sync(self.version);

        let cache = self.root_cache.borrow();
        let resolver = ColorResolver::new(&self.settings, &self.tree, cache.roots(), &self.memo);
        query(&resolver)
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }

    // === Queries ===

    pub fn get_computed_colors(&self, path: &FolderPath) -> ResolvedColorSet {
        self.with_resolver(|resolver| resolver.computed_colors(path))
    }

    pub fn get_base_color(&self, path: &FolderPath) -> Option<String> {
        self.with_resolver(|resolver| resolver.base_color(path))
    }

    pub fn get_computed_opacity(&self, path: &FolderPath) -> f64 {
        self.with_resolver(|resolver| resolver.computed_opacity(path))
    }

    pub fn get_icon(&self, path: &FolderPath) -> Option<String> {
        self.with_resolver(|resolver| resolver.icon(path))
    }

    /// Auto-color sequence for the current root folders, in root order
    pub fn root_color_sequence(&self) -> Vec<String> {
        self.with_resolver(|resolver| resolver.root_color_sequence())
    }

    pub fn folder_override(&self, path: &FolderPath) -> Option<&FolderOverride> {
        self.settings.folder_override(path)
    }

    // === Overrides ===

    /// Merge `update` into the folder's override. Returns the stored record, or `None`
    /// if the merge left it empty and it was pruned.
    pub fn set_folder_override(
        &mut self,
        path: &FolderPath,
        update: &OverrideUpdate,
    ) -> Option<&FolderOverride> {
        let key = path.to_string();
        let mut record = self
            .settings
            .folder_overrides
            .remove(&key)
            .unwrap_or_default();
        record.merge(update);
        self.bump_version();

        if record.is_empty() {
            log::debug!("Override for '{key}' is empty after merge, pruned");
            return None;
        }

        log::debug!("Override for '{key}' updated");
        self.settings.folder_overrides.insert(key.clone(), record);
        self.settings.folder_overrides.get(&key)
    }

    pub fn remove_folder_override(&mut self, path: &FolderPath) -> Option<FolderOverride> {
        let removed = self.settings.folder_overrides.remove(&path.to_string());
        if removed.is_some() {
            log::debug!("Override for '{path}' removed");
            self.bump_version();
        }
        removed
    }

    // === Folder events ===

    pub fn handle_folder_event(&mut self, event: &FolderEvent) {
        log::debug!("Folder event: {event:?}");
        self.root_cache.borrow_mut().invalidate();

        match event {
            FolderEvent::Created(_) => {}
            FolderEvent::Renamed { from, to } => self.move_overrides(from, to),
            FolderEvent::Removed(path) => self.drop_overrides(path),
        }

        self.bump_version();
    }

    fn overrides_under(&self, prefix: &FolderPath) -> Vec<(String, FolderPath)> {
        self.settings
            .folder_overrides
            .keys()
            .filter_map(|key| {
                let path = FolderPath::parse(key).ok()?;
                path.starts_with(prefix).then(|| (key.clone(), path))
            })
            .collect()
    }

    fn move_overrides(&mut self, from: &FolderPath, to: &FolderPath) {
        for (key, path) in self.overrides_under(from) {
            let Some(record) = self.settings.folder_overrides.remove(&key) else {
                continue;
            };
            if let Some(moved) = path.rebase(from, to) {
                self.settings
                    .folder_overrides
                    .insert(moved.to_string(), record);
            }
        }
    }

    fn drop_overrides(&mut self, removed: &FolderPath) {
        for (key, _) in self.overrides_under(removed) {
            self.settings.folder_overrides.remove(&key);
        }
    }

    // === Settings ===

    /// Add or replace a palette by name. Unparseable colors are dropped
    pub fn set_palette(&mut self, palette: Palette) {
        let colors: Vec<String> = palette
            .colors
            .iter()
            .filter_map(|color| match normalize_hex(color) {
                Ok(color) => Some(color),
                Err(e) => {
                    log::warn!("Palette '{}': {e}", palette.name);
                    None
                }
            })
            .collect();
        let palette = Palette::new(palette.name, colors);

        match self
            .settings
            .palettes
            .iter_mut()
            .find(|existing| existing.name == palette.name)
        {
            Some(existing) => *existing = palette,
            None => self.settings.palettes.push(palette),
        }
        self.bump_version();
    }

    pub fn set_active_palette(&mut self, name: impl Into<String>) {
        self.settings.active_palette = name.into();
        self.bump_version();
    }

    pub fn set_auto_color_roots(&mut self, enabled: bool) {
        self.settings.auto_color_roots = enabled;
        self.bump_version();
    }

    pub fn set_auto_color_mode(&mut self, mode: AutoColorMode) {
        self.settings.auto_color_mode = mode;
        self.bump_version();
    }

    pub fn set_element_transformation(
        &mut self,
        element: ColorElement,
        transformation: ColorTransformation,
    ) {
        *self.settings.element_transformation_mut(element) = transformation.clamped();
        self.bump_version();
    }

    pub fn set_child_transformation(&mut self, transformation: ChildBaseTransformation) {
        self.settings.child_transformation = transformation.clamped();
        self.bump_version();
    }

    pub fn set_background_opacity(&mut self, opacity: f64) {
        self.settings.background_opacity = clamp_opacity(opacity);
        self.bump_version();
    }
}
