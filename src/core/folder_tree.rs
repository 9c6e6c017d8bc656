//! The hierarchical namespace the engine colors.
//!
//! The engine never walks a file system itself; it asks a [`FolderTree`] for root
//! folders and direct children. Two implementations ship with the crate:
//!
//! - [`MemoryFolderTree`]: a set of paths held in memory, for embedders and tests
//! - [`FsFolderTree`]: a directory on disk (a "vault"), hidden directories excluded
//!
//! Both return names in case-insensitive order. The engine re-sorts regardless, so
//! third-party implementations don't have to.

use crate::core::error::Result;
use crate::core::folder_path::{sort_folder_names, FolderPath};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub trait FolderTree {
    /// Names of root-level folders
    fn list_root_folders(&self) -> Vec<String>;

    /// Names of the direct children of `parent`
    fn list_direct_children(&self, parent: &FolderPath) -> Vec<String>;

    fn folder_exists(&self, path: &FolderPath) -> bool;
}

impl<T: FolderTree + ?Sized> FolderTree for &T {
    fn list_root_folders(&self) -> Vec<String> {
        (**self).list_root_folders()
    }

    fn list_direct_children(&self, parent: &FolderPath) -> Vec<String> {
        (**self).list_direct_children(parent)
    }

    fn folder_exists(&self, path: &FolderPath) -> bool {
        (**self).folder_exists(path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFolderTree {
    folders: BTreeSet<FolderPath>,
}

impl MemoryFolderTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from delimited path strings
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut tree = Self::new();
        for path in paths {
            tree.add(&FolderPath::parse(path)?);
        }
        Ok(tree)
    }

    /// Add a folder and every missing ancestor
    pub fn add(&mut self, path: &FolderPath) {
        for ancestor in path.ancestors() {
            self.folders.insert(ancestor);
        }
        self.folders.insert(path.clone());
    }

    /// Remove a folder and its whole subtree
    pub fn remove(&mut self, path: &FolderPath) {
        self.folders.retain(|folder| !folder.starts_with(path));
    }

    /// Move a folder and its subtree to a new location
    pub fn rename(&mut self, from: &FolderPath, to: &FolderPath) {
        let moved: Vec<FolderPath> = self
            .folders
            .iter()
            .filter_map(|folder| folder.rebase(from, to))
            .collect();
        self.remove(from);
        for folder in moved {
            self.add(&folder);
        }
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

impl FolderTree for MemoryFolderTree {
    fn list_root_folders(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .folders
            .iter()
            .filter(|folder| folder.is_root())
            .map(|folder| folder.name().to_string())
            .collect();
        sort_folder_names(&mut names);
        names
    }

    fn list_direct_children(&self, parent: &FolderPath) -> Vec<String> {
        let mut names: Vec<String> = self
            .folders
            .iter()
            .filter(|folder| folder.depth() == parent.depth() + 1 && folder.starts_with(parent))
            .map(|folder| folder.name().to_string())
            .collect();
        sort_folder_names(&mut names);
        names
    }

    fn folder_exists(&self, path: &FolderPath) -> bool {
        self.folders.contains(path)
    }
}

/// A directory on disk whose subdirectories are the folders
#[derive(Debug, Clone)]
pub struct FsFolderTree {
    root: PathBuf,
}

impl FsFolderTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir_for(&self, path: &FolderPath) -> PathBuf {
        path.segments()
            .iter()
            .fold(self.root.clone(), |dir, segment| dir.join(segment))
    }

    fn list_subdirectories(&self, dir: &Path) -> Vec<String> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Cannot list folders in {}: {e}", dir.display());
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .collect();
        sort_folder_names(&mut names);
        names
    }

    /// Every folder in the vault, depth-first in display order
    pub fn walk(&self) -> Vec<FolderPath> {
        let mut result = Vec::new();
        let mut stack: Vec<FolderPath> = self
            .list_root_folders()
            .into_iter()
            .rev()
            .map(FolderPath::root)
            .collect();

        while let Some(folder) = stack.pop() {
            let children = self.list_direct_children(&folder);
            stack.extend(children.into_iter().rev().map(|name| folder.child(name)));
            result.push(folder);
        }

        result
    }
}

impl FolderTree for FsFolderTree {
    fn list_root_folders(&self) -> Vec<String> {
        self.list_subdirectories(&self.root)
    }

    fn list_direct_children(&self, parent: &FolderPath) -> Vec<String> {
        self.list_subdirectories(&self.dir_for(parent))
    }

    fn folder_exists(&self, path: &FolderPath) -> bool {
        !path.segments().iter().any(|s| s.starts_with('.')) && self.dir_for(path).is_dir()
    }
}
