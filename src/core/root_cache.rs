//! Time-boxed cache of the ordered root-folder list.
//!
//! Root auto-coloring and root-level gradients need the ordered list of root folders on
//! every query. Listing them can hit the file system, so the list is cached for a short
//! window ([`DEFAULT_ROOT_CACHE_TTL`]) and invalidated explicitly whenever a folder is
//! created, renamed or removed.
//!
//! # Public API
//! - [`RootFolderCache`]: The cache with TTL, explicit invalidation and refresh
//!
//! # Cache Strategy
//! - **Bounded staleness**: an entry older than the TTL is always refreshed before use
//! - **Explicit invalidation**: folder events drop the entry immediately
//! - **Refresh reporting**: every refresh is reported, so the caller can drop anything
//!   derived from the tree (nested children included) since the previous one

use crate::core::folder_path::sort_folder_names;
use crate::core::folder_tree::FolderTree;
use std::time::{Duration, Instant};

pub const DEFAULT_ROOT_CACHE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct RootFolderCache {
    roots: Vec<String>,
    refreshed_at: Option<Instant>,
    ttl: Duration,
}

impl Default for RootFolderCache {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_CACHE_TTL)
    }
}

impl RootFolderCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            roots: Vec::new(),
            refreshed_at: None,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_fresh(&self) -> bool {
        self.refreshed_at
            .is_some_and(|refreshed_at| refreshed_at.elapsed() < self.ttl)
    }

    pub fn invalidate(&mut self) {
        log::debug!("Root folder cache invalidated");
        self.refreshed_at = None;
    }

    /// Cached roots, possibly stale. Call [`refresh_if_stale`](Self::refresh_if_stale) first
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Re-list root folders if the entry expired or was invalidated.
    ///
    /// Returns `true` whenever a refresh happened, even if the root list is unchanged.
    pub fn refresh_if_stale(&mut self, tree: &dyn FolderTree) -> bool {
        if self.is_fresh() {
            return false;
        }

        let mut roots = tree.list_root_folders();
        sort_folder_names(&mut roots);
        self.refreshed_at = Some(Instant::now());

        if roots != self.roots {
            log::debug!("Root folders refreshed: {} entries", roots.len());
            self.roots = roots;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::folder_path::FolderPath;
    use crate::core::folder_tree::MemoryFolderTree;

    #[test]
    fn test_first_refresh_loads_sorted_roots() -> crate::core::Result<()> {
        let tree = MemoryFolderTree::from_paths(["b", "A", "c"])?;
        let mut cache = RootFolderCache::default();

        assert!(!cache.is_fresh());
        assert!(cache.refresh_if_stale(&tree));
        assert!(cache.is_fresh());
        assert_eq!(cache.roots(), &["A", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_fresh_cache_ignores_tree_changes() -> crate::core::Result<()> {
        let mut tree = MemoryFolderTree::from_paths(["A"])?;
        let mut cache = RootFolderCache::new(Duration::from_secs(3600));
        cache.refresh_if_stale(&tree);

        tree.add(&FolderPath::root("B"));
        assert!(!cache.refresh_if_stale(&tree));
        assert_eq!(cache.roots(), &["A"]);
        Ok(())
    }

    #[test]
    fn test_invalidate_forces_refresh() -> crate::core::Result<()> {
        let mut tree = MemoryFolderTree::from_paths(["A"])?;
        let mut cache = RootFolderCache::new(Duration::from_secs(3600));
        cache.refresh_if_stale(&tree);

        tree.add(&FolderPath::root("B"));
        cache.invalidate();
        assert!(cache.refresh_if_stale(&tree));
        assert_eq!(cache.roots(), &["A", "B"]);
        Ok(())
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() -> crate::core::Result<()> {
        let tree = MemoryFolderTree::from_paths(["A"])?;
        let mut cache = RootFolderCache::new(Duration::ZERO);
        assert!(cache.refresh_if_stale(&tree));
        assert!(!cache.is_fresh());
        // Same list again: still reported as a refresh
        assert!(cache.refresh_if_stale(&tree));
        assert_eq!(cache.roots(), &["A"]);
        Ok(())
    }
}
