//! Folder Colors - hierarchical color resolution for a vault's folder tree.
//!
//! This library computes the icon, background and text colors of every folder in a
//! vault. Colors come from explicit per-folder overrides, from a palette spread across
//! the root folders, and from parent folders through a configurable transformation.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Hex and HSL color math
//! - Settings, palettes and per-folder overrides
//! - The folder tree abstraction with in-memory and file system backends
//! - The resolution engine with its caches
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Transformations
    ChildBaseTransformation,
    ColorTransformation,
    // Settings
    AutoColorMode,
    ColorElement,
    ColorSettings,
    FolderOverride,
    OverrideUpdate,
    Palette,
    Patch,
    // Resolution
    FolderColorEngine,
    FolderEvent,
    ResolvedColorSet,
    // Folder tree
    FolderPath,
    FolderTree,
    FsFolderTree,
    MemoryFolderTree,
    // Error handling
    FolderColorsError,
    Result,
};
