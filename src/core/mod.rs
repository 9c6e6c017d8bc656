//! Core functionality for the folder-colors tool.
//!
//! This module provides the color math, the settings model, the folder tree
//! abstraction and the resolution engine, plus the CLI support code shared by commands.

pub mod color_element;
pub mod color_math;
pub mod command_init;
pub mod dirs;
pub mod engine;
pub mod error;
pub mod folder_override;
pub mod folder_path;
pub mod folder_tree;
pub mod output;
pub mod resolver;
pub mod root_cache;
pub mod settings;
pub mod swatch;
pub mod transform;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{FolderColorsError, Result};

// === Color math ===
// Hex parsing, RGB/HSL conversion, interpolation and palette expansion
pub use color_math::{
    generate_gradient_colors, generate_repeating_colors, hex_to_rgb, hsl_to_rgb,
    interpolate_color, normalize_hex, rgb_to_hex, rgb_to_hsl, Hsl, Rgb,
};

// === Transformations ===
// Per-element and parent-to-child color transformations
pub use transform::{apply_transformation, ChildBaseTransformation, ColorTransformation};

// === Settings ===
// The persisted settings blob and per-folder overrides
pub use color_element::ColorElement;
pub use folder_override::{FolderOverride, OverrideUpdate, Patch};
pub use settings::{AutoColorMode, ColorSettings, Palette};

// === Folder tree ===
// Folder identifiers and the read-only view of the hierarchy
pub use folder_path::{compare_folder_names, sort_folder_names, FolderPath};
pub use folder_tree::{FolderTree, FsFolderTree, MemoryFolderTree};
pub use root_cache::{RootFolderCache, DEFAULT_ROOT_CACHE_TTL};

// === Resolution ===
// Base color inheritance, computed colors and the engine facade
pub use engine::{FolderColorEngine, FolderEvent};
pub use resolver::{BaseColorMemo, ColorResolver, ResolvedColorSet};

// === Command initialization ===
// Centralized setup for CLI commands
pub use command_init::{CommandContext, CommandOptions};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_field, print_info, print_section_header, print_success};
