//! Consolidated test utilities for folder-colors
//!
//! This module provides unified testing utilities for integration tests,
//! built around real vault directories in temporary locations.

pub mod assertions;
pub mod fixtures;
pub mod vault;
