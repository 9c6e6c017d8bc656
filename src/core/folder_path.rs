//! Folder paths as owned segment lists.
//!
//! A [`FolderPath`] is parsed once from its `/`-delimited string form and then handled
//! as a list of segments, so walking ancestors never re-splits strings. The string form
//! only reappears at the boundaries: override keys in the settings blob, CLI arguments
//! and the file-tree collaborator.
//!
//! Sibling and root ordering is a case-insensitive comparison of folder names, see
//! [`compare_folder_names`].

use crate::core::error::{FolderColorsError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const PATH_DELIMITER: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    /// Parse a delimited path. Empty segments (leading, trailing or doubled delimiters)
    /// are dropped; a path with no segments left is an error. Whitespace inside a
    /// segment is part of the folder name and kept as is.
    pub fn parse(input: &str) -> Result<Self> {
        let segments: Vec<String> = input
            .split(PATH_DELIMITER)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(FolderColorsError::invalid_folder_path(input));
        }

        Ok(Self { segments })
    }

    /// A root-level folder
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Terminal segment
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn parent(&self) -> Option<FolderPath> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn child(&self, name: impl Into<String>) -> FolderPath {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Every ancestor from the immediate parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = FolderPath> + '_ {
        (1..self.segments.len()).rev().map(move |len| Self {
            segments: self.segments[..len].to_vec(),
        })
    }

    /// True if `self` is `other` or lies beneath it
    pub fn starts_with(&self, other: &FolderPath) -> bool {
        self.segments.starts_with(&other.segments)
    }

    /// Replace the `from` prefix of this path with `to`
    pub fn rebase(&self, from: &FolderPath, to: &FolderPath) -> Option<FolderPath> {
        if !self.starts_with(from) {
            return None;
        }
        let mut segments = to.segments.clone();
        segments.extend_from_slice(&self.segments[from.segments.len()..]);
        Some(Self { segments })
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl FromStr for FolderPath {
    type Err = FolderColorsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for FolderPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FolderPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Case-insensitive name ordering, with an exact comparison as tie-break so the order
/// is total and deterministic
pub fn compare_folder_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn sort_folder_names(names: &mut [String]) {
    names.sort_by(|a, b| compare_folder_names(a, b));
}
