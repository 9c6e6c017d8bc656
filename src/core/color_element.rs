//! The three folder elements that receive a derived color.
//!
//! Every folder row in the explorer paints an icon, a background and a label. Each of
//! them gets its own global [`ColorTransformation`](crate::core::transform::ColorTransformation)
//! and its own optional per-folder override.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorElement {
    /// Folder icon (iconColor)
    Icon,
    /// Row background (folderColor)
    Folder,
    /// Folder name (textColor)
    Text,
}

impl ColorElement {
    pub const ALL: [ColorElement; 3] = [ColorElement::Icon, ColorElement::Folder, ColorElement::Text];

    /// Human-readable label for CLI output
    pub fn description(&self) -> &'static str {
        match self {
            ColorElement::Icon => "icon",
            ColorElement::Folder => "background",
            ColorElement::Text => "text",
        }
    }
}

impl fmt::Display for ColorElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
