//! Terminal rendering of resolved folder colors.
//!
//! Every CLI command shows colors the same way: a two-cell truecolor swatch followed
//! by the hex value, or a muted `-` when the color is undefined and the host theme
//! default applies.
//!
//! # Public API
//! - [`color_swatch`]: Two-cell block painted in the given color
//! - [`paint_text`]: Text painted in the given color, or left plain
//! - [`format_color_value`]: Swatch plus hex, the standard value column
//! - [`format_opacity`]: Opacity percentage with at most one decimal

use crate::core::color_math::hex_to_rgb;
use colored::*;

/// Two blank cells with the color as background. Undefined or unparseable colors
/// render as a muted dash
pub fn color_swatch(hex: Option<&str>) -> ColoredString {
    match hex.map(hex_to_rgb) {
        Some(Ok(rgb)) => "  ".on_truecolor(rgb.r, rgb.g, rgb.b),
        _ => "- ".bright_black(),
    }
}

pub fn paint_text(text: &str, hex: Option<&str>) -> ColoredString {
    match hex.map(hex_to_rgb) {
        Some(Ok(rgb)) => text.truecolor(rgb.r, rgb.g, rgb.b),
        _ => text.normal(),
    }
}

pub fn format_color_value(hex: Option<&str>) -> String {
    match hex {
        Some(value) => format!("{} {}", color_swatch(hex), value.white()),
        None => format!("{}", "-".bright_black()),
    }
}

pub fn format_opacity(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}
