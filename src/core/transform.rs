//! Declarative color transformations.
//!
//! A [`ColorTransformation`] maps one color to another by shifting it in HSL space.
//! Three independent instances (icon, folder background, text) derive element colors
//! from a folder's base color, and a [`ChildBaseTransformation`] derives a child's base
//! color from its parent's.
//!
//! # Ranges
//! - `adjustment`, `saturation`, `lightness`: `-100..=100`
//! - `hue`: `-180..=180`
//! - `background_opacity`: `0..=100`
//!
//! Values are clamped when settings are stored ([`ColorTransformation::clamped`]) and
//! again at the point of use, since settings can come from an unvalidated file.

use crate::core::color_math::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use serde::{Deserialize, Serialize};

pub const ADJUSTMENT_RANGE: (i32, i32) = (-100, 100);
pub const HUE_RANGE: (i32, i32) = (-180, 180);

/// How a derived color is computed from a base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColorTransformation {
    /// Use the base color as is
    #[default]
    None,
    /// Shift lightness only
    Lightness {
        #[serde(default)]
        adjustment: i32,
    },
    /// Shift any of hue, saturation and lightness. Omitted fields leave the channel alone
    Hsl {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hue: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        saturation: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lightness: Option<i32>,
    },
}

fn clamp_percent_shift(value: i32) -> i32 {
    value.clamp(ADJUSTMENT_RANGE.0, ADJUSTMENT_RANGE.1)
}

fn clamp_hue_shift(value: i32) -> i32 {
    value.clamp(HUE_RANGE.0, HUE_RANGE.1)
}

impl ColorTransformation {
    pub fn lightness(adjustment: i32) -> Self {
        Self::Lightness { adjustment }.clamped()
    }

    pub fn hsl(hue: Option<i32>, saturation: Option<i32>, lightness: Option<i32>) -> Self {
        Self::Hsl {
            hue,
            saturation,
            lightness,
        }
        .clamped()
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Copy with every numeric field clamped into its range
    pub fn clamped(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Lightness { adjustment } => Self::Lightness {
                adjustment: clamp_percent_shift(adjustment),
            },
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => Self::Hsl {
                hue: hue.map(clamp_hue_shift),
                saturation: saturation.map(clamp_percent_shift),
                lightness: lightness.map(clamp_percent_shift),
            },
        }
    }

    /// Apply this transformation to a `#RRGGBB` color.
    ///
    /// An unparseable base color is returned unchanged.
    pub fn apply(&self, base_color: &str) -> String {
        let (hue_shift, saturation_shift, lightness_shift) = match self.clamped() {
            Self::None => return base_color.to_string(),
            Self::Lightness { adjustment } => (0, 0, adjustment),
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => (
                hue.unwrap_or(0),
                saturation.unwrap_or(0),
                lightness.unwrap_or(0),
            ),
        };

        let rgb = match hex_to_rgb(base_color) {
            Ok(rgb) => rgb,
            Err(e) => {
                log::warn!("Skipping transformation: {e}");
                return base_color.to_string();
            }
        };

        let mut hsl = rgb_to_hsl(rgb);
        hsl.h = (hsl.h + f64::from(hue_shift)).rem_euclid(360.0);
        hsl.s = (hsl.s + f64::from(saturation_shift)).clamp(0.0, 100.0);
        hsl.l = (hsl.l + f64::from(lightness_shift)).clamp(0.0, 100.0);

        rgb_to_hex(hsl_to_rgb(hsl))
    }
}

/// Free-function form of [`ColorTransformation::apply`]
pub fn apply_transformation(base_color: &str, transformation: &ColorTransformation) -> String {
    transformation.apply(base_color)
}

/// Parent → child base color derivation, shared by every folder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildBaseTransformation {
    #[serde(flatten)]
    pub transformation: ColorTransformation,
    /// Interpolate towards the parent's next sibling before transforming
    #[serde(default)]
    pub use_gradient: bool,
    /// Percentage applied to the parent's opacity per nesting level. Unset means 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_opacity: Option<f64>,
}

impl Default for ChildBaseTransformation {
    fn default() -> Self {
        Self {
            transformation: ColorTransformation::Lightness { adjustment: -10 },
            use_gradient: false,
            background_opacity: None,
        }
    }
}

impl ChildBaseTransformation {
    /// A child transformation of type `none` disables inheritance entirely
    pub fn disables_inheritance(&self) -> bool {
        self.transformation.is_none()
    }

    /// Per-level opacity factor in `[0, 1]`
    pub fn opacity_factor(&self) -> f64 {
        self.background_opacity.unwrap_or(100.0).clamp(0.0, 100.0) / 100.0
    }

    pub fn clamped(self) -> Self {
        Self {
            transformation: self.transformation.clamped(),
            use_gradient: self.use_gradient,
            background_opacity: self.background_opacity.map(|v| v.clamp(0.0, 100.0)),
        }
    }
}
