//! Color space conversions and palette sequence generation.
//!
//! All colors cross the public boundary as `#RRGGBB` strings, the format the settings
//! blob stores. Internally the math works on [`Rgb`] (0–255 channels) and [`Hsl`]
//! (hue in degrees 0–360, saturation and lightness in percent 0–100).
//!
//! # Public API
//! - [`hex_to_rgb`] / [`rgb_to_hex`]: Parse and format `#RRGGBB` strings
//! - [`rgb_to_hsl`] / [`hsl_to_rgb`]: Standard RGB ⇄ HSL conversion
//! - [`normalize_hex`]: Validate user input and canonicalize to uppercase
//! - [`interpolate_color`]: Per-channel linear interpolation between two colors
//! - [`generate_gradient_colors`] / [`generate_repeating_colors`]: Palette sequences
//!
//! # Failure Policy
//! Unparseable colors never abort resolution. [`interpolate_color`] returns its first
//! argument unchanged when either side fails to parse; callers that need to surface the
//! problem use [`hex_to_rgb`] or [`normalize_hex`], which return a [`Result`].

use crate::core::error::{FolderColorsError, Result};

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color in HSL space. `h` is in degrees `[0, 360)`, `s` and `l` in percent `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) string
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FolderColorsError::invalid_hex_color(hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| FolderColorsError::invalid_hex_color(hex))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a color as uppercase `#RRGGBB`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Validate a hex color and return its canonical uppercase form
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = unit_to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        unit_to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_to_rgb(p, q, h)),
        unit_to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Linearly interpolate between two hex colors, channel by channel.
///
/// `factor` is clamped to `[0, 1]`. Returns `color1` unchanged if either color fails to
/// parse.
pub fn interpolate_color(color1: &str, color2: &str, factor: f64) -> String {
    let (Ok(from), Ok(to)) = (hex_to_rgb(color1), hex_to_rgb(color2)) else {
        log::warn!("Cannot interpolate between '{color1}' and '{color2}', keeping first color");
        return color1.to_string();
    };

    let factor = factor.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * factor).round().clamp(0.0, 255.0) as u8
    };

    rgb_to_hex(Rgb::new(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
    ))
}

/// Spread `count` colors across the palette.
///
/// Up to the palette length, the first `count` palette entries are returned unchanged.
/// Beyond it, the palette is treated as `len - 1` equal segments over `[0, 1]` and each
/// output position `i / (count - 1)` is interpolated within its segment.
pub fn generate_gradient_colors(palette: &[String], count: usize) -> Vec<String> {
    if palette.is_empty() || count == 0 {
        return Vec::new();
    }

    if count <= palette.len() {
        return palette[..count].to_vec();
    }

    if palette.len() == 1 {
        return vec![palette[0].clone(); count];
    }

    let segments = palette.len() - 1;
    (0..count)
        .map(|i| {
            let position = i as f64 / (count - 1) as f64;
            let scaled = position * segments as f64;
            let segment = (scaled.floor() as usize).min(segments - 1);
            let local_factor = scaled - segment as f64;
            interpolate_color(&palette[segment], &palette[segment + 1], local_factor)
        })
        .collect()
}

/// Cycle through the palette: output `i` is `palette[i % len]`
pub fn generate_repeating_colors(palette: &[String], count: usize) -> Vec<String> {
    if palette.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|i| palette[i % palette.len()].clone())
        .collect()
}
