//! Color space conversion utilities
//!
//! Provides conversions between the color notations used in stylesheets:
//! - RGB (0-255) to HSL (unit range) and back
//! - Hex strings (`#RRGGBB`) to RGB and back
//! - Functional `rgb(r, g, b)` strings to RGB
//!
//! HSL here uses unit ranges for all three components, including hue, so a
//! full hue turn is `1.0` rather than 360°.

use palette::{encoding, Srgb};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{channel, hex, hue},
    ColorError, Result,
};

/// HSL color with every component in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue as a fraction of a full turn, in [0, 1)
    pub hue: f64,
    /// Saturation (0.0 = gray, 1.0 = fully saturated)
    pub saturation: f64,
    /// Lightness (0.0 = black, 1.0 = white)
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// True when the color has no hue (a shade of gray)
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }
}

impl From<Hsl> for palette::Hsl<encoding::Srgb, f64> {
    fn from(hsl: Hsl) -> Self {
        palette::Hsl::new(
            hsl.hue * hue::FULL_TURN_DEGREES,
            hsl.saturation,
            hsl.lightness,
        )
    }
}

impl From<palette::Hsl<encoding::Srgb, f64>> for Hsl {
    fn from(hsl: palette::Hsl<encoding::Srgb, f64>) -> Self {
        Self {
            hue: wrap_unit(hsl.hue.into_positive_degrees() / hue::FULL_TURN_DEGREES),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }
}

/// Stateless converter between RGB, HSL and hex notations
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB to HSL
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - RGB values, nominally in [0, 255]
    ///
    /// Values outside [0, 255] are not rejected; they go through the same
    /// arithmetic and yield saturation and lightness outside [0, 1].
    ///
    /// # Returns
    ///
    /// HSL color with hue wrapped into [0, 1)
    pub fn rgb_to_hsl(&self, r: f64, g: f64, b: f64) -> Hsl {
        let r = r / channel::MAX;
        let g = g / channel::MAX;
        let b = b / channel::MAX;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, lightness);
        }

        let diff = max - min;
        let saturation = if lightness > 0.5 {
            diff / (2.0 - max - min)
        } else {
            diff / (max + min)
        };

        // Red wins ties, then green
        let sector = if max == r {
            (g - b) / diff + if g < b { hue::SECTORS } else { 0.0 }
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };

        Hsl::new(wrap_unit(sector / hue::SECTORS), saturation, lightness)
    }

    /// Convert HSL to RGB
    ///
    /// Each channel is rounded to the nearest integer and clamped to [0, 255].
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Srgb<u8> {
        let Hsl {
            hue: h,
            saturation: s,
            lightness: l,
        } = hsl;

        if s == 0.0 {
            let gray = to_channel(l);
            return Srgb::new(gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Srgb::new(
            to_channel(hue_to_rgb(p, q, h + hue::CHANNEL_OFFSET)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - hue::CHANNEL_OFFSET)),
        )
    }

    /// Parse hexadecimal color string to RGB
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF0000" or "ff0000")
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexFormat`] unless the string holds exactly
    /// six hex digits after an optional `#`
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Srgb<u8>> {
        let digits = hex.trim();
        let digits = digits.strip_prefix(hex::PREFIX).unwrap_or(digits);

        let count = digits.chars().count();
        if count != hex::DIGITS {
            return Err(ColorError::invalid_hex(
                hex,
                format!("expected {} hex digits, got {}", hex::DIGITS, count),
            ));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(
                hex,
                format!("'{}' is not a hex digit", bad),
            ));
        }

        let byte = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                ColorError::invalid_hex(hex, format!("invalid {} value: {}", name, e))
            })
        };

        Ok(Srgb::new(
            byte(0..2, "red")?,
            byte(2..4, "green")?,
            byte(4..6, "blue")?,
        ))
    }

    /// Convert RGB to a lower-case hex string (e.g., "#ff8800")
    pub fn rgb_to_hex(&self, rgb: Srgb<u8>) -> String {
        format!(
            "{}{:02x}{:02x}{:02x}",
            hex::PREFIX,
            rgb.red,
            rgb.green,
            rgb.blue
        )
    }

    /// Parse functional CSS notation such as `rgb(255, 136, 0)`
    ///
    /// The first three runs of decimal digits are taken as red, green and
    /// blue; any further numbers (an alpha channel, say) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidCssColor`] if fewer than three numbers are
    /// present or a channel exceeds 255
    pub fn parse_css_rgb(&self, text: &str) -> Result<Srgb<u8>> {
        let mut numbers = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty());

        let mut channels = [0u8; 3];
        for (slot, name) in channels.iter_mut().zip(["red", "green", "blue"]) {
            let run = numbers.next().ok_or_else(|| {
                ColorError::invalid_css(text, format!("missing {} value", name))
            })?;
            *slot = run.parse::<u8>().map_err(|_| {
                let reason = format!("{} value {} is out of range 0-255", name, run);
                ColorError::invalid_css(text, reason)
            })?;
        }

        let [red, green, blue] = channels;
        Ok(Srgb::new(red, green, blue))
    }

    /// Convert functional CSS notation straight to a hex string
    pub fn css_rgb_to_hex(&self, text: &str) -> Result<String> {
        let rgb = self.parse_css_rgb(text)?;
        Ok(self.rgb_to_hex(rgb))
    }
}

/// Evaluate one RGB channel of the HSL double hexcone.
///
/// `t` must lie within one period of [0, 1]; it is wrapped once, not reduced
/// modulo 1.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

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

/// Wrap a hue into [0, 1)
fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid may round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

fn to_channel(value: f64) -> u8 {
    (value * channel::MAX).round().clamp(0.0, channel::MAX) as u8
}
