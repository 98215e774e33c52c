//! # HSL Filter
//!
//! A Rust crate for converting between stylesheet color notations and for
//! approximating one color from another with a CSS `filter`.
//!
//! This library provides:
//! - RGB ↔ HSL conversion with unit-range HSL components
//! - Hex (`#RRGGBB`) and functional `rgb(r, g, b)` parsing
//! - `hue-rotate()` + `saturate()` filters that tint a source color towards a target
//!
//! ## Example
//!
//! ```rust
//! use hsl_filter::{calculate_filter, ColorConverter};
//!
//! let converter = ColorConverter::new();
//! let rgb = converter.hex_to_rgb("#ff8800")?;
//! let hsl = converter.rgb_to_hsl(rgb.red.into(), rgb.green.into(), rgb.blue.into());
//! assert_eq!(converter.hsl_to_rgb(hsl), rgb);
//!
//! let output = calculate_filter("#ff0000", "#ff0000", true)?;
//! assert_eq!(output.as_css(), Some("filter: hue-rotate(0deg) saturate(1)"));
//! # Ok::<(), hsl_filter::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{ColorConverter, CssFilter, FilterCalculator, FilterOutput, Hsl};
pub use config::{FilterConfig, HueRotation};
pub use error::{ColorError, Result};

/// Compute the CSS filter that maps `color1` onto `color2`
///
/// This is the main entry point for filter calculation and uses the default
/// [`FilterConfig`]: hue rotation keeps its sign and numbers are written in
/// their shortest form.
///
/// # Arguments
///
/// * `color1` - Source hex color (`#RRGGBB` or `RRGGBB`)
/// * `color2` - Target hex color
/// * `as_css` - Return a `filter: ...` declaration instead of a descriptor
///
/// # Errors
///
/// Returns `ColorError` if:
/// - Either color is not a six-digit hex color
/// - `color1` is achromatic, so no saturation ratio exists
pub fn calculate_filter(color1: &str, color2: &str, as_css: bool) -> Result<FilterOutput> {
    FilterCalculator::new().calculate(color1, color2, as_css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_output_serialization() {
        let output = calculate_filter("#ff0000", "#ff0000", false).unwrap();

        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"hue-rotate":0.0,"saturate":1.0}"#);

        let deserialized: FilterOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output, deserialized);
    }

    #[test]
    fn test_css_output_serializes_as_string() {
        let output = calculate_filter("#ff0000", "#ff0000", true).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#""filter: hue-rotate(0deg) saturate(1)""#);
    }
}
