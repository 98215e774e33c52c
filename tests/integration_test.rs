//! Integration tests for the public conversion and filter API
//!
//! These tests exercise the crate the way a consumer would:
//! - Hex parsing and formatting
//! - RGB/HSL conversion at the documented reference points
//! - Filter calculation through the crate-level entry point
//! - Error handling for malformed and achromatic input

use hsl_filter::{
    calculate_filter, ColorConverter, ColorError, FilterCalculator, FilterConfig, FilterOutput,
    HueRotation,
};
use palette::Srgb;

// ============================================================================
// Conversion Reference Points
// ============================================================================

#[test]
fn test_hex_to_rgb_reference_colors() {
    let converter = ColorConverter::new();

    assert_eq!(converter.hex_to_rgb("#ff0000").unwrap(), Srgb::new(255, 0, 0));
    assert_eq!(converter.hex_to_rgb("00ff00").unwrap(), Srgb::new(0, 255, 0));
}

#[test]
fn test_rgb_to_hsl_reference_colors() {
    let converter = ColorConverter::new();

    let red = converter.rgb_to_hsl(255.0, 0.0, 0.0);
    assert_eq!(red.hue, 0.0);
    assert_eq!(red.saturation, 1.0);
    assert_eq!(red.lightness, 0.5);

    let gray = converter.rgb_to_hsl(128.0, 128.0, 128.0);
    assert_eq!(gray.hue, 0.0);
    assert_eq!(gray.saturation, 0.0);
    assert!((gray.lightness - 0.502).abs() < 0.001);
}

#[test]
fn test_every_gray_is_achromatic() {
    let converter = ColorConverter::new();

    for v in 0..=255u8 {
        let hsl = converter.rgb_to_hsl(v as f64, v as f64, v as f64);
        assert_eq!(hsl.hue, 0.0, "hue of gray {}", v);
        assert_eq!(hsl.saturation, 0.0, "saturation of gray {}", v);
    }
}

#[test]
fn test_css_rgb_to_hex() {
    let converter = ColorConverter::new();

    assert_eq!(converter.css_rgb_to_hex("rgb(255, 136, 0)").unwrap(), "#ff8800");
    assert_eq!(converter.css_rgb_to_hex("rgb(0,0,0)").unwrap(), "#000000");
}

// ============================================================================
// Filter Calculation
// ============================================================================

#[test]
fn test_filter_identity() {
    let output = calculate_filter("#ff0000", "#ff0000", false).unwrap();

    let filter = output.as_descriptor().expect("descriptor requested");
    assert_eq!(filter.hue_rotate, 0.0);
    assert_eq!(filter.saturate, 1.0);
}

#[test]
fn test_filter_css_string() {
    let output = calculate_filter("#ff0000", "#ff0000", true).unwrap();

    assert_eq!(
        output,
        FilterOutput::Css("filter: hue-rotate(0deg) saturate(1)".to_string())
    );
}

#[test]
fn test_filter_applied_hue_reaches_target() {
    // Rotating the source hue by the computed angle lands on the target hue
    let converter = ColorConverter::new();
    let calculator = FilterCalculator::new();

    let pairs = [
        ("#3366cc", "#cc3366"),
        ("#20b2aa", "#ff8c00"),
        ("#ff00ff", "#00ff7f"),
    ];
    for (from, to) in pairs {
        let filter = calculator.between(from, to).unwrap();
        let source = converter.hex_to_rgb(from).unwrap();
        let target = converter.hex_to_rgb(to).unwrap();
        let h1 = converter
            .rgb_to_hsl(source.red.into(), source.green.into(), source.blue.into())
            .hue;
        let h2 = converter
            .rgb_to_hsl(target.red.into(), target.green.into(), target.blue.into())
            .hue;

        let rotated = (h1 * 360.0 + filter.hue_rotate).rem_euclid(360.0);
        assert!((rotated - h2 * 360.0).abs() < 1e-6, "{} -> {}", from, to);
        assert!(filter.hue_rotate.abs() < 360.0);
    }
}

#[test]
fn test_filter_hue_rotation_conventions() {
    let preserve = FilterCalculator::new().between("#00ff00", "#ff0000").unwrap();
    assert!(preserve.hue_rotate < 0.0);

    let normalize = FilterCalculator::with_config(FilterConfig {
        hue_rotation: HueRotation::Normalize,
        decimal_places: None,
    })
    .between("#00ff00", "#ff0000")
    .unwrap();
    assert!(normalize.hue_rotate > 0.0);
    assert!((normalize.hue_rotate - (preserve.hue_rotate + 360.0)).abs() < 1e-9);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_filter_from_black_is_undefined() {
    let result = calculate_filter("#000000", "#ff0000", true);

    match result {
        Err(ColorError::UndefinedSaturationRatio { color }) => assert_eq!(color, "#000000"),
        other => panic!("Expected UndefinedSaturationRatio, got: {:?}", other),
    }
}

#[test]
fn test_filter_rejects_short_hex() {
    let err = calculate_filter("#f00", "#ff0000", false).unwrap_err();

    assert!(matches!(err, ColorError::InvalidHexFormat { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_filter_rejects_non_hex_target() {
    let err = calculate_filter("#ff0000", "#zz0000", false).unwrap_err();

    assert!(matches!(err, ColorError::InvalidHexFormat { .. }));
    assert!(err.user_message().contains("#zz0000"));
}
