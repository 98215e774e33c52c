//! CSS filter approximation between two colors
//!
//! Approximates the `filter` that turns one color into another using only
//! `hue-rotate()` and `saturate()`:
//! - hue rotation is the difference of the two hues, in degrees
//! - saturation factor is the ratio of the two saturations
//!
//! Lightness is not matched; colors with different lightness only get the
//! nearest tint.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    color::{ColorConverter, Hsl},
    config::FilterConfig,
    constants::{css, hue},
    ColorError, Result,
};

/// Filter descriptor mapping a source color onto a target color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CssFilter {
    /// Hue rotation in degrees; negative when the target hue is lower
    #[serde(rename = "hue-rotate")]
    pub hue_rotate: f64,
    /// Multiplicative saturation factor
    pub saturate: f64,
}

impl CssFilter {
    /// Bare CSS value, e.g. `hue-rotate(120deg) saturate(0.5)`
    pub fn to_css_value(&self) -> String {
        self.format_value(&FilterConfig::default())
    }

    fn format_value(&self, config: &FilterConfig) -> String {
        format!(
            "hue-rotate({}deg) saturate({})",
            config.format_number(self.hue_rotate),
            config.format_number(self.saturate)
        )
    }

    fn format_declaration(&self, config: &FilterConfig) -> String {
        format!("{}: {}", css::FILTER_PROPERTY, self.format_value(config))
    }
}

impl fmt::Display for CssFilter {
    /// Writes the full declaration, e.g. `filter: hue-rotate(120deg) saturate(1)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_declaration(&FilterConfig::default()))
    }
}

/// Result of [`FilterCalculator::calculate`]: CSS text or a structured descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOutput {
    Css(String),
    Descriptor(CssFilter),
}

impl FilterOutput {
    pub fn as_css(&self) -> Option<&str> {
        match self {
            FilterOutput::Css(text) => Some(text.as_str()),
            FilterOutput::Descriptor(_) => None,
        }
    }

    pub fn as_descriptor(&self) -> Option<&CssFilter> {
        match self {
            FilterOutput::Css(_) => None,
            FilterOutput::Descriptor(filter) => Some(filter),
        }
    }
}

/// Computes CSS filters between hex colors
#[derive(Debug, Clone, Default)]
pub struct FilterCalculator {
    converter: ColorConverter,
    config: FilterConfig,
}

impl FilterCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom settings
    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            config,
        }
    }

    /// Settings this calculator formats and signs its results with
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Compute the filter that maps `from` onto `to`
    ///
    /// # Arguments
    ///
    /// * `from`, `to` - Hex colors (`#RRGGBB` or `RRGGBB`)
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidHexFormat`] if either color is malformed
    /// - [`ColorError::UndefinedSaturationRatio`] if `from` is a gray
    pub fn between(&self, from: &str, to: &str) -> Result<CssFilter> {
        let source = self.to_hsl(from)?;
        let target = self.to_hsl(to)?;

        if source.is_achromatic() {
            warn!(from, to, "cannot derive saturate() from an achromatic source color");
            return Err(ColorError::UndefinedSaturationRatio {
                color: from.to_string(),
            });
        }

        // `%` keeps the sign of the dividend
        let raw_rotation =
            ((target.hue - source.hue) * hue::FULL_TURN_DEGREES) % hue::FULL_TURN_DEGREES;
        let filter = CssFilter {
            hue_rotate: self.config.hue_rotation.apply(raw_rotation),
            saturate: target.saturation / source.saturation,
        };

        debug!(
            from,
            to,
            hue_rotate = filter.hue_rotate,
            saturate = filter.saturate,
            "computed css filter"
        );
        Ok(filter)
    }

    /// Compute the filter as CSS text (`as_css`) or as a descriptor
    pub fn calculate(&self, from: &str, to: &str, as_css: bool) -> Result<FilterOutput> {
        let filter = self.between(from, to)?;
        Ok(if as_css {
            FilterOutput::Css(filter.format_declaration(&self.config))
        } else {
            FilterOutput::Descriptor(filter)
        })
    }

    fn to_hsl(&self, hex: &str) -> Result<Hsl> {
        let rgb = self.converter.hex_to_rgb(hex)?;
        Ok(self
            .converter
            .rgb_to_hsl(rgb.red as f64, rgb.green as f64, rgb.blue as f64))
    }
}
