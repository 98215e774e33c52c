//! Configuration for CSS filter calculation.
//!
//! Controls how the computed hue rotation is signed and how numbers are
//! written into CSS text. Configuration can be loaded from JSON files or
//! constructed programmatically:
//!
//! ```no_run
//! use hsl_filter::{FilterConfig, HueRotation};
//! use std::path::Path;
//!
//! // Load from file
//! let config = FilterConfig::from_json_file(Path::new("filter.json"))?;
//!
//! // Or build one
//! let config = FilterConfig {
//!     hue_rotation: HueRotation::Normalize,
//!     decimal_places: Some(2),
//! };
//! # Ok::<(), hsl_filter::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{constants::hue::FULL_TURN_DEGREES, ColorError, Result};

/// How the hue-rotate angle is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueRotation {
    /// Keep the sign of `(h2 - h1) * 360 % 360`; CSS accepts negative angles
    #[default]
    Preserve,

    /// Map the angle into [0, 360)
    Normalize,
}

impl HueRotation {
    /// Apply this convention to a raw rotation in degrees
    pub fn apply(self, degrees: f64) -> f64 {
        match self {
            HueRotation::Preserve => degrees,
            HueRotation::Normalize => {
                let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
                // rem_euclid may round up to exactly 360.0 for tiny negative inputs
                if wrapped >= FULL_TURN_DEGREES {
                    0.0
                } else {
                    wrapped
                }
            }
        }
    }
}

/// Filter calculation settings.
///
/// Missing fields in a JSON file fall back to [`FilterConfig::default`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Sign convention for the hue-rotate angle
    pub hue_rotation: HueRotation,

    /// Fixed number of decimals in CSS text; `None` writes the shortest
    /// representation that round-trips
    pub decimal_places: Option<usize>,
}

impl FilterConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("cannot read {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ColorError::config(format!("cannot parse {}", path.display()), e)
        })
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("cannot serialize filter config", e))?;
        std::fs::write(path, json).map_err(|e| {
            ColorError::config(format!("cannot write {}", path.display()), e)
        })
    }

    /// Format a number for CSS output
    pub(crate) fn format_number(&self, value: f64) -> String {
        // -0 would print as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        match self.decimal_places {
            Some(places) => format!("{:.*}", places, value),
            None => format!("{}", value),
        }
    }
}
