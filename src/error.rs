//! Error types for the hsl_filter library

use thiserror::Error;

/// Result type alias for hsl_filter operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised while parsing colors or computing filters
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex string is not exactly six hex digits after an optional `#`
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHexFormat { input: String, reason: String },

    /// Source color of a filter is achromatic, so `s2 / s1` has no value
    #[error("Undefined saturation ratio: source color {color} has zero saturation")]
    UndefinedSaturationRatio { color: String },

    /// Functional `rgb(r, g, b)` notation could not be parsed
    #[error("Invalid CSS color {input:?}: {reason}")]
    InvalidCssColor { input: String, reason: String },

    /// Filter configuration could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create a hex format error for the given input
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHexFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a CSS color error for the given input
    pub fn invalid_css(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCssColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with its underlying cause
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was caused by the colors a caller passed in
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHexFormat { .. }
                | ColorError::InvalidCssColor { .. }
                | ColorError::UndefinedSaturationRatio { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHexFormat { input, .. } => {
                format!("'{}' is not a color. Use six hex digits such as #ff8800.", input)
            }
            ColorError::UndefinedSaturationRatio { color } => {
                format!(
                    "{} is a shade of gray and cannot be tinted with a CSS filter. Pick a colored source.",
                    color
                )
            }
            ColorError::InvalidCssColor { input, .. } => {
                format!("'{}' is not a color. Use the form rgb(255, 136, 0).", input)
            }
            ColorError::ConfigError { .. } => {
                "Could not load the filter settings. Please check the configuration file.".to_string()
            }
        }
    }
}
