//! Numeric constants for color conversion and CSS filter output
//!
//! Grouped by the representation they belong to.

/// 8-bit RGB channel limits
pub mod channel {
    /// Largest value of an 8-bit channel, used to normalize to [0, 1]
    pub const MAX: f64 = 255.0;
}

/// Hue geometry of the HSL double hexcone
pub mod hue {
    /// Number of 60° sectors in the hue circle
    pub const SECTORS: f64 = 6.0;

    /// Degrees in a full hue turn
    pub const FULL_TURN_DEGREES: f64 = 360.0;

    /// Hue offset of the red channel relative to green (one third of a turn)
    pub const CHANNEL_OFFSET: f64 = 1.0 / 3.0;
}

/// Hex notation
pub mod hex {
    /// Number of hex digits in an `RRGGBB` color
    pub const DIGITS: usize = 6;

    /// Optional prefix accepted on input and always written on output
    pub const PREFIX: char = '#';
}

/// CSS output
pub mod css {
    /// Property name written in front of the filter value
    pub const FILTER_PROPERTY: &str = "filter";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_geometry() {
        assert_eq!(hue::FULL_TURN_DEGREES / hue::SECTORS, 60.0);
        assert!((hue::CHANNEL_OFFSET * 3.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hex_digits_cover_three_channels() {
        assert_eq!(hex::DIGITS, 3 * 2);
        assert_eq!(channel::MAX, u8::MAX as f64);
    }
}
