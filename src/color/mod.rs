//! Color conversion and CSS filter module
//!
//! This module handles conversions between RGB, HSL and hex notations,
//! and derives CSS `hue-rotate`/`saturate` filters from pairs of colors.

pub mod conversion;
pub mod filter;

pub use conversion::{ColorConverter, Hsl};
pub use filter::{CssFilter, FilterCalculator, FilterOutput};
