//! Error types for `TailShade`

use thiserror::Error;

/// The error type for color conversion and palette generation.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ==================== Color Conversion Errors ====================
    /// The hex string is not 3 or 6 hex digits (after an optional `#` or `0x`),
    /// or contains characters that are not hex digits.
    #[error("invalid hex color format {input:?}: must be 3 or 6 hex digits, optionally prefixed with '#' or '0x'")]
    InvalidFormat {
        /// The rejected input, as given.
        input: String,
    },

    /// HSL components outside `0 <= H < 360`, `0 <= S <= 1`, `0 <= L <= 1`.
    #[error("HSL values out of range (h={h}, s={s}, l={l}): must satisfy 0 <= H < 360, 0 <= S <= 1, 0 <= L <= 1")]
    InvalidHslRange {
        /// Hue in degrees.
        h: f64,
        /// Saturation.
        s: f64,
        /// Lightness.
        l: f64,
    },

    // ==================== Palette Errors ====================
    /// A shade's lightness percent is above 100.
    #[error("lightness for shade {label:?} must be between 0 and 100, got {percent}")]
    InvalidLightness {
        /// Label of the offending shade.
        label: String,
        /// The lightness percent it was constructed with.
        percent: u8,
    },
}

/// A specialized Result type for `TailShade` operations.
pub type Result<T> = std::result::Result<T, Error>;
