//! Hex string parsing and formatting

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a hex color string into RGB.
///
/// Accepts `RRGGBB` or the `RGB` shorthand (each digit duplicated, so `F53`
/// is `FF5533`), optionally prefixed with `#` or `0x`. Digits are
/// case-insensitive.
///
/// # Errors
/// Returns [`Error::InvalidFormat`] if the digit count is not 3 or 6, or any
/// character is not a hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidFormat {
        input: hex.to_string(),
    };

    let digits = strip_prefix(hex);

    // Checked up front so that byte slicing below stays on char boundaries and
    // `from_str_radix` never sees a sign character.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        6 => Ok(Rgb::new(
            parse_channel(&digits[0..2]).ok_or_else(invalid)?,
            parse_channel(&digits[2..4]).ok_or_else(invalid)?,
            parse_channel(&digits[4..6]).ok_or_else(invalid)?,
        )),
        3 => {
            let expand = |i: usize| parse_channel(&digits[i..=i]).map(|n| (n << 4) | n);
            Ok(Rgb::new(
                expand(0).ok_or_else(invalid)?,
                expand(1).ok_or_else(invalid)?,
                expand(2).ok_or_else(invalid)?,
            ))
        }
        _ => Err(invalid()),
    }
}

/// Format RGB channels as an uppercase `#RRGGBB` string.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn strip_prefix(hex: &str) -> &str {
    hex.strip_prefix('#')
        .or_else(|| hex.strip_prefix("0x"))
        .unwrap_or(hex)
}

fn parse_channel(group: &str) -> Option<u8> {
    u8::from_str_radix(group, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_six_digits() {
        assert_eq!(hex_to_rgb("#FF5733"), Ok(Rgb::new(255, 87, 51)));
        assert_eq!(hex_to_rgb("#ff5733"), Ok(Rgb::new(255, 87, 51)));
        assert_eq!(hex_to_rgb("FF5733"), Ok(Rgb::new(255, 87, 51)));
        assert_eq!(hex_to_rgb("0xFF5733"), Ok(Rgb::new(255, 87, 51)));
    }

    #[test]
    fn test_hex_to_rgb_shorthand() {
        assert_eq!(hex_to_rgb("#F53"), Ok(Rgb::new(255, 85, 51)));
        assert_eq!(hex_to_rgb("#f53"), Ok(Rgb::new(255, 85, 51)));
        assert_eq!(hex_to_rgb("F53"), hex_to_rgb("FF5533"));
        assert_eq!(hex_to_rgb("0x0a0"), Ok(Rgb::new(0, 170, 0)));
    }

    #[test]
    fn test_hex_to_rgb_extremes() {
        assert_eq!(hex_to_rgb("000000"), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("FFFFFF"), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_hex_to_rgb_invalid_length() {
        for input in ["", "#", "FF57", "#1234", "FF57331", "0x"] {
            assert_eq!(
                hex_to_rgb(input),
                Err(Error::InvalidFormat {
                    input: input.to_string()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_hex_to_rgb_invalid_characters() {
        for input in ["FFZZ33", "#ZZ00FF", "+F+F+F", "NOTAHEX", "ÿÿÿ", "#12 456"] {
            assert!(
                matches!(hex_to_rgb(input), Err(Error::InvalidFormat { .. })),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(255, 87, 51), "#FF5733");
        assert_eq!(rgb_to_hex(0, 10, 171), "#000AAB");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_hex_round_trip_uppercases() {
        for input in ["1a2b3c", "#abcdef", "#000000", "FfEeDd"] {
            let rgb = hex_to_rgb(input).unwrap();
            let expected = format!("#{}", input.trim_start_matches('#').to_uppercase());
            assert_eq!(rgb.to_hex(), expected);
        }
    }

    #[test]
    fn test_rgb_from_str_and_display() {
        let rgb: Rgb = "#3b82f6".parse().unwrap();
        assert_eq!(rgb, Rgb::new(59, 130, 246));
        assert_eq!(rgb.to_string(), "#3B82F6");
        assert!("#3b82f".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_parse_channel() {
        assert_eq!(parse_channel("00"), Some(0));
        assert_eq!(parse_channel("FF"), Some(255));
        assert_eq!(parse_channel("80"), Some(128));
        assert_eq!(parse_channel("ZZ"), None);
        assert_eq!(parse_channel("FFF"), None);
    }
}
