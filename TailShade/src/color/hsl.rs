//! HSL conversion

use std::fmt;

use super::hex::{Rgb, hex_to_rgb, rgb_to_hex};
use crate::error::{Error, Result};

/// A color in HSL space.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to an uppercase `#RRGGBB` string.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHslRange`] if any component is out of range.
    pub fn to_hex(self) -> Result<String> {
        hsl_to_hex(self.h, self.s, self.l)
    }

    /// Whether all components are in their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=1.0).contains(&self.s)
            && (0.0..=1.0).contains(&self.l)
    }
}

impl From<Rgb> for Hsl {
    #[allow(clippy::float_cmp)] // exact channel equality picks the hue sector
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, round_hundredths(l));
        }

        let mut h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        if h < 0.0 {
            h += 360.0;
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        Self::new(h, round_hundredths(s), round_hundredths(l))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )
    }
}

/// Parse a hex color string and convert it to HSL.
///
/// Saturation and lightness are rounded to two decimal places; hue is not.
///
/// # Errors
/// Returns whatever [`hex_to_rgb`] fails with.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    hex_to_rgb(hex).map(Hsl::from)
}

/// Convert HSL components to an uppercase `#RRGGBB` string.
///
/// Channels are truncated, not rounded, after scaling to 0-255.
///
/// # Errors
/// Returns [`Error::InvalidHslRange`] unless `0 <= h < 360`, `0 <= s <= 1`
/// and `0 <= l <= 1`. NaN components are rejected.
#[allow(clippy::float_cmp)]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Result<String> {
    let hsl = Hsl::new(h, s, l);
    if !hsl.is_valid() {
        return Err(Error::InvalidHslRange { h, s, l });
    }

    let (r, g, b) = if s == 0.0 {
        let v = l * 255.0;
        (v, v, v)
    } else {
        // No mul_add here: fused rounding shifts some channels by one.
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h / 360.0;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_rgb(p, q, h) * 255.0,
            hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
        )
    };

    Ok(rgb_to_hex(r as u8, g as u8, b as u8))
}

/// Piecewise hue-to-channel helper. `t` is the hue as a fraction of a turn,
/// offset per channel.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn round_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
