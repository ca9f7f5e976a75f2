//! Color conversion between hex strings, 8-bit RGB and HSL
//!
//! All conversions are pure functions over value types. The HSL math follows
//! the classic max/min-channel formulation; saturation and lightness coming
//! out of [`hex_to_hsl`] are rounded to two decimal places, and channels
//! coming out of [`hsl_to_hex`] are truncated, so a hex → HSL → hex round
//! trip may be off by one per channel.

mod hex;
mod hsl;

pub use hex::{Rgb, hex_to_rgb, rgb_to_hex};
pub use hsl::{Hsl, hex_to_hsl, hsl_to_hex};
