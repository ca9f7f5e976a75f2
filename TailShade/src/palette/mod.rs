//! Palette generation
//!
//! A palette keeps the base color's hue and saturation and swaps in a fixed
//! lightness per shade. [`Options`] holds the ordered shade list; the default
//! is the 11-step Tailwind CSS scale in [`TAILWIND_SHADES`].

mod generator;
mod shade;

pub use generator::{Palette, generate_palette};
pub use shade::{Options, Shade, TAILWIND_SHADES};
