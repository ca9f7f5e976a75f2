//! Palette generation from a base color

use indexmap::IndexMap;

use super::shade::Options;
use crate::color::{hex_to_hsl, hsl_to_hex};
use crate::error::{Error, Result};

/// Generated shades: label -> `#RRGGBB`, in the order the shades were given.
///
/// A label that appears twice in the options keeps its first position and
/// the later color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    shades: IndexMap<String, String>,
}

impl Palette {
    /// Hex color for a shade label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.shades.get(label).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Iterate `(label, hex)` pairs in shade order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shades.iter().map(|(label, hex)| (label.as_str(), hex.as_str()))
    }
}

/// Generate a palette from `base_hex` and the given shades.
///
/// The base color's hue and saturation are reused for every shade; its own
/// lightness is ignored. An empty `options` gives an empty palette.
///
/// # Errors
/// - [`Error::InvalidFormat`] if `base_hex` is not a valid hex color
/// - [`Error::InvalidLightness`] if a shade's percent is above 100
///
/// No partial palette is returned on error.
pub fn generate_palette(base_hex: &str, options: &Options) -> Result<Palette> {
    let base = hex_to_hsl(base_hex)?;

    let mut shades = IndexMap::with_capacity(options.len());
    for shade in options {
        let lightness = f64::from(shade.lightness()) / 100.0;
        if !(0.0..=1.0).contains(&lightness) {
            return Err(Error::InvalidLightness {
                label: shade.label().to_string(),
                percent: shade.lightness(),
            });
        }

        let hex = hsl_to_hex(base.h, base.s, lightness)?;
        shades.insert(shade.label().to_string(), hex);
    }

    Ok(Palette { shades })
}
