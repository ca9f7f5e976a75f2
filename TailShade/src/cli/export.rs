//! JSON export of a generated palette

use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Serialize;

use super::ColorInfo;
use crate::palette::Palette;

/// Top-level JSON document: the base color plus every shade.
#[derive(Debug, Serialize)]
pub struct PaletteDocument {
    pub base: ColorRecord,
    pub palette: IndexMap<String, ColorRecord>,
}

/// One color in all three notations.
#[derive(Debug, Serialize)]
pub struct ColorRecord {
    pub hex: String,
    pub hsl: HslRecord,
    pub rgb: RgbRecord,
}

/// HSL with the hue truncated to whole degrees.
#[derive(Debug, Serialize)]
pub struct HslRecord {
    pub h: u16,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Serialize)]
pub struct RgbRecord {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<&ColorInfo> for ColorRecord {
    fn from(color: &ColorInfo) -> Self {
        Self {
            hex: color.hex.clone(),
            hsl: HslRecord {
                h: color.hsl.h as u16,
                s: color.hsl.s,
                l: color.hsl.l,
            },
            rgb: RgbRecord {
                r: color.rgb.r,
                g: color.rgb.g,
                b: color.rgb.b,
            },
        }
    }
}

impl PaletteDocument {
    /// Build the document, re-parsing each shade for its RGB and HSL values.
    pub fn new(base: &ColorInfo, palette: &Palette) -> crate::Result<Self> {
        let palette = palette
            .iter()
            .map(|(label, hex)| {
                ColorInfo::from_hex(hex).map(|color| (label.to_string(), ColorRecord::from(&color)))
            })
            .collect::<crate::Result<_>>()?;

        Ok(Self {
            base: ColorRecord::from(base),
            palette,
        })
    }
}

/// Write `document` as pretty-printed JSON to `path`.
pub fn write_json(path: &Path, document: &PaletteDocument) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');

    std::fs::write(path, json)
        .with_context(|| format!("failed to write palette to {}", path.display()))?;

    tracing::info!(path = %path.display(), shades = document.palette.len(), "palette exported");
    Ok(())
}
