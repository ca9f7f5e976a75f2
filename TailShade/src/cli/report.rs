//! Terminal report rendering
//!
//! Prints the base color and every shade in the requested [`ColorFormat`],
//! with a 24-bit ANSI background swatch after each value when color output is
//! enabled.

use std::io::Write;

use console::style;

use super::{ColorFormat, ColorInfo};
use crate::color::{Hsl, Rgb};
use crate::palette::Palette;

const SWATCH_BLOCK: &str = "    ";
const RESET: &str = "\x1b[0m";

/// A swatch of `rgb` as a truecolor background block.
#[must_use]
pub fn swatch(rgb: Rgb) -> String {
    format!(
        "\x1b[48;2;{};{};{}m{SWATCH_BLOCK}{RESET}",
        rgb.r, rgb.g, rgb.b
    )
}

/// `hsl(217,  91%,  60%)`
#[must_use]
pub fn format_hsl(hsl: Hsl) -> String {
    format!(
        "hsl({:3.0}, {:3.0}%, {:3.0}%)",
        hsl.h,
        hsl.s * 100.0,
        hsl.l * 100.0
    )
}

/// `rgb( 59, 130, 246)`
#[must_use]
pub fn format_rgb(rgb: Rgb) -> String {
    format!("rgb({:3}, {:3}, {:3})", rgb.r, rgb.g, rgb.b)
}

/// Value text and its column width for a shade row.
fn format_value(color: &ColorInfo, format: ColorFormat) -> (String, usize) {
    match format {
        ColorFormat::Hex => (color.hex.clone(), 9),
        ColorFormat::Hsl => (format_hsl(color.hsl), 25),
        ColorFormat::Rgb => (format_rgb(color.rgb), 20),
    }
}

/// Write the full report for `base` and its `palette`.
pub fn write_report<W: Write>(
    out: &mut W,
    base: &ColorInfo,
    palette: &Palette,
    format: ColorFormat,
    use_color: bool,
) -> anyhow::Result<()> {
    let trailing_swatch = |rgb: Rgb| {
        if use_color {
            format!(" {}", swatch(rgb))
        } else {
            String::new()
        }
    };

    writeln!(out, "Base color: {}{}", base.hex, trailing_swatch(base.rgb))?;
    match format {
        ColorFormat::Hex => {}
        ColorFormat::Hsl => writeln!(
            out,
            "HSL: {}{}",
            format_hsl(base.hsl),
            trailing_swatch(base.rgb)
        )?,
        ColorFormat::Rgb => writeln!(
            out,
            "RGB: {}{}",
            format_rgb(base.rgb),
            trailing_swatch(base.rgb)
        )?,
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style("Tailwind CSS palette:").bold().force_styling(use_color)
    )?;
    writeln!(out, "---------------------")?;

    for (label, hex) in palette.iter() {
        let shade = ColorInfo::from_hex(hex)?;
        let (value, width) = format_value(&shade, format);
        if use_color {
            writeln!(out, "  {label:<4}: {value:<width$} {}", swatch(shade.rgb))?;
        } else {
            writeln!(out, "  {label:<4}: {value}")?;
        }
    }

    Ok(())
}
