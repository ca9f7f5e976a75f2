//! Palette command: generate the Tailwind scale and print or export it

use std::io::Write;
use std::path::Path;

use super::export::{PaletteDocument, write_json};
use super::report::write_report;
use super::{ColorFormat, ColorInfo};
use crate::palette::{Options, generate_palette};

/// Generate the default Tailwind palette for `color`.
///
/// Writes JSON to `output` when given, otherwise writes the terminal report
/// to `out`.
pub fn execute<W: Write>(
    out: &mut W,
    color: &str,
    format: ColorFormat,
    output: Option<&Path>,
    use_color: bool,
) -> anyhow::Result<()> {
    let base = ColorInfo::from_hex(color)?;
    tracing::debug!(base = %base.hex, hsl = %base.hsl, "generating Tailwind palette");

    let palette = generate_palette(&base.hex, &Options::default())?;

    if let Some(path) = output {
        let document = PaletteDocument::new(&base, &palette)?;
        write_json(path, &document)?;
        writeln!(out, "Palette has been written to {}", path.display())?;
        return Ok(());
    }

    write_report(out, &base, &palette, format, use_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_execute_exports_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut out = Vec::new();
        execute(&mut out, "3b82f6", ColorFormat::Hex, Some(&path), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Palette has been written to {}\n", path.display())
        );

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["base"]["hex"], "#3B82F6");
        assert_eq!(value["palette"].as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_execute_rejects_bad_color() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut out: Vec<u8> = Vec::new();
        let err = execute(&mut out, "NOTAHEX", ColorFormat::Hex, Some(&path), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::InvalidFormat { .. })
        ));
        assert!(!path.exists());
        assert!(out.is_empty());
    }
}
