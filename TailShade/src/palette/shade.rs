//! Shade definitions and palette options

/// Tailwind CSS shade labels and their lightness percent.
///
/// The values are an empirical fit to the stock Tailwind palettes, not a
/// formula.
pub const TAILWIND_SHADES: [(&str, u8); 11] = [
    ("50", 98),
    ("100", 95),
    ("200", 90),
    ("300", 82),
    ("400", 64),
    ("500", 46),
    ("600", 33),
    ("700", 24),
    ("800", 14),
    ("900", 7),
    ("950", 4),
];

/// A named lightness step, e.g. `("500", 46)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shade {
    label: String,
    lightness: u8,
}

impl Shade {
    /// Create a shade. `lightness` is a percent; values above 100 are accepted
    /// here and rejected at generation time.
    #[must_use]
    pub fn new(label: impl Into<String>, lightness: u8) -> Self {
        Self {
            label: label.into(),
            lightness,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lightness percent
    #[must_use]
    pub fn lightness(&self) -> u8 {
        self.lightness
    }
}

/// Ordered list of shades to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    shades: Vec<Shade>,
}

impl Options {
    #[must_use]
    pub fn new(shades: impl IntoIterator<Item = Shade>) -> Self {
        Self {
            shades: shades.into_iter().collect(),
        }
    }

    /// The 11 standard Tailwind CSS steps from `50` to `950`.
    #[must_use]
    pub fn tailwind() -> Self {
        TAILWIND_SHADES
            .iter()
            .map(|&(label, lightness)| Shade::new(label, lightness))
            .collect()
    }

    #[must_use]
    pub fn shades(&self) -> &[Shade] {
        &self.shades
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shade> {
        self.shades.iter()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl FromIterator<Shade> for Options {
    fn from_iter<I: IntoIterator<Item = Shade>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a Shade;
    type IntoIter = std::slice::Iter<'a, Shade>;

    fn into_iter(self) -> Self::IntoIter {
        self.shades.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shade() {
        let shade = Shade::new("500", 50);
        assert_eq!(shade.label(), "500");
        assert_eq!(shade.lightness(), 50);

        let shade = Shade::new(String::from("dark"), 10);
        assert_eq!(shade.label(), "dark");
        assert_eq!(shade.lightness(), 10);
    }

    #[test]
    fn test_default_is_tailwind_scale() {
        let opts = Options::default();
        assert_eq!(opts, Options::tailwind());
        assert_eq!(opts.len(), 11);

        let pairs: Vec<(&str, u8)> = opts.iter().map(|s| (s.label(), s.lightness())).collect();
        assert_eq!(
            pairs,
            vec![
                ("50", 98),
                ("100", 95),
                ("200", 90),
                ("300", 82),
                ("400", 64),
                ("500", 46),
                ("600", 33),
                ("700", 24),
                ("800", 14),
                ("900", 7),
                ("950", 4),
            ]
        );
    }

    #[test]
    fn test_options_preserve_insertion_order() {
        let opts = Options::new([Shade::new("dark", 20), Shade::new("light", 80)]);
        let labels: Vec<&str> = opts.shades().iter().map(Shade::label).collect();
        assert_eq!(labels, ["dark", "light"]);
    }

    #[test]
    fn test_empty_options() {
        let opts = Options::new(Vec::new());
        assert!(opts.is_empty());
        assert_eq!((&opts).into_iter().count(), 0);
    }
}
