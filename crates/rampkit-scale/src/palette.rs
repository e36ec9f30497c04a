//! The input palette — one optional color per ramp step.
//!
//! A palette is externally owned, user-edited state: the editor mutates it
//! and hands the engine an immutable snapshot. Steps with no assigned color
//! are simply undefined; the engine skips them while walking and maps them
//! to `None` in the output table. Invalid color strings never get this far —
//! they are rejected at the parse boundary by [`rampkit_color`].

use rampkit_color::{ParseColorError, Rgb};

use crate::ramp::RampStep;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// A total mapping from every [`RampStep`] to an optional color.
///
/// # Examples
///
/// ```
/// use rampkit_scale::{Palette, RampStep};
///
/// let mut palette = Palette::new();
/// palette.set_hex(RampStep::S800, "#336699").unwrap();
/// assert!(palette.is_defined(RampStep::S800));
/// assert!(!palette.is_defined(RampStep::S200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: [Option<Rgb>; RampStep::COUNT],
}

impl Palette {
    /// An empty palette with every step undefined.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: [None; RampStep::COUNT],
        }
    }

    /// Build a palette from `(step, "#rrggbb")` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseColorError`] encountered; earlier pairs are
    /// discarded with it (all-or-nothing).
    pub fn from_hex_pairs<'a, I>(pairs: I) -> Result<Self, ParseColorError>
    where
        I: IntoIterator<Item = (RampStep, &'a str)>,
    {
        let mut palette = Self::new();
        for (step, hex) in pairs {
            palette.set_hex(step, hex)?;
        }
        Ok(palette)
    }

    /// Assign a color to a step.
    pub const fn set(&mut self, step: RampStep, color: Rgb) {
        self.colors[step.index()] = Some(color);
    }

    /// Parse and assign a hex color string to a step.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the string is not a valid `#RRGGBB`
    /// color; the step keeps its previous value.
    pub fn set_hex(&mut self, step: RampStep, hex: &str) -> Result<(), ParseColorError> {
        self.set(step, Rgb::hex(hex)?);
        Ok(())
    }

    /// Remove the color at a step, leaving it undefined.
    pub const fn clear(&mut self, step: RampStep) {
        self.colors[step.index()] = None;
    }

    /// The color at a step, if defined.
    #[inline]
    #[must_use]
    pub const fn get(&self, step: RampStep) -> Option<Rgb> {
        self.colors[step.index()]
    }

    /// Whether a step has a color assigned.
    #[inline]
    #[must_use]
    pub const fn is_defined(&self, step: RampStep) -> bool {
        self.colors[step.index()].is_some()
    }

    /// Number of defined steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no step has a color assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.iter().all(Option::is_none)
    }

    /// Iterate the defined steps in ramp order (light → dark).
    pub fn defined(&self) -> impl Iterator<Item = (RampStep, Rgb)> + '_ {
        RampStep::ALL
            .iter()
            .filter_map(|&step| self.get(step).map(|color| (step, color)))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_palette_is_empty() {
        let palette = Palette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.len(), 0);
        for step in RampStep::ALL {
            assert_eq!(palette.get(step), None);
        }
    }

    #[test]
    fn set_get_clear() {
        let mut palette = Palette::new();
        let teal = Rgb::new(0, 128, 128);
        palette.set(RampStep::S900, teal);
        assert_eq!(palette.get(RampStep::S900), Some(teal));
        assert_eq!(palette.len(), 1);

        palette.clear(RampStep::S900);
        assert_eq!(palette.get(RampStep::S900), None);
        assert!(palette.is_empty());
    }

    #[test]
    fn set_hex_parses() {
        let mut palette = Palette::new();
        palette.set_hex(RampStep::S500, "#abcdef").unwrap();
        assert_eq!(palette.get(RampStep::S500), Some(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn set_hex_rejects_invalid_and_keeps_previous() {
        let mut palette = Palette::new();
        palette.set_hex(RampStep::S500, "#112233").unwrap();
        assert!(palette.set_hex(RampStep::S500, "#12345").is_err());
        assert_eq!(palette.get(RampStep::S500), Some(Rgb::new(0x11, 0x22, 0x33)));
    }

    #[test]
    fn defined_iterates_in_ramp_order() {
        let palette = Palette::from_hex_pairs([
            (RampStep::S2000, "#222222"),
            (RampStep::S300, "#eeeeee"),
            (RampStep::S900, "#777777"),
        ])
        .unwrap();

        let steps: Vec<RampStep> = palette.defined().map(|(step, _)| step).collect();
        assert_eq!(steps, vec![RampStep::S300, RampStep::S900, RampStep::S2000]);
    }

    #[test]
    fn from_hex_pairs_propagates_parse_errors() {
        let result = Palette::from_hex_pairs([
            (RampStep::S300, "#eeeeee"),
            (RampStep::S900, "oops"),
        ]);
        assert!(result.is_err());
    }
}
