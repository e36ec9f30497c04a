//! The scale table — all eight rules evaluated across the whole ramp.
//!
//! A table is a derived value, never a source of truth: the editor owns
//! the palette, and every palette or anchor change recomputes the table
//! in full. Entries for distinct steps are independent; only the eight
//! rules *within* one step are ordered.

use serde::Serialize;

use crate::palette::Palette;
use crate::ramp::RampStep;
use crate::rules::{ScaleSet, derive_set};

// ─── ScaleTable ──────────────────────────────────────────────────────────────

/// One optional [`ScaleSet`] per ramp step.
///
/// Steps whose surface is undefined map to `None` — never to a partial
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleTable {
    entries: [Option<ScaleSet>; RampStep::COUNT],
}

impl ScaleTable {
    /// The derived results for one step, if its surface was defined.
    #[inline]
    #[must_use]
    pub const fn get(&self, step: RampStep) -> Option<&ScaleSet> {
        self.entries[step.index()].as_ref()
    }

    /// Iterate every step in ramp order with its optional entry.
    pub fn iter(&self) -> impl Iterator<Item = (RampStep, Option<&ScaleSet>)> {
        RampStep::ALL
            .iter()
            .map(move |&step| (step, self.get(step)))
    }

    /// Number of populated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no step produced an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}

/// Build the full scale table for a palette and anchor step.
///
/// Pure and deterministic: identical inputs always produce an identical
/// table, so callers may memoize externally on `(palette, primary)`.
#[must_use]
pub fn build_table(palette: &Palette, primary: RampStep) -> ScaleTable {
    tracing::debug!(%primary, defined = palette.len(), "rebuilding scale table");

    let mut entries = [None; RampStep::COUNT];
    for step in RampStep::ALL {
        entries[step.index()] = derive_set(palette, step, primary);
    }

    ScaleTable { entries }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
