//! The 14-step color ramp.
//!
//! A ramp is a closed, totally ordered set of positions spanning one
//! lightness extreme to the other. The engine's algorithms lean on index
//! arithmetic between adjacent steps (walking, midpoints, fixed offsets),
//! so this is a fixed enumeration rather than a dynamic collection.
//!
//! **Convention, applied by every rule in this crate**: step **200 is the
//! light extreme** and step **2500 is the dark extreme** — higher labels
//! are darker, the usual token-ramp numbering.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

// ─── RampStep ────────────────────────────────────────────────────────────────

/// One of the 14 fixed ramp positions, ordered light → dark.
///
/// The variant order *is* the ramp order: `S200 < S300 < … < S2500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RampStep {
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S1000,
    S1100,
    S1200,
    S1500,
    S2000,
    S2500,
}

impl RampStep {
    /// Number of steps in the ramp.
    pub const COUNT: usize = 14;

    /// Every step, in ramp order (light → dark).
    pub const ALL: [Self; Self::COUNT] = [
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S1000,
        Self::S1100,
        Self::S1200,
        Self::S1500,
        Self::S2000,
        Self::S2500,
    ];

    /// The light extreme of the ramp.
    pub const LIGHT_EXTREME: Self = Self::S200;

    /// The dark extreme of the ramp.
    pub const DARK_EXTREME: Self = Self::S2500;

    /// Zero-based position in ramp order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The step at the given index, if in bounds.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The conventional numeric label (200, 300, …, 2500).
    #[must_use]
    pub const fn label(self) -> u16 {
        match self {
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S1000 => 1000,
            Self::S1100 => 1100,
            Self::S1200 => 1200,
            Self::S1500 => 1500,
            Self::S2000 => 2000,
            Self::S2500 => 2500,
        }
    }

    /// The step with the given numeric label, if one exists.
    #[must_use]
    pub fn from_label(label: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|step| step.label() == label)
    }

    /// Move `delta` positions along the ramp, clamped to the ramp bounds.
    ///
    /// Positive deltas move toward the dark extreme, negative toward the
    /// light extreme.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn offset(self, delta: isize) -> Self {
        let index = (self.index() as isize + delta).clamp(0, Self::COUNT as isize - 1);
        Self::ALL[index as usize]
    }

    /// Number of ramp positions between two steps.
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> usize {
        self.index().abs_diff(other.index())
    }

    /// The step halfway between two steps (index average, floored).
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::ALL[usize::midpoint(self.index(), other.index())]
    }
}

impl Default for RampStep {
    /// The mid-ramp default anchor used when no primary step is chosen.
    fn default() -> Self {
        Self::S800
    }
}

impl fmt::Display for RampStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Steps serialize as their numeric label so exported tables key on the
// familiar token names (200, 300, …) rather than Rust variant names.

impl Serialize for RampStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.label())
    }
}

impl<'de> Deserialize<'de> for RampStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = u16::deserialize(deserializer)?;
        Self::from_label(label)
            .ok_or_else(|| de::Error::custom(format!("unknown ramp step label {label}")))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
