//! Contrast-direction resolution.
//!
//! Every rule needs to know which end of the ramp plays the "contrasting
//! color" role for a given surface: a light surface contrasts toward the
//! dark end, a dark surface toward the light end. The resolver compares
//! the surface against pure black and pure white and picks the stronger
//! side; the same [`Direction`] value also names the synthetic fallback
//! (black or white) a rule substitutes when the extreme step is undefined.

use rampkit_color::Rgb;
use serde::Serialize;

use crate::contrast::contrast_ratio;
use crate::ramp::RampStep;

// ─── Direction ───────────────────────────────────────────────────────────────

/// Which lightness extreme a surface's contrasting color lies toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// The surface is light; contrasting colors come from the dark end
    /// (step 2500, falling back to pure black).
    TowardDark,

    /// The surface is dark; contrasting colors come from the light end
    /// (step 200, falling back to pure white).
    TowardLight,
}

impl Direction {
    /// Resolve the direction for a surface color.
    ///
    /// Compares the surface's contrast against pure black versus pure
    /// white; the stronger side wins. A perfect tie resolves `TowardDark`.
    #[must_use]
    pub fn for_surface(surface: Rgb) -> Self {
        let against_black = contrast_ratio(surface, Rgb::BLACK);
        let against_white = contrast_ratio(surface, Rgb::WHITE);
        if against_black >= against_white {
            Self::TowardDark
        } else {
            Self::TowardLight
        }
    }

    /// The ramp extreme on the contrasting side.
    #[must_use]
    pub const fn extreme(self) -> RampStep {
        match self {
            Self::TowardDark => RampStep::DARK_EXTREME,
            Self::TowardLight => RampStep::LIGHT_EXTREME,
        }
    }

    /// The synthetic color substituted when the extreme step is undefined.
    #[must_use]
    pub const fn fallback(self) -> Rgb {
        match self {
            Self::TowardDark => Rgb::BLACK,
            Self::TowardLight => Rgb::WHITE,
        }
    }

    /// Index delta for walking one step in this direction.
    #[must_use]
    pub const fn step_delta(self) -> isize {
        match self {
            Self::TowardDark => 1,
            Self::TowardLight => -1,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
