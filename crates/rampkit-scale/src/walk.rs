//! Step walking — ordered search along the ramp for enough contrast.
//!
//! A walk starts at an anchor step (inclusive) and visits positions toward
//! one ramp extreme, skipping undefined steps, until it finds a color whose
//! full-opacity contrast against the surface meets the threshold.
//!
//! Exhaustion — reaching the ramp's end with nothing qualifying — is not
//! an error. It returns `None`, and every rule that walks has a documented
//! fallback chain for exactly that case.

use rampkit_color::Rgb;

use crate::contrast::contrast_ratio;
use crate::direction::Direction;
use crate::palette::Palette;
use crate::ramp::RampStep;

/// A qualifying step found by a walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkHit {
    /// The first step that met the threshold.
    pub step: RampStep,

    /// Its palette color, at full opacity.
    pub color: Rgb,

    /// Contrast of that color against the surface.
    pub ratio: f64,
}

/// Walk from `start` toward the extreme in `direction`, returning the
/// first defined step whose contrast against `surface` is at least
/// `threshold`, or `None` on exhaustion.
#[must_use]
pub fn walk_toward(
    start: RampStep,
    direction: Direction,
    palette: &Palette,
    surface: Rgb,
    threshold: f64,
) -> Option<WalkHit> {
    let delta = direction.step_delta();
    let mut index = start.index();

    loop {
        let step = RampStep::from_index(index)?;
        if let Some(color) = palette.get(step) {
            let ratio = contrast_ratio(color, surface);
            if ratio >= threshold {
                return Some(WalkHit { step, color, ratio });
            }
        }

        // checked_add_signed: walking off either ramp end terminates.
        index = index.checked_add_signed(delta)?;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
