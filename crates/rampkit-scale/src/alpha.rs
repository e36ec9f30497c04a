//! Opacity solving — find the alpha that hits a target contrast ratio.
//!
//! For a fixed foreground/surface pair, the contrast of
//! `foreground.over(surface, alpha)` against the surface grows
//! monotonically with alpha: alpha 0 is the surface itself (ratio 1),
//! alpha 1 is the foreground's own full-opacity ratio. That makes the
//! search a bounded binary search.
//!
//! Two modes serve the rules above:
//!
//! - [`solve_min`] — the smallest alpha whose ratio meets or exceeds a
//!   floor. Guarantee-style rules use this; it never undershoots a
//!   reachable floor.
//! - [`solve_nearest`] — the alpha whose ratio lands closest to an exact
//!   target, above or below.
//!
//! Neither mode can fail. If the target is unreachable even at full
//! opacity, the best fit found is returned — fallback policy is the
//! calling rule's job.

use rampkit_color::Rgb;

use crate::contrast::contrast_ratio;

/// Convergence tolerance on alpha.
const TOLERANCE: f64 = 0.001;

/// Hard cap on bisection steps; [0, 1] at this depth is far below
/// `TOLERANCE` anyway.
const MAX_ITERATIONS: u32 = 32;

// ─── AlphaFit ────────────────────────────────────────────────────────────────

/// The outcome of one alpha search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaFit {
    /// The solved opacity in `[0, 1]`.
    pub alpha: f64,

    /// The foreground composited over the surface at `alpha`.
    pub color: Rgb,

    /// Contrast of `color` against the surface.
    pub ratio: f64,
}

impl AlphaFit {
    /// Evaluate a candidate alpha for a foreground/surface pair.
    fn at(foreground: Rgb, surface: Rgb, alpha: f64) -> Self {
        let color = foreground.over(surface, alpha);
        Self {
            alpha,
            color,
            ratio: contrast_ratio(color, surface),
        }
    }
}

// ─── Solvers ─────────────────────────────────────────────────────────────────

/// Find the smallest alpha whose blended contrast meets or exceeds `floor`.
///
/// If even full opacity cannot reach `floor`, returns the alpha-1.0 fit
/// (the closest achievable); callers detect that case via `ratio < floor`.
#[must_use]
pub fn solve_min(foreground: Rgb, surface: Rgb, floor: f64) -> AlphaFit {
    let full = AlphaFit::at(foreground, surface, 1.0);
    if full.ratio < floor {
        return full;
    }

    // Invariant: `hi` always meets the floor, `lo` does not.
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    let mut best = full;

    for _ in 0..MAX_ITERATIONS {
        if hi - lo <= TOLERANCE {
            break;
        }
        let mid = f64::midpoint(lo, hi);
        let fit = AlphaFit::at(foreground, surface, mid);
        if fit.ratio >= floor {
            best = fit;
            hi = mid;
        } else {
            lo = mid;
        }
    }

    best
}

/// Find the alpha whose blended contrast lands nearest to `target`.
///
/// Unlike [`solve_min`] the result may sit slightly below the target when
/// the closest quantized blend does.
#[must_use]
pub fn solve_nearest(foreground: Rgb, surface: Rgb, target: f64) -> AlphaFit {
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;

    let mut best = AlphaFit::at(foreground, surface, 1.0);
    let mut best_dist = (best.ratio - target).abs();

    for _ in 0..MAX_ITERATIONS {
        if hi - lo <= TOLERANCE {
            break;
        }
        let mid = f64::midpoint(lo, hi);
        let fit = AlphaFit::at(foreground, surface, mid);

        let dist = (fit.ratio - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best = fit;
        }

        if fit.ratio < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    best
}

// ─── Tests ───────────────────────────────────────────────────────────────────
