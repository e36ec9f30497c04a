//! WCAG relative luminance and contrast ratios.
//!
//! This is the numeric floor the whole engine stands on. Everything here is
//! `f64` and follows WCAG 2.0 exactly:
//!
//! - channels normalize to `[0, 1]` and linearize with the piecewise gamma
//!   branch at 0.03928
//! - luminance weights are 0.2126 / 0.7152 / 0.0722 for red/green/blue
//! - contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`, always ≥ 1
//!
//! Input validity is the caller's problem: an [`Rgb`] is valid by
//! construction, so there are no error paths in this module.

use rampkit_color::Rgb;
use serde::Serialize;

// ─── Thresholds ──────────────────────────────────────────────────────────────

/// Minimum ratio for AA normal text (and AAA large text).
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// Minimum ratio for AA large text and graphical objects.
pub const AA_LARGE_TEXT: f64 = 3.0;

// ─── Luminance ───────────────────────────────────────────────────────────────

/// Compute the relative luminance of a color per WCAG 2.0.
///
/// Returns a value in `[0.0, 1.0]` where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Linearize one 8-bit sRGB channel (remove gamma).
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in `[1.0, 21.0]`. Symmetric: the lighter luminance is
/// always the numerator regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── WCAG classification ─────────────────────────────────────────────────────

/// AA/AAA pass flags for one text tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRating {
    pub aa: bool,
    pub aaa: bool,
}

/// AA pass flag for graphical objects and UI components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphicRating {
    pub aa: bool,
}

/// The full WCAG classification of one contrast ratio.
///
/// Serializes as `{"normalText":{"aa":…,"aaa":…},"largeText":{…},"graphics":{"aa":…}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagRating {
    pub normal_text: TextRating,
    pub large_text: TextRating,
    pub graphics: GraphicRating,
}

impl WcagRating {
    /// Classify a contrast ratio against every WCAG tier.
    #[must_use]
    pub fn rate(ratio: f64) -> Self {
        Self {
            normal_text: TextRating {
                aa: ratio >= AA_NORMAL_TEXT,
                aaa: ratio >= AAA_NORMAL_TEXT,
            },
            large_text: TextRating {
                aa: ratio >= AA_LARGE_TEXT,
                aaa: ratio >= AA_NORMAL_TEXT,
            },
            graphics: GraphicRating {
                aa: ratio >= AA_LARGE_TEXT,
            },
        }
    }

    /// Whether every tier fails (ratio below 3.0).
    #[must_use]
    pub const fn fails_everything(self) -> bool {
        !self.normal_text.aa && !self.large_text.aa && !self.graphics.aa
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
