//! The eight scale rules.
//!
//! For one surface color at one ramp step, each rule derives a single
//! dependent color solving its own contrast constraint:
//!
//! | Rule      | Constraint                                                    |
//! |-----------|---------------------------------------------------------------|
//! | `Surface` | the surface itself                                            |
//! | `High`    | the full-opacity contrasting extreme                          |
//! | `Low`     | the extreme blended to exactly 4.5:1 (with an escape hatch)   |
//! | `Medium`  | the extreme at the floored midpoint of High's and Low's alpha |
//! | `Bold`    | first ramp step from the anchor with ≥ 3.0:1                  |
//! | `BoldA11y`| first ramp step from the anchor with ≥ 4.5:1                  |
//! | `Heavy`   | a stronger variant of Bold, direction-dependent               |
//! | `Minimal` | a fixed two-step offset from the surface                      |
//!
//! Evaluation order matters *within* one step: Low feeds Medium's alpha
//! formula, and Bold/BoldA11y feed Heavy. Results for distinct steps are
//! independent.
//!
//! Several constants here (the Heavy step-800 cap, its 3-step distance
//! cutoff, the Medium floor-to-1% rounding) are ported product rules.
//! They are intentionally preserved as-is, not re-derived.

use rampkit_color::Rgb;
use serde::Serialize;

use crate::alpha;
use crate::contrast::{AA_LARGE_TEXT, AA_NORMAL_TEXT, WcagRating, contrast_ratio};
use crate::direction::Direction;
use crate::palette::Palette;
use crate::ramp::RampStep;
use crate::walk;

/// Heavy (toward-dark) never resolves darker than this step.
const HEAVY_DARK_CAP: RampStep = RampStep::S800;

/// Heavy (toward-light) copies BoldA11y only when it resolved within this
/// many ramp positions of the surface.
const HEAVY_DISTANCE_CUTOFF: usize = 3;

/// Minimal's fixed offset from the surface's own step.
const MINIMAL_OFFSET: isize = 2;

// ─── ScaleRole ───────────────────────────────────────────────────────────────

/// Names of the eight derived colors, for consumers that iterate roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleRole {
    Surface,
    High,
    Medium,
    Low,
    Bold,
    BoldA11y,
    Heavy,
    Minimal,
}

impl ScaleRole {
    /// Every role, in evaluation order.
    pub const ALL: [Self; 8] = [
        Self::Surface,
        Self::High,
        Self::Low,
        Self::Medium,
        Self::Bold,
        Self::BoldA11y,
        Self::Heavy,
        Self::Minimal,
    ];
}

// ─── ScaleResult ─────────────────────────────────────────────────────────────

/// One rule's output for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleResult {
    /// The contrasting-color overlay before compositing.
    pub base: Rgb,

    /// Opacity applied to `base` over the surface; `None` means fully
    /// opaque (the color is used directly, no blend).
    pub alpha: Option<f64>,

    /// `base` composited over the surface; equals `base` when opaque.
    pub resolved: Rgb,

    /// The ramp step that supplied the base hue. May differ from the
    /// surface's own step, and names the extreme when a synthetic
    /// black/white fallback stood in for it.
    pub source: RampStep,

    /// Contrast of `resolved` against the originating surface.
    pub ratio: f64,

    /// WCAG classification of `ratio`.
    pub wcag: WcagRating,

    /// Set when the rule could not meet its contrast target and returned
    /// its best available candidate instead.
    pub degraded: bool,
}

impl ScaleResult {
    /// A full-opacity result.
    fn opaque(base: Rgb, source: RampStep, surface: Rgb) -> Self {
        let ratio = contrast_ratio(base, surface);
        Self {
            base,
            alpha: None,
            resolved: base,
            source,
            ratio,
            wcag: WcagRating::rate(ratio),
            degraded: false,
        }
    }

    /// An alpha-blended result; resolves the blend and rates it.
    fn with_alpha(base: Rgb, alpha: f64, source: RampStep, surface: Rgb) -> Self {
        let resolved = base.over(surface, alpha);
        let ratio = contrast_ratio(resolved, surface);
        Self {
            base,
            alpha: Some(alpha),
            resolved,
            source,
            ratio,
            wcag: WcagRating::rate(ratio),
            degraded: false,
        }
    }

    const fn degraded(self) -> Self {
        Self {
            degraded: true,
            ..self
        }
    }
}

// ─── ScaleSet ────────────────────────────────────────────────────────────────

/// All eight results for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSet {
    pub surface: ScaleResult,
    pub high: ScaleResult,
    pub medium: ScaleResult,
    pub low: ScaleResult,
    pub bold: ScaleResult,
    pub bold_a11y: ScaleResult,
    pub heavy: ScaleResult,
    pub minimal: ScaleResult,
}

impl ScaleSet {
    /// Look up one role's result.
    #[must_use]
    pub const fn get(&self, role: ScaleRole) -> &ScaleResult {
        match role {
            ScaleRole::Surface => &self.surface,
            ScaleRole::High => &self.high,
            ScaleRole::Medium => &self.medium,
            ScaleRole::Low => &self.low,
            ScaleRole::Bold => &self.bold,
            ScaleRole::BoldA11y => &self.bold_a11y,
            ScaleRole::Heavy => &self.heavy,
            ScaleRole::Minimal => &self.minimal,
        }
    }
}

// ─── Rule evaluation ─────────────────────────────────────────────────────────

/// Evaluate all eight rules for the surface at `step`.
///
/// Returns `None` when the palette has no color at `step`. Otherwise the
/// record is always complete — every rule has a fallback chain, so no
/// valid surface ever produces a partial result.
#[must_use]
pub fn derive_set(palette: &Palette, step: RampStep, primary: RampStep) -> Option<ScaleSet> {
    let surface = palette.get(step)?;
    let ctx = Ctx {
        palette,
        step,
        surface,
        primary,
        direction: Direction::for_surface(surface),
    };

    // Ordering dependencies: Low before Medium, Bold/BoldA11y before Heavy.
    let surface_result = ScaleResult::opaque(surface, step, surface);
    let high = ctx.high();
    let low = ctx.low(&high);
    let medium = ctx.medium(&high, &low);
    let bold = ctx.contrasting(AA_LARGE_TEXT);
    let bold_a11y = ctx.contrasting(AA_NORMAL_TEXT);
    let heavy = ctx.heavy(&bold, &bold_a11y);
    let minimal = ctx.minimal();

    Some(ScaleSet {
        surface: surface_result,
        high,
        medium,
        low,
        bold,
        bold_a11y,
        heavy,
        minimal,
    })
}

/// Everything one step's rule evaluation reads.
struct Ctx<'a> {
    palette: &'a Palette,
    step: RampStep,
    surface: Rgb,
    primary: RampStep,
    direction: Direction,
}

impl Ctx<'_> {
    /// High: the full-opacity extreme on the contrasting side, pure
    /// black/white when that step is undefined.
    fn high(&self) -> ScaleResult {
        let extreme = self.direction.extreme();
        let base = self.palette.get(extreme).unwrap_or(self.direction.fallback());
        ScaleResult::opaque(base, extreme, self.surface)
    }

    /// Low: the High color blended to hit 4.5:1 as closely as possible.
    ///
    /// Escape rule: when even full opacity falls short of 4.5, a real
    /// palette color beats a synthetic blend — scan *every* defined step
    /// and take the highest-contrast one. If none reaches 4.5 either, that
    /// best step is still returned, flagged degraded.
    fn low(&self, high: &ScaleResult) -> ScaleResult {
        if high.ratio >= AA_NORMAL_TEXT {
            let fit = alpha::solve_nearest(high.base, self.surface, AA_NORMAL_TEXT);
            return ScaleResult::with_alpha(high.base, fit.alpha, high.source, self.surface);
        }

        // The surface itself is defined, so the scan never comes up empty.
        let mut best = (self.step, self.surface, 1.0f64);
        for (step, color) in self.palette.defined() {
            let ratio = contrast_ratio(color, self.surface);
            if ratio > best.2 {
                best = (step, color, ratio);
            }
        }

        let (source, color, ratio) = best;
        let result = ScaleResult::opaque(color, source, self.surface);
        if result.ratio >= AA_NORMAL_TEXT {
            result
        } else {
            tracing::warn!(
                surface = %self.step,
                best = %source,
                ratio,
                "no ramp step reaches 4.5:1 against this surface; low color is degraded"
            );
            result.degraded()
        }
    }

    /// Medium: the High color at the midpoint of full opacity and Low's
    /// alpha, floored to the nearest 1%. A Low with no alpha (escape path)
    /// counts as 1.0.
    fn medium(&self, high: &ScaleResult, low: &ScaleResult) -> ScaleResult {
        let low_alpha = low.alpha.unwrap_or(1.0);
        let alpha = ((1.0 + low_alpha) / 2.0 * 100.0).floor() / 100.0;
        ScaleResult::with_alpha(high.base, alpha, high.source, self.surface)
    }

    /// Bold / BoldA11y: walk from the anchor toward the contrasting
    /// extreme for the first step meeting `threshold`; on exhaustion check
    /// the extreme itself, then fall back to a synthetic black/white blend
    /// solved to guarantee the threshold.
    fn contrasting(&self, threshold: f64) -> ScaleResult {
        if let Some(hit) =
            walk::walk_toward(self.primary, self.direction, self.palette, self.surface, threshold)
        {
            return ScaleResult::opaque(hit.color, hit.step, self.surface);
        }

        let extreme = self.direction.extreme();
        if let Some(color) = self.palette.get(extreme) {
            if contrast_ratio(color, self.surface) >= threshold {
                return ScaleResult::opaque(color, extreme, self.surface);
            }
        }

        let fallback = self.direction.fallback();
        let fit = alpha::solve_min(fallback, self.surface, threshold);
        let result = ScaleResult::with_alpha(fallback, fit.alpha, extreme, self.surface);
        if result.ratio >= threshold {
            result
        } else {
            result.degraded()
        }
    }

    /// Heavy: direction-dependent strengthening of Bold.
    ///
    /// Toward-dark surfaces take the index midpoint of Bold's source and
    /// the dark extreme, capped at step 800 toward the light side.
    /// Toward-light surfaces copy BoldA11y unless it resolved more than
    /// three steps from the surface, in which case the light extreme
    /// stands in.
    fn heavy(&self, bold: &ScaleResult, bold_a11y: &ScaleResult) -> ScaleResult {
        match self.direction {
            Direction::TowardDark => {
                let midpoint = bold.source.midpoint(RampStep::DARK_EXTREME);
                let step = midpoint.min(HEAVY_DARK_CAP);
                // Same substitution policy as High when the step is unset.
                let base = self.palette.get(step).unwrap_or(self.direction.fallback());
                ScaleResult::opaque(base, step, self.surface)
            }
            Direction::TowardLight => {
                if bold_a11y.source.distance(self.step) > HEAVY_DISTANCE_CUTOFF {
                    let extreme = RampStep::LIGHT_EXTREME;
                    let base = self.palette.get(extreme).unwrap_or(Rgb::WHITE);
                    ScaleResult::opaque(base, extreme, self.surface)
                } else {
                    *bold_a11y
                }
            }
        }
    }

    /// Minimal: a two-step offset from the surface's own position — dark-
    /// half surfaces move lighter, light-half surfaces darker, clamped to
    /// the ramp bounds. An undefined target keeps sliding the same way;
    /// with nothing defined out there, the surface itself stands in.
    fn minimal(&self) -> ScaleResult {
        let dark_half = self.step.index() >= RampStep::COUNT / 2;
        let delta = if dark_half { -MINIMAL_OFFSET } else { MINIMAL_OFFSET };

        let mut current = Some(self.step.offset(delta));
        while let Some(step) = current {
            if let Some(color) = self.palette.get(step) {
                return ScaleResult::opaque(color, step, self.surface);
            }
            current = step
                .index()
                .checked_add_signed(delta.signum())
                .and_then(RampStep::from_index);
        }

        ScaleResult::opaque(self.surface, self.step, self.surface)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    /// A blue ramp, light to dark, with every step defined.
    fn full_ramp() -> Palette {
        Palette::from_hex_pairs([
            (RampStep::S200, "#eff6ff"),
            (RampStep::S300, "#dbeafe"),
            (RampStep::S400, "#bfdbfe"),
            (RampStep::S500, "#93c5fd"),
            (RampStep::S600, "#60a5fa"),
            (RampStep::S700, "#3b82f6"),
            (RampStep::S800, "#2563eb"),
            (RampStep::S900, "#1d4ed8"),
            (RampStep::S1000, "#1e40af"),
            (RampStep::S1100, "#1e3a8a"),
            (RampStep::S1200, "#172554"),
            (RampStep::S1500, "#101c3f"),
            (RampStep::S2000, "#0a1129"),
            (RampStep::S2500, "#050814"),
        ])
        .unwrap()
    }

    // ── Surface ─────────────────────────────────────────────────────

    #[test]
    fn surface_rule_is_identity() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S500, RampStep::S800).unwrap();

        assert_eq!(set.surface.resolved, palette.get(RampStep::S500).unwrap());
        assert_eq!(set.surface.source, RampStep::S500);
        assert_eq!(set.surface.alpha, None);
        assert!(approx_eq(set.surface.ratio, 1.0, 1e-9));
        assert!(set.surface.wcag.fails_everything());
    }

    #[test]
    fn undefined_surface_yields_none() {
        let mut palette = full_ramp();
        palette.clear(RampStep::S500);
        assert!(derive_set(&palette, RampStep::S500, RampStep::S800).is_none());
    }

    // ── High ────────────────────────────────────────────────────────

    #[test]
    fn high_uses_the_contrasting_extreme() {
        let palette = full_ramp();
        // S200 is near-white: contrasts toward dark, so High is S2500.
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();
        assert_eq!(set.high.source, RampStep::S2500);
        assert_eq!(set.high.base, palette.get(RampStep::S2500).unwrap());
        assert_eq!(set.high.alpha, None);

        // S2500 is near-black: contrasts toward light, so High is S200.
        let set = derive_set(&palette, RampStep::S2500, RampStep::S800).unwrap();
        assert_eq!(set.high.source, RampStep::S200);
    }

    #[test]
    fn high_substitutes_black_when_extreme_undefined() {
        let mut palette = full_ramp();
        palette.clear(RampStep::S2500);
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();
        assert_eq!(set.high.base, Rgb::BLACK);
        assert_eq!(set.high.source, RampStep::S2500);
        assert!(set.high.ratio > 18.0);
    }

    // ── Low / Medium ────────────────────────────────────────────────

    #[test]
    fn low_blends_to_four_point_five() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();

        let alpha = set.low.alpha.expect("low should use the alpha path");
        assert!(alpha < 1.0);
        assert!(
            approx_eq(set.low.ratio, 4.5, 0.1),
            "low ratio {} not near 4.5",
            set.low.ratio
        );
        assert_eq!(set.low.source, set.high.source);
        assert!(!set.low.degraded);
    }

    #[test]
    fn low_escape_prefers_a_real_step() {
        // Surface and extreme are close grays: full opacity tops out near
        // 2.6:1, so Low must scan the ramp instead of blending.
        let palette = Palette::from_hex_pairs([
            (RampStep::S900, "#999999"),
            (RampStep::S1100, "#111111"),
            (RampStep::S2500, "#555555"),
        ])
        .unwrap();
        let set = derive_set(&palette, RampStep::S900, RampStep::S900).unwrap();

        assert_eq!(set.low.alpha, None);
        assert_eq!(set.low.source, RampStep::S1100);
        assert!(set.low.ratio >= 4.5);
        assert!(!set.low.degraded);
    }

    #[test]
    fn low_degrades_when_no_step_reaches_threshold() {
        let palette = Palette::from_hex_pairs([
            (RampStep::S900, "#999999"),
            (RampStep::S2500, "#555555"),
        ])
        .unwrap();
        let set = derive_set(&palette, RampStep::S900, RampStep::S900).unwrap();

        assert!(set.low.degraded);
        assert_eq!(set.low.alpha, None);
        assert_eq!(set.low.source, RampStep::S2500);
        assert!(set.low.ratio < 4.5);
        // Medium then treats Low's alpha as 1.0.
        assert!(approx_eq(set.medium.alpha.unwrap(), 1.0, 1e-9));
    }

    #[test]
    fn medium_alpha_is_floored_midpoint() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();

        let low_alpha = set.low.alpha.unwrap();
        let expected = ((1.0 + low_alpha) / 2.0 * 100.0).floor() / 100.0;
        assert!(approx_eq(set.medium.alpha.unwrap(), expected, 1e-9));
        assert_eq!(set.medium.base, set.high.base);
    }

    #[test]
    fn alpha_ordering_high_medium_low() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S300, RampStep::S800).unwrap();

        let high_alpha = set.high.alpha.unwrap_or(1.0);
        let medium_alpha = set.medium.alpha.unwrap_or(1.0);
        let low_alpha = set.low.alpha.unwrap_or(1.0);
        assert!(high_alpha >= medium_alpha);
        assert!(medium_alpha >= low_alpha);
    }

    // ── Bold / BoldA11y ─────────────────────────────────────────────

    #[test]
    fn bold_meets_three_to_one() {
        let palette = full_ramp();
        for step in [RampStep::S200, RampStep::S800, RampStep::S2500] {
            let set = derive_set(&palette, step, RampStep::S800).unwrap();
            assert!(
                set.bold.ratio >= 3.0,
                "bold at {step} only reached {}",
                set.bold.ratio
            );
        }
    }

    #[test]
    fn bold_a11y_meets_four_point_five() {
        let palette = full_ramp();
        for step in [RampStep::S200, RampStep::S800, RampStep::S2500] {
            let set = derive_set(&palette, step, RampStep::S800).unwrap();
            assert!(
                set.bold_a11y.ratio >= 4.5,
                "boldA11y at {step} only reached {}",
                set.bold_a11y.ratio
            );
        }
    }

    #[test]
    fn bold_walks_from_the_anchor() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();
        // Walking darker from S800, the anchor itself already clears 3:1
        // against the near-white surface.
        assert_eq!(set.bold.source, RampStep::S800);
        assert!(set.bold.source.index() >= RampStep::S800.index());
    }

    #[test]
    fn bold_falls_back_to_synthetic_blend() {
        // Only the surface is defined; the walk exhausts and the extreme
        // is unset, so Bold blends pure black to exactly 3:1.
        let palette = Palette::from_hex_pairs([(RampStep::S300, "#fafafa")]).unwrap();
        let set = derive_set(&palette, RampStep::S300, RampStep::S800).unwrap();

        assert_eq!(set.bold.base, Rgb::BLACK);
        assert_eq!(set.bold.source, RampStep::S2500);
        assert!(set.bold.alpha.is_some());
        assert!(set.bold.ratio >= 3.0);
        assert!(!set.bold.degraded);
    }

    #[test]
    fn bold_a11y_walks_independently_of_bold() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();
        // Both walks start at the primary anchor; BoldA11y's stricter
        // threshold can only land at or past Bold's step.
        assert!(set.bold_a11y.source.index() >= set.bold.source.index());
    }

    // ── Heavy ───────────────────────────────────────────────────────

    #[test]
    fn heavy_toward_dark_caps_at_800() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S200, RampStep::S800).unwrap();
        // Midpoint of Bold's source and the dark extreme always sits at or
        // past step 800, so the ported cap pins the result there.
        assert_eq!(set.heavy.source, RampStep::S800);
        assert_eq!(set.heavy.base, palette.get(RampStep::S800).unwrap());
    }

    #[test]
    fn heavy_toward_dark_substitutes_when_step_undefined() {
        let mut palette = full_ramp();
        palette.clear(RampStep::S800);
        let set = derive_set(&palette, RampStep::S200, RampStep::S900).unwrap();
        assert_eq!(set.heavy.source, RampStep::S800);
        assert_eq!(set.heavy.base, Rgb::BLACK);
    }

    #[test]
    fn heavy_toward_light_copies_bold_a11y_when_near() {
        // A sharp lightness cliff right next to the surface: the walk from
        // the anchor finds 4.5:1 two steps away, so Heavy copies BoldA11y.
        let palette = Palette::from_hex_pairs([
            (RampStep::S600, "#f0f0f0"),
            (RampStep::S800, "#555555"),
        ])
        .unwrap();
        let set = derive_set(&palette, RampStep::S800, RampStep::S800).unwrap();

        assert_eq!(set.bold_a11y.source, RampStep::S600);
        assert!(set.bold_a11y.source.distance(RampStep::S800) <= 3);
        assert_eq!(set.heavy, set.bold_a11y);
    }

    #[test]
    fn heavy_toward_light_substitutes_extreme_when_far() {
        let palette = full_ramp();
        // Dark surface at S2500 with a mid-ramp anchor: the lightest step
        // with 4.5:1 sits more than 3 steps away, so Heavy jumps to S200.
        let set = derive_set(&palette, RampStep::S2500, RampStep::S800).unwrap();
        assert!(set.bold_a11y.source.distance(RampStep::S2500) > 3);
        assert_eq!(set.heavy.source, RampStep::S200);
        assert_eq!(set.heavy.base, palette.get(RampStep::S200).unwrap());
    }

    // ── Minimal ─────────────────────────────────────────────────────

    #[test]
    fn minimal_offsets_two_steps() {
        let palette = full_ramp();

        // Light-half surface moves two steps darker.
        let set = derive_set(&palette, RampStep::S400, RampStep::S800).unwrap();
        assert_eq!(set.minimal.source, RampStep::S600);

        // Dark-half surface moves two steps lighter.
        let set = derive_set(&palette, RampStep::S1500, RampStep::S800).unwrap();
        assert_eq!(set.minimal.source, RampStep::S1100);
    }

    #[test]
    fn minimal_clamps_at_ramp_bounds() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S2500, RampStep::S800).unwrap();
        assert_eq!(set.minimal.source, RampStep::S1500);
    }

    #[test]
    fn minimal_slides_past_undefined_steps() {
        let mut palette = full_ramp();
        palette.clear(RampStep::S600);
        let set = derive_set(&palette, RampStep::S400, RampStep::S800).unwrap();
        assert_eq!(set.minimal.source, RampStep::S700);
    }

    #[test]
    fn minimal_falls_back_to_the_surface() {
        // Nothing defined darker than the surface: Minimal settles for
        // the surface itself.
        let palette = Palette::from_hex_pairs([(RampStep::S400, "#bfdbfe")]).unwrap();
        let set = derive_set(&palette, RampStep::S400, RampStep::S800).unwrap();
        assert_eq!(set.minimal.source, RampStep::S400);
        assert_eq!(set.minimal.resolved, palette.get(RampStep::S400).unwrap());
    }

    // ── Roles ───────────────────────────────────────────────────────

    #[test]
    fn role_accessor_matches_fields() {
        let palette = full_ramp();
        let set = derive_set(&palette, RampStep::S500, RampStep::S800).unwrap();
        assert_eq!(*set.get(ScaleRole::Surface), set.surface);
        assert_eq!(*set.get(ScaleRole::BoldA11y), set.bold_a11y);
        assert_eq!(ScaleRole::ALL.len(), 8);
    }
}
