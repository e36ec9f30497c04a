// SPDX-License-Identifier: MIT
//
// rampkit — accessible color-scale derivation for design-token ramps.
//
// This is the facade crate that wires the workspace together:
//
//   rampkit-color → the 8-bit sRGB primitives (parsing, compositing)
//   rampkit-scale → the derivation engine (contrast math, the eight rules)
//
// A caller hands `build_table` a palette snapshot (14 ramp steps, each
// optionally bound to a color) plus a primary anchor step, and gets back
// a complete lookup table: for every defined surface, the eight derived
// colors with their contrast ratios and WCAG classifications.
//
//   Palette + anchor → build_table → ScaleTable → swatches / token export
//
// Everything is pure, synchronous computation. The editing surface that
// mutates palettes, the renderer that paints badges, and the serializers
// that flatten tables into token documents all live elsewhere and only
// consume these types.

pub use rampkit_color::{ParseColorError, Rgb};
pub use rampkit_scale::{
    Direction, Palette, RampStep, ScaleResult, ScaleRole, ScaleSet, ScaleTable, WcagRating,
    build_table, contrast_ratio, relative_luminance,
};
