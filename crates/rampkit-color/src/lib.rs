// SPDX-License-Identifier: MIT
//
// rampkit-color — 8-bit sRGB color primitives for rampkit.
//
// The scale engine works in a deliberately simple color model: three 8-bit
// sRGB channels, optionally paired with a floating-point opacity at the
// call site. There is no ICC handling, no gamut mapping, and no perceptual
// color space here — the WCAG contrast math that sits on top of these
// primitives is defined directly on 8-bit sRGB, so anything richer would
// only add conversion error between the editor's swatches and the ratios
// we report for them.

pub mod color;

pub use color::{ParseColorError, Rgb};
