//! # rampkit-scale — accessible color-scale derivation
//!
//! Given one "surface" color from a 14-step ramp, derives the eight
//! dependent colors a design system needs against that surface — each one
//! solving a distinct WCAG contrast constraint — and assembles the results
//! for every step of the ramp into a single lookup table.
//!
//! # Architecture
//!
//! ```text
//! Palette + primary step
//!     │
//!     ▼
//! table.rs:     one pass over the ramp, one ScaleSet per defined surface
//!     │
//!     ▼
//! rules.rs:     the eight named rules (Surface, High, Medium, Low,
//!               Bold, BoldA11y, Heavy, Minimal) with their fallbacks
//!     │
//!     ├─▶ direction.rs:  which ramp extreme contrasts with the surface
//!     ├─▶ walk.rs:       ordered step search from an anchor
//!     ├─▶ alpha.rs:      opacity solving for a target contrast ratio
//!     │
//!     ▼
//! contrast.rs:  WCAG relative luminance and contrast ratios (pure math)
//! ```
//!
//! The whole engine is synchronous, allocation-light, pure computation:
//! `build_table` is a deterministic function of `(palette, primary)` with
//! no clock, randomness, or shared state. Callers that want caching can
//! memoize externally on the inputs.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Contrast thresholds and ramp labels are self-describing numbers.
#![allow(clippy::unreadable_literal)]

pub mod alpha;
pub mod contrast;
pub mod direction;
pub mod palette;
pub mod ramp;
pub mod rules;
pub mod table;
pub mod walk;

pub use contrast::{WcagRating, contrast_ratio, relative_luminance};
pub use direction::Direction;
pub use palette::Palette;
pub use ramp::RampStep;
pub use rules::{ScaleResult, ScaleRole, ScaleSet};
pub use table::{ScaleTable, build_table};
