//! Small pure helpers and browser shims used by the components.
//!
//! `scroll` wraps the window APIs so SSR builds compile to no-ops;
//! `pin_style` maps map-location data to colors, badges and glyphs.

pub mod pin_style;
pub mod scroll;
