//! Vertical timeline layout.
//!
//! # Responsibility
//! - Map experience date ranges onto a fixed pixel height.
//! - Pack overlapping blocks into side-by-side lanes.
//! - Emit year markers for the padded date span.
//!
//! # Invariants
//! - Layout is a pure function of records, `now` and [`LayoutConfig`].
//! - The most recent instant maps to offset 0 (top of the timeline).
//! - Every block is at least `min_block_height` pixels tall.

pub mod config;
pub mod layout;

pub use config::LayoutConfig;
pub use layout::{compute_timeline, TimelineBlock, TimelineLayout, TimelineSpan, YearMarker};
