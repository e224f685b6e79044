//! Presentation sinks for the extinction profile.
//!
//! - `ascii`: deterministic fixed-grid terminal rendering
//! - `svg`: optional SVG figure via plotters

pub mod ascii;
pub mod svg;

pub use ascii::render_ascii_profile;
