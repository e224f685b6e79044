//! `marshall-ext` library crate.
//!
//! The binary (`marshall`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., batch drivers, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod coords;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
