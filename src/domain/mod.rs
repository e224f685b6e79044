//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the normalized query coordinate (`SkyPosition`)
//! - the decoded grid row (`ExtinctionProfile`)
//! - the estimator output (`AsymptoteResult`)
//! - the portable JSON export schema (`ProfileFile`)

pub mod types;

pub use types::*;
