//! Shared query pipeline.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! normalize -> grid lookup -> band conversion -> asymptote -> z-height
//!
//! Front-ends (CLI today, batch drivers tomorrow) then focus on
//! presentation. Each run is an independent pure computation: no state
//! survives between queries and the grid file is re-read every time.

use crate::app::QueryConfig;
use crate::domain::{AsymptoteResult, ExtinctionProfile, SkyPosition};
use crate::error::AppError;

/// All computed outputs of a single query.
#[derive(Debug, Clone)]
pub struct QueryOutput {
    /// The sight line snapped to the grid.
    pub position: SkyPosition,
    /// Ks-band profile as decoded from the grid row.
    pub profile_ks: ExtinctionProfile,
    /// Visual-band profile (`A_Ks = 0.114 * A_V`).
    pub profile_v: ExtinctionProfile,
    /// Flattening point of the visual-band profile, if any.
    pub asymptote: AsymptoteResult,
    /// z-offset from the galactic plane at the asymptote distance, in pc.
    pub z_height_pc: Option<f64>,
}

/// Execute the full query pipeline and return the computed outputs.
pub fn run_query(config: &QueryConfig) -> Result<QueryOutput, AppError> {
    // 1) Snap the requested sight line onto the grid.
    let position = crate::coords::normalize(config.longitude_deg, config.latitude_deg)?;

    // 2) Find and decode the matching grid row.
    let profile_ks = crate::io::ingest::lookup(&config.map_path, &position)?;

    // 3) Convert to the visual band and estimate the asymptote.
    let profile_v = crate::estimate::to_visual_band(&profile_ks);
    let asymptote = crate::estimate::find_asymptote(&profile_ks);

    // 4) Derived z-height, only meaningful when an asymptote was found.
    let z_height_pc = asymptote
        .distance
        .map(|d| crate::estimate::z_height_pc(d.nominal(), position.latitude_deg));

    Ok(QueryOutput {
        position,
        profile_ks,
        profile_v,
        asymptote,
        z_height_pc,
    })
}
