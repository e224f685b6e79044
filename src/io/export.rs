//! Result exports (CSV + JSON).
//!
//! The CSV export is one row per extinction cut (both bands); the JSON
//! export is the portable `ProfileFile` with everything a later comparison
//! or re-plot needs.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::QueryOutput;
use crate::domain::ProfileFile;
use crate::error::AppError;

/// Write the per-cut profile to CSV.
pub fn write_profile_csv(path: &Path, output: &QueryOutput) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create CSV export '{}': {e}",
            path.display()
        ))
    })?;

    writer
        .write_record([
            "radius_kpc",
            "radius_err",
            "a_ks_mag",
            "a_ks_err",
            "a_v_mag",
            "a_v_err",
        ])
        .map_err(|e| AppError::io(format!("Failed to write CSV export: {e}")))?;

    for (i, (rad, ext_ks)) in output.profile_ks.cuts().enumerate() {
        let ext_v = output.profile_v.extinctions[i];
        writer
            .write_record([
                rad.nominal().to_string(),
                rad.stderr().to_string(),
                ext_ks.nominal().to_string(),
                ext_ks.stderr().to_string(),
                ext_v.nominal().to_string(),
                ext_v.stderr().to_string(),
            ])
            .map_err(|e| AppError::io(format!("Failed to write CSV export: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to write CSV export: {e}")))?;

    Ok(())
}

/// Write the full query result as pretty JSON.
pub fn write_profile_json(path: &Path, output: &QueryOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create JSON export '{}': {e}",
            path.display()
        ))
    })?;

    let profile = ProfileFile {
        tool: "marshall".to_string(),
        position: output.position,
        profile_ks: output.profile_ks.clone(),
        profile_v: output.profile_v.clone(),
        asymptote: output.asymptote,
        z_height_pc: output.z_height_pc,
    };

    serde_json::to_writer_pretty(file, &profile)
        .map_err(|e| AppError::io(format!("Failed to write JSON export: {e}")))?;

    Ok(())
}
