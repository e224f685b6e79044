//! Grid-file lookup and row decoding.
//!
//! The extinction map is a static CSV: one row per grid node, first row a
//! header. Each data row is
//!
//! ```text
//! lon, lat, <unused>, [rad, rad_err, ext, ext_err]*
//! ```
//!
//! where a blank radius field means "no measurement at this cut" and skips
//! the whole group of four.
//!
//! Design goals:
//! - **Index-keyed matching**: rows are matched on integer quarter-degree
//!   indices, never on float equality of the raw coordinate values.
//! - **Loud failures**: a position with no row is an explicit error, and a
//!   malformed field reports its file line.
//! - **Scoped acquisition**: the file is opened, scanned once, and closed
//!   before the pipeline proceeds.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{ExtinctionProfile, SkyPosition};
use crate::error::AppError;
use crate::math::UncertainValue;

/// Scan the grid file for the row at `position` and decode its profile.
pub fn lookup(path: &Path, position: &SkyPosition) -> Result<ExtinctionProfile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!(
            "Failed to open extinction map '{}': {e}",
            path.display()
        ))
    })?;

    lookup_from_reader(file, position).map_err(|e| match e.kind() {
        crate::error::ErrorKind::PositionNotFound => AppError::position_not_found(format!(
            "{e} (map file '{}')",
            path.display()
        )),
        _ => e,
    })
}

/// Scan an already-open grid source. Split out so tests can feed byte
/// buffers instead of files.
pub fn lookup_from_reader<R: Read>(
    source: R,
    position: &SkyPosition,
) -> Result<ExtinctionProfile, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(source);

    let want = (position.lon_index(), position.lat_index());

    for (i, record) in reader.records().enumerate() {
        // Header is row 1, first record is row 2.
        let line = i + 2;
        let record =
            record.map_err(|e| AppError::malformed(format!("Bad grid row at line {line}: {e}")))?;

        let lon = parse_field(&record, 0, line, "longitude")?;
        let lat = parse_field(&record, 1, line, "latitude")?;

        if (crate::coords::quarter_index(lon), crate::coords::quarter_index(lat)) == want {
            return decode_row(&record, line);
        }
    }

    Err(AppError::position_not_found(format!(
        "No grid node at l = {} deg, b = {} deg",
        position.longitude_deg, position.latitude_deg
    )))
}

/// Decode the repeating `[rad, rad_err, ext, ext_err]` groups of one row.
fn decode_row(record: &StringRecord, line: usize) -> Result<ExtinctionProfile, AppError> {
    let fields: Vec<&str> = record.iter().skip(3).collect();

    let mut radii = Vec::new();
    let mut extinctions = Vec::new();

    // A trailing partial group (fewer than 4 fields) is ignored.
    for group in fields.chunks_exact(4) {
        // Blank radius marks an unmeasured cut; skip the group as a unit.
        if group[0].is_empty() {
            continue;
        }

        let rad = parse_group_field(group[0], line, "radius")?;
        let rad_err = parse_group_field(group[1], line, "radius error")?;
        let ext = parse_group_field(group[2], line, "extinction")?;
        let ext_err = parse_group_field(group[3], line, "extinction error")?;

        radii.push(UncertainValue::new(rad, rad_err.abs()));
        extinctions.push(UncertainValue::new(ext, ext_err.abs()));
    }

    Ok(ExtinctionProfile { radii, extinctions })
}

fn parse_field(record: &StringRecord, idx: usize, line: usize, what: &str) -> Result<f64, AppError> {
    let raw = record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::malformed(format!("Missing {what} at line {line}")))?;
    parse_group_field(raw, line, what)
}

fn parse_group_field(raw: &str, line: usize, what: &str) -> Result<f64, AppError> {
    raw.parse::<f64>().map_err(|_| {
        AppError::malformed(format!("Invalid {what} '{raw}' at line {line}"))
    })
}
