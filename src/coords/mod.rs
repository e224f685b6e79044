//! Coordinate normalization onto the map's fixed angular grid.
//!
//! The Marshall et al. (2006) map covers `|l| <= 100°`, `|b| <= 10°` at a
//! fixed 0.25° sampling. A query coordinate is:
//!
//! 1. reduced mod 360 and mapped to the signed hemisphere form for validation
//! 2. rejected if it falls outside the map window
//! 3. snapped to the nearest grid node
//! 4. re-expressed in the file's `0..360` longitude convention
//!
//! Everything here is pure; the same inputs always produce the same node.

use crate::domain::SkyPosition;
use crate::error::AppError;

/// Angular spacing of the map grid, in degrees.
pub const GRID_STEP_DEG: f64 = 0.25;
/// The map covers `|l| <= 100°` (signed form).
pub const LON_LIMIT_DEG: f64 = 100.0;
/// The map covers `|b| <= 10°`.
pub const LAT_LIMIT_DEG: f64 = 10.0;

/// Map an arbitrary `(l, b)` pair onto the nearest valid grid node.
///
/// Fails with an out-of-range error when the sight line is outside the map
/// window; no quantization happens in that case.
pub fn normalize(lon_deg: f64, lat_deg: f64) -> Result<SkyPosition, AppError> {
    let mut lon = lon_deg.rem_euclid(360.0);
    if lon > 180.0 {
        lon -= 360.0;
    }

    if lon.abs() > LON_LIMIT_DEG || lat_deg.abs() > LAT_LIMIT_DEG {
        return Err(AppError::out_of_range(format!(
            "Sight line l = {lon_deg} deg, b = {lat_deg} deg is outside the map window \
             (|l| <= {LON_LIMIT_DEG} deg, |b| <= {LAT_LIMIT_DEG} deg)."
        )));
    }

    let mut lon = quantize_quarter(lon);
    let lat = quantize_quarter(lat_deg);

    // The grid file stores longitudes in 0..360.
    if lon < 0.0 {
        lon += 360.0;
    }

    Ok(SkyPosition {
        longitude_deg: lon,
        latitude_deg: lat,
    })
}

/// Snap to the nearest 0.25° step.
///
/// Exact half-steps round away from zero (`f64::round` semantics):
/// `0.125 -> 0.25`, `-0.125 -> -0.25`. Exact grid multiples are unchanged.
pub fn quantize_quarter(x: f64) -> f64 {
    (x * 4.0).round() / 4.0
}

/// Integer quarter-degree index of a coordinate.
///
/// Grid rows and queries are matched on these indices rather than on float
/// equality of the quantized degrees.
pub fn quarter_index(x: f64) -> i32 {
    (x * 4.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn longitudes_above_180_map_to_signed_hemisphere() {
        for (input, expected_signed) in [(350.0, -10.0), (260.25, -99.75), (710.0, -10.0)] {
            let pos = normalize(input, 0.0).unwrap();
            assert!((pos.signed_longitude() - expected_signed).abs() < 1e-9);
        }
    }

    #[test]
    fn exact_grid_multiples_are_unchanged() {
        let pos = normalize(99.75, -9.25).unwrap();
        assert_eq!(pos.longitude_deg, 99.75);
        assert_eq!(pos.latitude_deg, -9.25);
    }

    #[test]
    fn off_grid_coordinates_snap_to_nearest_node() {
        let pos = normalize(10.1, 2.6).unwrap();
        assert_eq!(pos.longitude_deg, 10.0);
        assert_eq!(pos.latitude_deg, 2.5);
    }

    #[test]
    fn half_steps_round_away_from_zero() {
        assert_eq!(quantize_quarter(0.125), 0.25);
        assert_eq!(quantize_quarter(-0.125), -0.25);
    }

    #[test]
    fn negative_longitude_is_stored_in_0_360() {
        let pos = normalize(-10.0, 0.0).unwrap();
        assert_eq!(pos.longitude_deg, 350.0);
        assert_eq!(pos.lon_index(), 1400);
    }

    #[test]
    fn out_of_window_sight_lines_are_rejected() {
        // l = 150 is signed 150, beyond the |l| <= 100 window.
        let err = normalize(150.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = normalize(0.0, 10.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn window_edges_are_accepted() {
        assert!(normalize(100.0, 10.0).is_ok());
        assert!(normalize(260.0, -10.0).is_ok());
    }
}
