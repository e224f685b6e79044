//! Asymptotic-reddening estimation.
//!
//! The map measures extinction in the Ks band; the estimator works in the
//! visual band (`A_Ks = 0.114 * A_V`, CCM89). Reddening along a sight line
//! saturates once the line leaves the dust layer, so the estimator walks the
//! adjacent-cut slopes in increasing-radius order and declares the profile
//! flat from the first slope at or below 0.01 mag/kpc outward.
//!
//! This is deliberately a threshold scan, not a fit or smoothing procedure,
//! and slopes are computed from nominal values only (uncertainty is not
//! propagated through the derived slope).

use crate::domain::{AsymptoteResult, ExtinctionProfile};

/// CCM89 band conversion: `A_Ks = KS_TO_V * A_V`.
pub const KS_TO_V: f64 = 0.114;

/// A slope at or below this (mag/kpc) counts as flat.
pub const FLAT_SLOPE_MAG_PER_KPC: f64 = 0.01;

/// Convert a Ks-band profile to the visual band. Radii are unchanged.
pub fn to_visual_band(profile: &ExtinctionProfile) -> ExtinctionProfile {
    ExtinctionProfile {
        radii: profile.radii.clone(),
        extinctions: profile.extinctions.iter().map(|&a| a / KS_TO_V).collect(),
    }
}

/// Find the first flattening point of a Ks-band profile.
///
/// Returns the visual-band `(reddening, distance)` pair at the point *before*
/// the first flat step, or the absent result when fewer than two cuts exist
/// or no slope ever reaches the threshold.
pub fn find_asymptote(profile: &ExtinctionProfile) -> AsymptoteResult {
    let visual = to_visual_band(profile);

    for (i, slope) in slopes(&visual).into_iter().enumerate() {
        if slope <= FLAT_SLOPE_MAG_PER_KPC {
            return AsymptoteResult {
                reddening: Some(visual.extinctions[i]),
                distance: Some(visual.radii[i]),
            };
        }
    }

    AsymptoteResult::absent()
}

/// Nominal-only slope between each adjacent pair of cuts, in mag/kpc.
fn slopes(profile: &ExtinctionProfile) -> Vec<f64> {
    let ext = &profile.extinctions;
    let rad = &profile.radii;

    (0..profile.len().saturating_sub(1))
        .map(|i| {
            (ext[i + 1].nominal() - ext[i].nominal()) / (rad[i + 1].nominal() - rad[i].nominal())
        })
        .collect()
}

/// Perpendicular offset from the galactic plane, in pc, implied by a
/// line-of-sight distance (kpc) at galactic latitude `b`.
pub fn z_height_pc(distance_kpc: f64, latitude_deg: f64) -> f64 {
    (distance_kpc * latitude_deg.to_radians().sin()).abs() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::UncertainValue;

    fn ks_profile(radii: &[f64], visual_ext: &[f64]) -> ExtinctionProfile {
        // Build a Ks-band profile whose V-band conversion lands exactly on
        // `visual_ext`.
        ExtinctionProfile {
            radii: radii.iter().map(|&r| UncertainValue::exact(r)).collect(),
            extinctions: visual_ext
                .iter()
                .map(|&a| UncertainValue::exact(a * KS_TO_V))
                .collect(),
        }
    }

    #[test]
    fn band_conversion_divides_value_and_error() {
        let profile = ExtinctionProfile {
            radii: vec![UncertainValue::exact(1.0)],
            extinctions: vec![UncertainValue::new(0.114, 0.0114)],
        };
        let visual = to_visual_band(&profile);
        assert!((visual.extinctions[0].nominal() - 1.0).abs() < 1e-12);
        assert!((visual.extinctions[0].stderr() - 0.1).abs() < 1e-12);
        assert_eq!(visual.radii, profile.radii);
    }

    #[test]
    fn steep_profile_has_no_asymptote() {
        // V-band [1.0, 1.9, 2.0] over [0.5, 1.0, 1.5]: slopes [1.8, 0.2].
        let result = find_asymptote(&ks_profile(&[0.5, 1.0, 1.5], &[1.0, 1.9, 2.0]));
        assert!(!result.is_detected());
    }

    #[test]
    fn slope_just_above_threshold_does_not_count() {
        // Slopes [0.98, 0.02]: 0.02 > 0.01, still no asymptote.
        let result = find_asymptote(&ks_profile(&[0.5, 1.0, 1.5], &[1.0, 1.49, 1.50]));
        assert!(!result.is_detected());
    }

    #[test]
    fn asymptote_is_the_point_before_the_flat_step() {
        // Appending (2.0, 1.501) gives slopes [0.98, 0.02, 0.002]; the first
        // flat slope is at index 2, so the result is the pair at index 2.
        let result = find_asymptote(&ks_profile(&[0.5, 1.0, 1.5, 2.0], &[1.0, 1.49, 1.50, 1.501]));
        let red = result.reddening.unwrap();
        let dist = result.distance.unwrap();
        assert!((red.nominal() - 1.50).abs() < 1e-9);
        assert!((dist.nominal() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn first_flat_slope_wins_even_if_profile_steepens_again() {
        // Slopes [0.0, 2.0]: flat step at index 0.
        let result = find_asymptote(&ks_profile(&[1.0, 2.0, 3.0], &[1.0, 1.0, 3.0]));
        assert!((result.distance.unwrap().nominal() - 1.0).abs() < 1e-12);
        assert!((result.reddening.unwrap().nominal() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn short_profiles_yield_absent() {
        assert!(!find_asymptote(&ExtinctionProfile::default()).is_detected());
        assert!(!find_asymptote(&ks_profile(&[0.5], &[1.0])).is_detected());
    }

    #[test]
    fn z_height_follows_latitude() {
        // 5 kpc at b = 30 deg: 5 * sin(30°) * 1000 = 2500 pc.
        assert!((z_height_pc(5.0, 30.0) - 2500.0).abs() < 1e-9);
        assert!((z_height_pc(5.0, -30.0) - 2500.0).abs() < 1e-9);
        assert_eq!(z_height_pc(5.0, 0.0), 0.0);
    }
}
