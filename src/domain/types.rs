//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory during a query
//! - exported to JSON/CSV
//! - reloaded later for comparisons

use serde::{Deserialize, Serialize};

use crate::coords;
use crate::math::UncertainValue;

/// A sight line snapped to the map's 0.25° grid.
///
/// Longitude is stored in the grid file's `0..360` convention; the signed
/// hemisphere form (`-100..=100`) is only used for range validation and
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

impl SkyPosition {
    /// Longitude re-expressed in `-180..=180`.
    pub fn signed_longitude(&self) -> f64 {
        if self.longitude_deg > 180.0 {
            self.longitude_deg - 360.0
        } else {
            self.longitude_deg
        }
    }

    /// Integer quarter-degree grid key for the longitude.
    pub fn lon_index(&self) -> i32 {
        coords::quarter_index(self.longitude_deg)
    }

    /// Integer quarter-degree grid key for the latitude.
    pub fn lat_index(&self) -> i32 {
        coords::quarter_index(self.latitude_deg)
    }
}

/// The decoded extinction-vs-distance profile of one grid row.
///
/// Both sequences have equal length and preserve the row's emission order
/// (increasing radius). A sparse sight line may decode to zero cuts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtinctionProfile {
    /// Distance of each extinction cut, in kpc.
    pub radii: Vec<UncertainValue>,
    /// Extinction at each cut, in magnitudes (band depends on context).
    pub extinctions: Vec<UncertainValue>,
}

impl ExtinctionProfile {
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Iterate `(radius, extinction)` pairs in increasing-radius order.
    pub fn cuts(&self) -> impl Iterator<Item = (UncertainValue, UncertainValue)> + '_ {
        self.radii.iter().copied().zip(self.extinctions.iter().copied())
    }
}

/// Where the reddening profile first flattens, if it does.
///
/// `None` on both fields means "no asymptote detected" — the profile was too
/// short or never flattened within the available radii. That is an
/// informational outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AsymptoteResult {
    /// Asymptotic visual-band reddening, in magnitudes.
    pub reddening: Option<UncertainValue>,
    /// Distance of the flattening point, in kpc.
    pub distance: Option<UncertainValue>,
}

impl AsymptoteResult {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn is_detected(&self) -> bool {
        self.reddening.is_some() && self.distance.is_some()
    }
}

/// Portable JSON representation of one query's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFile {
    pub tool: String,
    pub position: SkyPosition,
    /// Near-infrared (Ks band) profile as decoded from the grid.
    pub profile_ks: ExtinctionProfile,
    /// Visual-band profile after the `A_Ks = 0.114 * A_V` conversion.
    pub profile_v: ExtinctionProfile,
    pub asymptote: AsymptoteResult,
    /// Perpendicular offset from the galactic plane, in pc.
    pub z_height_pc: Option<f64>,
}
