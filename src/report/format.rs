//! Terminal report for a single query.
//!
//! We keep formatting code in one place so:
//! - the lookup/estimation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::QueryOutput;
use crate::estimate::KS_TO_V;

/// Format the full query summary (attribution + sight line + result).
pub fn format_query_summary(output: &QueryOutput) -> String {
    let mut out = String::new();

    out.push_str("=== 3D Galactic Reddening Map of Marshall et al. (2006) ===\n");
    out.push_str("Reddening determined in the Ks band, converted to visual\n");
    out.push_str(&format!("extinction (CCM89) via A_Ks = {KS_TO_V} x A_V\n"));
    out.push_str("----------------------------------------------------------\n");
    out.push_str(&format!(
        "Sight line (grid node): l = {:.2} deg, b = {:.2} deg\n",
        output.position.longitude_deg, output.position.latitude_deg
    ));

    if output.profile_ks.is_empty() {
        out.push_str("No measured extinction cuts along this sight line.\n");
    } else {
        let first = output.profile_ks.radii[0].nominal();
        let last = output.profile_ks.radii[output.profile_ks.len() - 1].nominal();
        out.push_str(&format!(
            "Cuts: n={} | distance=[{first:.2}, {last:.2}] kpc\n",
            output.profile_ks.len()
        ));
    }

    match (output.asymptote.reddening, output.asymptote.distance) {
        (Some(red), Some(dist)) => {
            out.push_str(&format!(
                "Asymptotic reddening: A_V = {red:.2} mag @ a distance of {dist:.1} kpc\n"
            ));
            if let Some(z) = output.z_height_pc {
                out.push_str(&format!("Z-height of asymptotic reddening: z = {z:.0} pc\n"));
            }
        }
        _ => {
            out.push_str(
                "No asymptotic reddening determined, possibly due to there being too few points.\n",
            );
        }
    }

    out.push_str("----------------------------------------------------------");
    out
}
