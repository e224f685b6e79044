//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Two panels are rendered, one per band (A_Ks and A_V). Plot elements:
//! - measured cuts: `o`
//! - ±1σ extinction span: `|`
//! - connecting profile line: `-`
//! - detected asymptote (A_V panel): `A`
//!
//! Axes include the origin and span 1.5x the outermost cut, matching the
//! tool's traditional figure layout.

use crate::app::pipeline::QueryOutput;
use crate::domain::ExtinctionProfile;

/// Render both band panels for one query.
pub fn render_ascii_profile(output: &QueryOutput, width: usize, height: usize) -> String {
    let label = format!(
        "l = {:.2} deg, b = {:.2} deg",
        output.position.longitude_deg, output.position.latitude_deg
    );

    let highlight = match (output.asymptote.distance, output.asymptote.reddening) {
        (Some(d), Some(r)) => Some((d.nominal(), r.nominal())),
        _ => None,
    };

    let mut out = String::new();
    out.push_str(&render_panel(&output.profile_ks, "A_Ks [mag]", &label, None, width, height));
    out.push('\n');
    out.push_str(&render_panel(&output.profile_v, "A_V [mag]", &label, highlight, width, height));
    out
}

fn render_panel(
    profile: &ExtinctionProfile,
    y_label: &str,
    label: &str,
    highlight: Option<(f64, f64)>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut x_max = profile.radii.iter().map(|r| r.nominal()).fold(0.0, f64::max) * 1.5;
    let mut y_max = profile
        .extinctions
        .iter()
        .map(|a| a.nominal() + a.stderr())
        .fold(0.0, f64::max)
        * 1.5;
    if !(x_max > 0.0) {
        x_max = 1.0;
    }
    if !(y_max > 0.0) {
        y_max = 1.0;
    }

    let mut grid = vec![vec![' '; width]; height];

    // Profile line first (points and error bars overlay it). The origin is
    // part of the drawn profile.
    let mut points = vec![(0.0, 0.0)];
    points.extend(profile.cuts().map(|(r, a)| (r.nominal(), a.nominal())));

    for pair in points.windows(2) {
        let (x0, y0) = (map_x(pair[0].0, x_max, width), map_y(pair[0].1, y_max, height));
        let (x1, y1) = (map_x(pair[1].0, x_max, width), map_y(pair[1].1, y_max, height));
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }

    // ±1σ extinction spans.
    for (rad, ext) in profile.cuts() {
        let x = map_x(rad.nominal(), x_max, width);
        let lo = map_y(ext.nominal() - ext.stderr(), y_max, height);
        let hi = map_y(ext.nominal() + ext.stderr(), y_max, height);
        for row in hi.min(lo)..=hi.max(lo) {
            if grid[row][x] == ' ' || grid[row][x] == '-' {
                grid[row][x] = '|';
            }
        }
    }

    // Measured cuts.
    for (rad, ext) in profile.cuts() {
        let x = map_x(rad.nominal(), x_max, width);
        let y = map_y(ext.nominal(), y_max, height);
        grid[y][x] = 'o';
    }

    if let Some((dist, red)) = highlight {
        let x = map_x(dist, x_max, width);
        let y = map_y(red, y_max, height);
        grid[y][x] = 'A';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{y_label} vs distance [kpc] | {label} | x=[0.00, {x_max:.2}] y=[0.00, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn map_x(x: f64, x_max: f64, width: usize) -> usize {
    let u = (x / x_max).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_max: f64, height: usize) -> usize {
    let u = (y / y_max).clamp(0.0, 1.0);
    // y = y_max -> row 0
    (height as f64 - 1.0 - u * (height as f64 - 1.0)).round() as usize
}

/// Integer line drawing (Bresenham-ish); only paints blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AsymptoteResult, SkyPosition};
    use crate::math::UncertainValue;

    fn output() -> QueryOutput {
        let profile_ks = ExtinctionProfile {
            radii: vec![UncertainValue::exact(1.0), UncertainValue::exact(2.0)],
            extinctions: vec![
                UncertainValue::new(0.114, 0.0228),
                UncertainValue::new(0.228, 0.0228),
            ],
        };
        let profile_v = crate::estimate::to_visual_band(&profile_ks);
        QueryOutput {
            position: SkyPosition {
                longitude_deg: 10.0,
                latitude_deg: 0.25,
            },
            profile_ks,
            profile_v,
            asymptote: AsymptoteResult {
                reddening: Some(UncertainValue::exact(2.0)),
                distance: Some(UncertainValue::exact(2.0)),
            },
            z_height_pc: Some(8.7),
        }
    }

    #[test]
    fn both_panels_have_the_requested_shape() {
        let txt = render_ascii_profile(&output(), 40, 10);
        let lines: Vec<&str> = txt.lines().collect();
        // 2 panels x (header + 10 rows) + 1 blank separator.
        assert_eq!(lines.len(), 23);
        assert!(lines[0].starts_with("A_Ks [mag]"));
        assert!(lines[0].contains("l = 10.00 deg, b = 0.25 deg"));
        assert!(lines[12].starts_with("A_V [mag]"));
        for line in &lines[1..11] {
            assert_eq!(line.chars().count(), 40);
        }
    }

    #[test]
    fn panels_draw_points_error_bars_and_asymptote_marker() {
        let txt = render_ascii_profile(&output(), 40, 12);
        let (ks_panel, v_panel) = txt.split_once("\n\n").unwrap();
        assert!(ks_panel.contains('o'));
        assert!(ks_panel.contains('|'));
        assert!(ks_panel.contains('-'));
        // One 'A' in the header ("A_Ks"); no marker in the Ks panel.
        assert_eq!(ks_panel.matches('A').count(), 1);
        // Header ("A_V") plus the asymptote marker.
        assert_eq!(v_panel.matches('A').count(), 2);
    }

    #[test]
    fn empty_profile_still_renders() {
        let mut out = output();
        out.profile_ks = ExtinctionProfile::default();
        out.profile_v = ExtinctionProfile::default();
        out.asymptote = AsymptoteResult::absent();
        let txt = render_ascii_profile(&out, 30, 8);
        assert!(txt.contains("x=[0.00, 1.00]"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_ascii_profile(&output(), 50, 14);
        let b = render_ascii_profile(&output(), 50, 14);
        assert_eq!(a, b);
    }
}
