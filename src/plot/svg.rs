//! SVG figure export via plotters.
//!
//! Same two-panel layout as the terminal plot (A_Ks left, A_V right), with
//! symmetric error bars on both axes. The SVG backend writes a plain file
//! and needs no system font/raster dependencies.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::app::pipeline::QueryOutput;
use crate::domain::ExtinctionProfile;
use crate::error::AppError;

const PANEL_WIDTH: u32 = 550;
const PANEL_HEIGHT: u32 = 520;

/// Render both band panels to an SVG file.
pub fn render_svg_profile(path: &Path, output: &QueryOutput) -> Result<(), AppError> {
    let root = SVGBackend::new(path, (2 * PANEL_WIDTH, PANEL_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let label = format!(
        "l = {:.2} deg, b = {:.2} deg",
        output.position.longitude_deg, output.position.latitude_deg
    );

    let (left, right) = root.split_horizontally(PANEL_WIDTH);
    draw_panel(&left, &output.profile_ks, "A_Ks [mag]", &label)?;
    draw_panel(&right, &output.profile_v, "A_V [mag]", &label)?;

    root.present().map_err(|e| {
        AppError::io(format!(
            "Failed to write SVG figure '{}': {e}",
            path.display()
        ))
    })
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    profile: &ExtinctionProfile,
    y_label: &str,
    label: &str,
) -> Result<(), AppError> {
    // Axes include the origin and span 1.5x the outermost cut.
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

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(label, ("sans-serif", 18))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance [kpc]")
        .y_desc(y_label)
        .draw()
        .map_err(render_err)?;

    let mut points = vec![(0.0, 0.0)];
    points.extend(profile.cuts().map(|(r, a)| (r.nominal(), a.nominal())));

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(render_err)?;

    chart
        .draw_series(profile.cuts().map(|(r, a)| {
            ErrorBar::new_vertical(
                r.nominal(),
                a.nominal() - a.stderr(),
                a.nominal(),
                a.nominal() + a.stderr(),
                RED.filled(),
                6,
            )
        }))
        .map_err(render_err)?;

    chart
        .draw_series(profile.cuts().map(|(r, a)| {
            ErrorBar::new_horizontal(
                a.nominal(),
                r.nominal() - r.stderr(),
                r.nominal(),
                r.nominal() + r.stderr(),
                RED.filled(),
                6,
            )
        }))
        .map_err(render_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(render_err)?;

    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::io(format!("Failed to render SVG figure: {e}"))
}
