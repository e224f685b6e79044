//! Command-line parsing for the extinction-map query tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! lookup/estimation code. The tool is one-shot (one sight line in, one
//! report out), so there are no subcommands.

use std::path::PathBuf;

use clap::Parser;

/// Query the Marshall et al. (2006) 3D galactic extinction map.
#[derive(Debug, Parser)]
#[command(name = "marshall", version, about = "Marshall et al. (2006) 3D extinction map query")]
pub struct Cli {
    /// Galactic longitude in degrees.
    #[arg(short = 'l', long = "lon", value_name = "DEG", allow_negative_numbers = true)]
    pub longitude: f64,

    /// Galactic latitude in degrees.
    #[arg(short = 'b', long = "lat", value_name = "DEG", allow_negative_numbers = true)]
    pub latitude: f64,

    /// Path to the extinction grid file.
    #[arg(long, value_name = "FILE", default_value = "marshall.dat")]
    pub map: PathBuf,

    /// Render the profile in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows per panel).
    #[arg(long, default_value_t = 18)]
    pub height: usize,

    /// Export the per-cut profile to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the full query result (both bands + asymptote) to JSON.
    #[arg(long = "export-profile", value_name = "JSON")]
    pub export_profile: Option<PathBuf>,

    /// Render the profile to an SVG figure.
    #[arg(long = "plot-svg", value_name = "SVG")]
    pub plot_svg: Option<PathBuf>,
}
