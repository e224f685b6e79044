//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the query pipeline (normalize -> lookup -> estimate)
//! - prints the report and terminal plot
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::cli::Cli;
use crate::error::AppError;

pub mod pipeline;

/// Per-run configuration, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub map_path: PathBuf,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export: Option<PathBuf>,
    pub export_profile: Option<PathBuf>,
    pub plot_svg: Option<PathBuf>,
}

/// Entry point for the `marshall` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = query_config_from_args(&cli);

    let output = pipeline::run_query(&config)?;

    println!("{}", crate::report::format_query_summary(&output));

    if config.plot {
        let plot = crate::plot::render_ascii_profile(&output, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export {
        crate::io::export::write_profile_csv(path, &output)?;
    }
    if let Some(path) = &config.export_profile {
        crate::io::export::write_profile_json(path, &output)?;
    }
    if let Some(path) = &config.plot_svg {
        crate::plot::svg::render_svg_profile(path, &output)?;
    }

    Ok(())
}

pub fn query_config_from_args(cli: &Cli) -> QueryConfig {
    QueryConfig {
        longitude_deg: cli.longitude,
        latitude_deg: cli.latitude,
        map_path: cli.map.clone(),
        plot: cli.plot && !cli.no_plot,
        plot_width: cli.width,
        plot_height: cli.height,
        export: cli.export.clone(),
        export_profile: cli.export_profile.clone(),
        plot_svg: cli.plot_svg.clone(),
    }
}
