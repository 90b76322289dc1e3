use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use iconmask_core::{build_icon_file, round_corners_file, IconParams};

use super::args::{BuildArgs, CliArgs, Command, RoundArgs};
use super::errors::AppError;

/// Load parameters from an optional JSON file, then apply flag overrides.
fn resolve_params(args: &BuildArgs) -> Result<IconParams, AppError> {
    let mut params = match &args.params {
        Some(path) => load_params(path)?,
        None => IconParams::default(),
    };

    if let Some(threshold) = args.threshold {
        params.threshold = threshold;
    }
    if let Some(scale) = args.scale {
        params.scale_factor = scale;
    }
    if let Some(size) = args.size {
        params.target_size = size;
    }
    if let Some(radius) = args.radius {
        params.corner_radius = radius;
    }
    if let Some(filter) = args.filter {
        params.filter = filter.into();
    }

    Ok(params)
}

fn load_params(path: &Path) -> Result<IconParams, AppError> {
    let json = fs::read_to_string(path).map_err(|source| AppError::ParamsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| AppError::ParamsParse {
        path: path.to_path_buf(),
        source,
    })
}

fn run_build(args: &BuildArgs) -> Result<(), AppError> {
    let params = resolve_params(args)?;
    info!(?params, "building icon");

    let report = build_icon_file(&args.input, &args.output, &params)?;
    info!(
        bbox = ?report.bbox,
        offset = ?report.offset,
        width = report.width,
        height = report.height,
        "done"
    );
    Ok(())
}

fn run_round(args: &RoundArgs) -> Result<(), AppError> {
    info!(radius = args.radius, "rounding corners");
    round_corners_file(&args.input, &args.output, args.radius)?;
    Ok(())
}

/// Log filter from a `RUST_LOG`-style directive string, DEBUG when absent or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("debug"))
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let directives = std::env::var("RUST_LOG").ok();
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(directives.as_deref()))
            .init();
    }

    match &args.command {
        Command::Build(build) => run_build(build)?,
        Command::Round(round) => run_round(round)?,
    }

    Ok(())
}
