use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use iconmask_core::FilterType;

#[derive(Parser, Debug)]
#[command(name = "iconmask", version, about = "Application icon post-processor")]
pub struct CliArgs {
    /// Enable logging (DEBUG, or the `RUST_LOG` directives when set)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recenter the subject, scale, crop to size, and round the corners
    Build(BuildArgs),
    /// Only round the corners, keeping the image size and content
    Round(RoundArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input PNG file
    pub input: PathBuf,

    /// Output PNG file
    pub output: PathBuf,

    /// JSON file with icon parameters; flags below override its values
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Luma cutoff (0-255); darker pixels are treated as the subject
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Uniform scale factor applied before cropping
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output width and height in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Corner radius as a fraction of the width (0.0-0.5)
    #[arg(long)]
    pub radius: Option<f32>,

    /// Resampling filter used for scaling
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,
}

#[derive(Args, Debug)]
pub struct RoundArgs {
    /// Input PNG file
    pub input: PathBuf,

    /// Output PNG file
    pub output: PathBuf,

    /// Corner radius as a fraction of the width (0.0-0.5)
    #[arg(long, default_value_t = iconmask_core::DEFAULT_CORNER_RADIUS)]
    pub radius: f32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterArg {
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Bilinear => FilterType::Bilinear,
            FilterArg::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
