//! The optimize command: turn a directory of source images into gallery JPEGs.

mod batch;
mod setup;

use clap::Args;
use pattern_pioneer_core::Config;
use std::path::PathBuf;

use batch::run_batch;
use setup::apply_overrides;

/// Arguments for optimizing a directory.
///
/// Unset options fall back to the config file, then to the gallery defaults.
#[derive(Args, Debug, Default)]
pub struct OptimizeArgs {
    /// Directory containing large pattern images
    #[arg(required = true)]
    pub input_dir: PathBuf,

    /// Output directory [default: images]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Max width/height in pixels [default: 800]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size: Option<u32>,

    /// JPEG quality 1-100 [default: 85]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Crop zoom factor, 2.0 keeps the central quarter, 1.0 disables [default: 2.0]
    #[arg(long)]
    pub crop_zoom: Option<f64>,

    /// Comma-separated output file names, assigned in sorted source order
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Write a JSON (or .jsonl) report of the batch to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Execute the optimize command.
pub fn execute(args: OptimizeArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(&mut config, &args)?;

    if args.show_config {
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    if !args.input_dir.is_dir() {
        anyhow::bail!(
            "Input directory '{}' does not exist",
            args.input_dir.display()
        );
    }

    run_batch(&config, &args)
}
