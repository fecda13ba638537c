//! Pattern Pioneer - batch-optimize pattern gallery images for the web.
//!
//! Takes a directory of large source images and writes up to six web-sized
//! JPEG thumbnails named for the gallery slots.
//!
//! # Usage
//!
//! ```bash
//! # Optimize with the gallery defaults (800px, quality 85, 2x zoom)
//! pattern-pioneer ./raw-patterns
//!
//! # Custom output directory and settings
//! pattern-pioneer ./raw-patterns --output-dir site/images --max-size 1200 --crop-zoom 1.5
//!
//! # Show the effective configuration
//! pattern-pioneer ./raw-patterns --show-config
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

mod cli;
mod logging;

/// Pattern Pioneer Image Optimizer - convert large pattern images to web thumbnails.
#[derive(Parser, Debug)]
#[command(name = "pattern-pioneer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, env = "PATTERN_PIONEER_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    optimize: cli::optimize::OptimizeArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = load_config(cli.config.as_deref())?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Pattern Pioneer v{}", pattern_pioneer_core::VERSION);

    cli::optimize::execute(cli.optimize, config)
}

/// Load an explicitly named config strictly; fall back to defaults for the implicit one.
fn load_config(path: Option<&Path>) -> anyhow::Result<pattern_pioneer_core::Config> {
    use anyhow::Context;
    use pattern_pioneer_core::Config;

    if let Some(path) = path {
        return Config::load_from(path)
            .with_context(|| format!("Failed to load config file {}", path.display()));
    }
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check {}",
                Config::default_path().display()
            );
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_dir_is_required() {
        assert!(Cli::try_parse_from(["pattern-pioneer"]).is_err());
    }

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "pattern-pioneer",
            "raw",
            "--output-dir",
            "site/images",
            "--max-size",
            "1200",
            "--quality",
            "70",
            "--crop-zoom",
            "1.5",
            "--names",
            "a.jpg,b.jpg",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.optimize.input_dir, PathBuf::from("raw"));
        assert_eq!(cli.optimize.output_dir, Some(PathBuf::from("site/images")));
        assert_eq!(cli.optimize.max_size, Some(1200));
        assert_eq!(cli.optimize.quality, Some(70));
        assert_eq!(cli.optimize.crop_zoom, Some(1.5));
        assert_eq!(
            cli.optimize.names,
            Some(vec!["a.jpg".to_string(), "b.jpg".to_string()])
        );
    }

    #[test]
    fn test_rejects_quality_out_of_range() {
        assert!(Cli::try_parse_from(["pattern-pioneer", "raw", "--quality", "0"]).is_err());
        assert!(Cli::try_parse_from(["pattern-pioneer", "raw", "--quality", "101"]).is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
