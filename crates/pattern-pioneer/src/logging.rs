//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem for structured logging with support for
//! both human-readable and JSON output formats.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `verbose` - If true, enables DEBUG level logging; otherwise INFO level.
/// * `json_format` - If true, outputs structured JSON logs; otherwise pretty-printed.
///
/// # Notes
///
/// - Log output goes to stderr (stdout is reserved for `--show-config`)
/// - The RUST_LOG environment variable can override the log level
pub fn init(verbose: bool, json_format: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging from the `[logging]` config section.
///
/// CLI flags can only raise verbosity or switch to JSON, never turn them off.
pub fn init_from_config(
    config: &pattern_pioneer_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let (verbose, json_format) = resolve(config, verbose_override, json_logs_override);
    init(verbose, json_format);
}

/// Combine config settings and CLI flags into (verbose, json).
fn resolve(
    config: &pattern_pioneer_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) -> (bool, bool) {
    let level = config.logging.level.to_lowercase();
    let verbose = verbose_override || level == "debug" || level == "trace";
    let json_format = json_logs_override || config.logging.format.eq_ignore_ascii_case("json");
    (verbose, json_format)
}
