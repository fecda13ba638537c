//! Pattern Pioneer Core - gallery image optimization library.
//!
//! Turns a directory of large pattern photographs into a fixed set of
//! web-sized JPEG thumbnails for the gallery page.
//!
//! # Architecture
//!
//! A strictly sequential pipeline, one file at a time:
//!
//! ```text
//! Directory → Sort → First N → Decode → RGB → Orient → Crop → Resize → JPEG
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pattern_pioneer_core::{BatchRunner, Config};
//! use std::path::Path;
//!
//! fn main() -> pattern_pioneer_core::Result<()> {
//!     let config = Config::load()?;
//!     let runner = BatchRunner::new(&config);
//!
//!     let report = runner.run(Path::new("./raw"), &config.output_dir())?;
//!     println!("Wrote {} images", report.succeeded.len());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use batch::{BatchItem, BatchPlan, BatchRunner};
pub use config::Config;
pub use error::{ConfigError, PioneerError, PipelineError, PipelineResult, Result};
pub use output::{write_report_file, ReportFormat, ReportWriter};
pub use pipeline::{DiscoveredFile, ImageProcessor};
pub use types::{BatchReport, CropRegion, FailedImage, OptimizedImage, TransformSettings};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
