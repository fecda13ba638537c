//! Core data types for the optimizer.
//!
//! These types describe what a transform was asked to do and what it
//! produced, and are serialized into the JSON batch report.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::OptimizeConfig;

/// Immutable settings for one transform invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformSettings {
    /// Maximum width/height in pixels
    pub max_size: u32,

    /// JPEG quality (1-100)
    pub quality: u8,

    /// Center-crop factor (1.0 = no crop)
    pub crop_zoom: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        OptimizeConfig::default().into()
    }
}

impl From<OptimizeConfig> for TransformSettings {
    fn from(config: OptimizeConfig) -> Self {
        Self {
            max_size: config.max_size,
            quality: config.quality,
            crop_zoom: config.crop_zoom,
        }
    }
}

/// A pixel rectangle within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The outcome of a successful transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedImage {
    /// Source file
    pub source: PathBuf,

    /// Written JPEG
    pub destination: PathBuf,

    /// Detected source format ("jpeg", "png", ...)
    pub format: String,

    /// Decoded dimensions before any transform
    pub original_width: u32,
    pub original_height: u32,

    /// EXIF orientation that was applied (1-8), if the source carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<u32>,

    /// Region kept by the center crop, in oriented coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRegion>,

    /// Final dimensions of the written JPEG
    pub width: u32,
    pub height: u32,

    /// Source file size in bytes
    pub original_bytes: u64,

    /// Output file size in bytes
    pub output_bytes: u64,
}

impl OptimizedImage {
    /// Source size in megabytes.
    pub fn original_mb(&self) -> f64 {
        self.original_bytes as f64 / (1024.0 * 1024.0)
    }

    /// Output size in kilobytes.
    pub fn output_kb(&self) -> f64 {
        self.output_bytes as f64 / 1024.0
    }
}

/// A source file that could not be transformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedImage {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: String,
}

/// Summary of one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,

    /// Number of recognized image files in the input directory
    pub found: usize,

    /// Recognized files beyond the batch limit, in sort order
    pub skipped: Vec<PathBuf>,

    pub succeeded: Vec<OptimizedImage>,
    pub failed: Vec<FailedImage>,
}

impl BatchReport {
    /// Total bytes read from the sources that were optimized.
    pub fn original_bytes(&self) -> u64 {
        self.succeeded.iter().map(|i| i.original_bytes).sum()
    }

    /// Total bytes written.
    pub fn output_bytes(&self) -> u64 {
        self.succeeded.iter().map(|i| i.output_bytes).sum()
    }

    /// True when every attempted file was written.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
