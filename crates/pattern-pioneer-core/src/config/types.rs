//! Sub-configuration structs with defaults matching the gallery layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of pattern slots on the gallery page.
pub const DEFAULT_BATCH_SIZE: usize = 6;

/// Per-image transform settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Maximum width/height in pixels
    pub max_size: u32,

    /// JPEG quality (1-100)
    pub quality: u8,

    /// Center-crop factor; 1.0 disables cropping, 2.0 keeps the central quarter
    pub crop_zoom: f64,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            max_size: 800,
            quality: 85,
            crop_zoom: 2.0,
        }
    }
}

/// Batch selection and output naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Directory the optimized images are written to
    pub output_dir: PathBuf,

    /// Output file names, assigned positionally to the sorted source files
    pub output_names: Vec<String>,

    /// Maximum number of source files processed per run
    pub max_images: usize,

    /// Recognized input extensions (matched case-insensitively)
    pub supported_formats: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("images"),
            output_names: (1..=DEFAULT_BATCH_SIZE)
                .map(|i| format!("pattern{i}.jpg"))
                .collect(),
            max_images: DEFAULT_BATCH_SIZE,
            supported_formats: ["jpg", "jpeg", "png", "tiff", "tif", "bmp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl BatchConfig {
    /// Number of files a run will actually process.
    pub fn batch_limit(&self) -> usize {
        self.max_images.min(self.output_names.len())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_pattern_slots() {
        let batch = BatchConfig::default();
        assert_eq!(batch.output_names.len(), 6);
        assert_eq!(batch.output_names[0], "pattern1.jpg");
        assert_eq!(batch.output_names[5], "pattern6.jpg");
    }

    #[test]
    fn test_batch_limit_uses_shorter_name_list() {
        let mut batch = BatchConfig::default();
        assert_eq!(batch.batch_limit(), 6);

        batch.output_names = vec!["hero.jpg".to_string(), "detail.jpg".to_string()];
        assert_eq!(batch.batch_limit(), 2);

        batch.output_names = (0..10).map(|i| format!("p{i}.jpg")).collect();
        assert_eq!(batch.batch_limit(), 6);
    }
}
