//! Configuration validation with range checks.

use std::collections::HashSet;

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    ///
    /// Called after loading a file and again after CLI overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.optimize.max_size == 0 {
            return Err(ConfigError::ValidationError(
                "optimize.max_size must be > 0".into(),
            ));
        }
        if !(1..=100).contains(&self.optimize.quality) {
            return Err(ConfigError::ValidationError(
                "optimize.quality must be between 1 and 100".into(),
            ));
        }
        if !self.optimize.crop_zoom.is_finite() || self.optimize.crop_zoom < 1.0 {
            return Err(ConfigError::ValidationError(
                "optimize.crop_zoom must be a finite number >= 1.0".into(),
            ));
        }
        if self.batch.max_images == 0 {
            return Err(ConfigError::ValidationError(
                "batch.max_images must be > 0".into(),
            ));
        }
        if self.batch.output_names.is_empty() {
            return Err(ConfigError::ValidationError(
                "batch.output_names must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &self.batch.output_names {
            if !is_plain_file_name(name) {
                return Err(ConfigError::ValidationError(format!(
                    "batch.output_names entry {name:?} must be a plain file name"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "batch.output_names contains duplicate {name:?}"
                )));
            }
        }
        if self.batch.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "batch.supported_formats must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// A name that stays inside the output directory.
fn is_plain_file_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_max_size() {
        let mut config = Config::default();
        config.optimize.max_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_size"));
    }

    #[test]
    fn test_validate_rejects_quality_out_of_range() {
        let mut config = Config::default();
        config.optimize.quality = 0;
        assert!(config.validate().unwrap_err().to_string().contains("quality"));

        config.optimize.quality = 101;
        assert!(config.validate().unwrap_err().to_string().contains("quality"));

        config.optimize.quality = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_crop_zoom() {
        let mut config = Config::default();
        config.optimize.crop_zoom = 0.5;
        assert!(config.validate().unwrap_err().to_string().contains("crop_zoom"));

        config.optimize.crop_zoom = f64::NAN;
        assert!(config.validate().unwrap_err().to_string().contains("crop_zoom"));

        config.optimize.crop_zoom = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let mut config = Config::default();
        config.batch.output_names.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output_names"));
    }

    #[test]
    fn test_validate_rejects_names_with_separators() {
        let mut config = Config::default();
        config.batch.output_names = vec!["../escape.jpg".to_string()];
        assert!(config.validate().is_err());

        config.batch.output_names = vec!["..".to_string()];
        assert!(config.validate().is_err());

        config.batch.output_names = vec!["  ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut config = Config::default();
        config.batch.output_names = vec!["a.jpg".to_string(), "a.jpg".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_zero_max_images() {
        let mut config = Config::default();
        config.batch.max_images = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_images"));
    }
}
