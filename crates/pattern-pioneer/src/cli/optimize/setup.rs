//! Config overrides from the command line.

use pattern_pioneer_core::Config;

use super::OptimizeArgs;

/// Apply CLI options on top of the loaded config and re-validate.
pub fn apply_overrides(config: &mut Config, args: &OptimizeArgs) -> anyhow::Result<()> {
    if let Some(ref output_dir) = args.output_dir {
        config.batch.output_dir = output_dir.clone();
    }
    if let Some(max_size) = args.max_size {
        config.optimize.max_size = max_size;
    }
    if let Some(quality) = args.quality {
        config.optimize.quality = quality;
    }
    if let Some(crop_zoom) = args.crop_zoom {
        config.optimize.crop_zoom = crop_zoom;
    }
    if let Some(ref names) = args.names {
        config.batch.output_names = names.iter().map(|n| n.trim().to_string()).collect();
    }

    config.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, &OptimizeArgs::default()).unwrap();
        assert_eq!(config.optimize.max_size, 800);
        assert_eq!(config.optimize.quality, 85);
        assert_eq!(config.optimize.crop_zoom, 2.0);
        assert_eq!(config.batch.output_dir, PathBuf::from("images"));
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config = Config::default();
        let args = OptimizeArgs {
            output_dir: Some(PathBuf::from("public/img")),
            max_size: Some(400),
            quality: Some(60),
            crop_zoom: Some(1.0),
            names: Some(vec![" hero.jpg".to_string(), "detail.jpg ".to_string()]),
            ..Default::default()
        };
        apply_overrides(&mut config, &args).unwrap();

        assert_eq!(config.batch.output_dir, PathBuf::from("public/img"));
        assert_eq!(config.optimize.max_size, 400);
        assert_eq!(config.optimize.quality, 60);
        assert_eq!(config.optimize.crop_zoom, 1.0);
        assert_eq!(config.batch.output_names, vec!["hero.jpg", "detail.jpg"]);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut config = Config::default();
        let args = OptimizeArgs {
            names: Some(vec!["a.jpg".to_string(), "a.jpg".to_string()]),
            ..Default::default()
        };
        assert!(apply_overrides(&mut config, &args).is_err());
    }
}
