//! Single-image transform - wires together all processing stages.

use image::DynamicImage;
use std::path::Path;
use std::time::Instant;

use crate::error::PipelineResult;
use crate::types::{OptimizedImage, TransformSettings};

use super::color;
use super::crop::center_crop;
use super::decode::{format_to_string, ImageDecoder};
use super::encode::JpegWriter;
use super::thumbnail::downscale;

/// Runs the decode → normalize → orient → crop → resize → encode pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageProcessor {
    decoder: ImageDecoder,
}

impl ImageProcessor {
    /// Create a new image processor.
    pub fn new() -> Self {
        Self {
            decoder: ImageDecoder::new(),
        }
    }

    /// Optimize the image at `source` and write it as JPEG to `dest`.
    ///
    /// Any failure is returned as a value; `dest` is only created when the
    /// whole pipeline succeeded.
    pub fn transform(
        &self,
        source: &Path,
        dest: &Path,
        settings: &TransformSettings,
    ) -> PipelineResult<OptimizedImage> {
        let start = Instant::now();
        tracing::debug!("Processing: {:?}", source);

        // Decode
        let decoded = self.decoder.decode(source)?;
        tracing::info!(
            "Original size: {}x{}, Format: {}",
            decoded.width,
            decoded.height,
            format_to_string(decoded.format)
        );
        tracing::trace!("  Decode: {:?}", start.elapsed());

        // Normalize to opaque RGB
        let rgb = color::normalize(decoded.image);

        // Orientation correction; the tag is not carried into the output
        let rgb = match decoded.orientation {
            Some(orientation) => {
                tracing::debug!("Applying EXIF orientation {}", orientation.to_exif());
                match orientation.apply(DynamicImage::ImageRgb8(rgb)) {
                    DynamicImage::ImageRgb8(img) => img,
                    other => other.to_rgb8(),
                }
            }
            None => rgb,
        };

        // Center crop
        let (rgb, crop) = center_crop(rgb, settings.crop_zoom);
        if let Some(region) = crop {
            tracing::info!(
                "Cropped to {}x zoom: {}x{}",
                settings.crop_zoom,
                region.width,
                region.height
            );
        }

        // Downscale
        let rgb = downscale(rgb, settings.max_size);
        let (width, height) = rgb.dimensions();

        // Encode and write
        let output_bytes = JpegWriter::new(settings.quality).write(&rgb, dest)?;

        let result = OptimizedImage {
            source: source.to_path_buf(),
            destination: dest.to_path_buf(),
            format: format_to_string(decoded.format),
            original_width: decoded.width,
            original_height: decoded.height,
            orientation: decoded.orientation.map(|o| o.to_exif()),
            crop,
            width,
            height,
            original_bytes: decoded.file_size,
            output_bytes,
        };

        tracing::info!(
            "Optimized: {:.1}MB -> {:.0}KB",
            result.original_mb(),
            result.output_kb()
        );
        tracing::info!("New size: {}x{}", width, height);
        tracing::debug!("Processed {:?} in {:?}", source, start.elapsed());

        Ok(result)
    }
}
