//! Image decoding with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::PipelineError;

use super::metadata::{MetadataExtractor, Orientation};

/// Decodes source images from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDecoder;

/// Result of decoding an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
    /// EXIF orientation, if the container carried one
    pub orientation: Option<Orientation>,
}

impl ImageDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Read and decode the image at `path`.
    ///
    /// The file is read once; the same buffer feeds both the pixel decoder
    /// and the EXIF reader.
    pub fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PipelineError::FileNotFound(path.to_path_buf())
            } else {
                PipelineError::Decode {
                    path: path.to_path_buf(),
                    message: format!("Cannot read file: {}", e),
                }
            }
        })?;
        Self::decode_bytes(bytes, path)
    }

    /// Decode an in-memory buffer; `path` is used for format fallback and errors.
    pub fn decode_bytes(bytes: Vec<u8>, path: &Path) -> Result<DecodedImage, PipelineError> {
        let file_size = bytes.len() as u64;
        let orientation = MetadataExtractor::orientation(&bytes);

        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => ImageFormat::from_path(path).map_err(|_| PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            })?,
        };
        let image = reader.decode().map_err(|e| match e {
            image::ImageError::Unsupported(u) => PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: u.to_string(),
            },
            other => PipelineError::Decode {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size,
            orientation,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        _ => "unknown".to_string(),
    }
}
