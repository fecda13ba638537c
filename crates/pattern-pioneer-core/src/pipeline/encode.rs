//! JPEG encoding and crash-safe output writing.

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// Encodes RGB images as JPEG and writes them to disk.
#[derive(Debug, Clone, Copy)]
pub struct JpegWriter {
    quality: u8,
}

impl JpegWriter {
    /// Create a writer; `quality` is clamped to 1-100.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encode `image` into an in-memory JPEG with optimized Huffman tables.
    pub fn encode(&self, image: &RgbImage, dest: &Path) -> Result<Vec<u8>, PipelineError> {
        self.encode_with(image, dest, true)
    }

    fn encode_with(
        &self,
        image: &RgbImage,
        dest: &Path,
        optimize_huffman: bool,
    ) -> Result<Vec<u8>, PipelineError> {
        let encode_error = |message: String| PipelineError::Encode {
            path: dest.to_path_buf(),
            message,
        };

        // JPEG frame headers store each side in 16 bits
        let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(encode_error(format!(
                    "{}x{} exceeds the JPEG limit of {} pixels per side",
                    image.width(),
                    image.height(),
                    u16::MAX
                )))
            }
        };

        let mut buffer = Vec::new();
        let mut encoder = Encoder::new(&mut buffer, self.quality);
        encoder.set_optimized_huffman_tables(optimize_huffman);
        encoder
            .encode(image.as_raw(), width, height, ColorType::Rgb)
            .map_err(|e| encode_error(e.to_string()))?;
        Ok(buffer)
    }

    /// Encode `image` and write it to `dest`, replacing any existing file.
    ///
    /// The bytes go to a sibling `.part` file that is renamed into place, so
    /// a failed run never leaves a truncated JPEG behind. Returns the number
    /// of bytes written.
    pub fn write(&self, image: &RgbImage, dest: &Path) -> Result<u64, PipelineError> {
        let bytes = self.encode(image, dest)?;
        let part = part_path(dest);

        let result = std::fs::write(&part, &bytes).and_then(|_| std::fs::rename(&part, dest));
        if let Err(e) = result {
            if let Err(cleanup) = std::fs::remove_file(&part) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Could not remove {:?}: {}", part, cleanup);
                }
            }
            return Err(PipelineError::Write {
                path: dest.to_path_buf(),
                message: e.to_string(),
            });
        }
        Ok(bytes.len() as u64)
    }
}

/// Temporary path used while writing `dest`.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
