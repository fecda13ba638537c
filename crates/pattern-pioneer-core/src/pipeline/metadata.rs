//! EXIF orientation extraction and correction.

use exif::{In, Reader, Tag, Value};
use image::DynamicImage;
use std::io::Cursor;

/// Stored orientation as defined by the EXIF `Orientation` tag (values 1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90,
    Transverse,
    Rotate270,
}

impl Orientation {
    /// Map an EXIF orientation value; out-of-range values yield `None`.
    pub fn from_exif(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Normal),
            2 => Some(Self::FlipHorizontal),
            3 => Some(Self::Rotate180),
            4 => Some(Self::FlipVertical),
            5 => Some(Self::Transpose),
            6 => Some(Self::Rotate90),
            7 => Some(Self::Transverse),
            8 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// The EXIF value of this orientation.
    pub fn to_exif(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::FlipHorizontal => 2,
            Self::Rotate180 => 3,
            Self::FlipVertical => 4,
            Self::Transpose => 5,
            Self::Rotate90 => 6,
            Self::Transverse => 7,
            Self::Rotate270 => 8,
        }
    }

    /// Rotate/flip pixel data so that this orientation becomes `Normal`.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => image,
            Self::FlipHorizontal => image.fliph(),
            Self::Rotate180 => image.rotate180(),
            Self::FlipVertical => image.flipv(),
            Self::Transpose => image.rotate90().fliph(),
            Self::Rotate90 => image.rotate90(),
            Self::Transverse => image.rotate270().fliph(),
            Self::Rotate270 => image.rotate270(),
        }
    }
}

/// Extracts EXIF metadata from encoded image bytes.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Read the primary-image orientation tag.
    ///
    /// Returns `None` if the container has no EXIF block, no orientation
    /// tag, or an invalid value. Never fails: a garbled EXIF block must not
    /// prevent the image itself from being processed.
    pub fn orientation(bytes: &[u8]) -> Option<Orientation> {
        let mut cursor = Cursor::new(bytes);
        let exif = Reader::new().read_from_container(&mut cursor).ok()?;
        let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
        let value = match &field.value {
            Value::Short(v) => v.first().map(|&x| x as u32),
            Value::Long(v) => v.first().copied(),
            _ => None,
        }?;
        let orientation = Orientation::from_exif(value);
        if orientation.is_none() {
            tracing::debug!("Ignoring invalid EXIF orientation value {}", value);
        }
        orientation
    }
}
