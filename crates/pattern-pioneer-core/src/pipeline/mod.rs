//! Image processing pipeline components.
//!
//! Stages, in the order a transform runs them:
//! - **decode**: Load and decode images from various formats
//! - **metadata**: Read the EXIF orientation and undo it
//! - **color**: Flatten alpha onto white and convert to RGB8
//! - **crop**: Center crop ("zoom")
//! - **thumbnail**: Aspect-preserving downscale
//! - **encode**: JPEG encoding and output writing
//!
//! Plus **discovery** (find source files) and **processor** (runs the stages).

pub mod color;
pub mod crop;
pub mod decode;
pub mod discovery;
pub mod encode;
pub mod metadata;
pub mod processor;
pub mod thumbnail;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use encode::JpegWriter;
pub use metadata::{MetadataExtractor, Orientation};
pub use processor::ImageProcessor;
