//! Error types for the Pattern Pioneer optimizer.
//!
//! Batch-level failures abort the run; pipeline errors belong to a single
//! source file and are collected into the batch report instead.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for optimizer operations.
#[derive(Error, Debug)]
pub enum PioneerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// The input directory is missing or is not a directory
    #[error("Input directory '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-file pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading or decoding the source failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Format could not be recognized or is not compiled in
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// JPEG encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Writing the output file failed
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl PipelineError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PipelineError::FileNotFound(path)
            | PipelineError::Decode { path, .. }
            | PipelineError::UnsupportedFormat { path, .. }
            | PipelineError::Encode { path, .. }
            | PipelineError::Write { path, .. } => path,
        }
    }
}

/// Convenience type alias for optimizer results.
pub type Result<T> = std::result::Result<T, PioneerError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
