//! Command-line handlers.

pub mod optimize;
