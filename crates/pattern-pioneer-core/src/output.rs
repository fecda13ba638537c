//! Batch report serialization as JSON or JSON Lines.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::BatchReport;

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Single JSON object or array
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl ReportFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }

    /// Pick a format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::parse)
            .unwrap_or(Self::Json)
    }
}

/// A writer that serializes items to JSON or JSONL format.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
    pretty: bool,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer.
    ///
    /// `pretty` only affects the JSON format.
    pub fn new(writer: W, format: ReportFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
        }
    }

    /// Write a single item followed by a newline.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        if self.pretty && self.format == ReportFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, item).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
        }
        writeln!(self.writer)
    }

    /// Write a batch report.
    ///
    /// JSON writes the whole report as one object. JSONL writes one line per
    /// optimized image followed by one line per failure.
    pub fn write_report(&mut self, report: &BatchReport) -> io::Result<()> {
        match self.format {
            ReportFormat::Json => self.write(report),
            ReportFormat::JsonLines => {
                for image in &report.succeeded {
                    self.write(image)?;
                }
                for failure in &report.failed {
                    self.write(failure)?;
                }
                Ok(())
            }
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Write `report` to `path`, choosing the format from the extension.
pub fn write_report_file(path: &Path, report: &BatchReport) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = ReportWriter::new(BufWriter::new(file), ReportFormat::from_path(path), true);
    writer.write_report(report)?;
    writer.flush()
}
