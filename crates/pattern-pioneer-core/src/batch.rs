//! Batch driver: select the first files of a directory and optimize each.
//!
//! Files are processed strictly one after another. A failing file is logged
//! and recorded in the report; it never stops the batch.

use std::path::{Path, PathBuf};

use crate::config::{BatchConfig, Config};
use crate::error::{PioneerError, PipelineResult, Result};
use crate::pipeline::{DiscoveredFile, FileDiscovery, ImageProcessor};
use crate::types::{BatchReport, FailedImage, OptimizedImage, TransformSettings};

/// One selected source file and the output name it maps to.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Zero-based position in the sorted batch
    pub index: usize,
    /// Source image
    pub source: DiscoveredFile,
    /// Output file name from the configured name list
    pub output_name: String,
}

/// The files a run will process, plus the ones beyond the limit.
#[derive(Debug, Clone, Default)]
pub struct BatchPlan {
    pub items: Vec<BatchItem>,
    pub skipped: Vec<PathBuf>,
}

impl BatchPlan {
    /// Assign names positionally to the first `min(max_images, names)` files.
    pub fn assign(files: Vec<DiscoveredFile>, batch: &BatchConfig) -> Self {
        let limit = batch.batch_limit();
        let mut plan = Self::default();
        for (index, file) in files.into_iter().enumerate() {
            if index < limit {
                plan.items.push(BatchItem {
                    index,
                    source: file,
                    output_name: batch.output_names[index].clone(),
                });
            } else {
                plan.skipped.push(file.path);
            }
        }
        plan
    }

    /// Number of recognized files, selected or not.
    pub fn found(&self) -> usize {
        self.items.len() + self.skipped.len()
    }

    /// Combined size of the selected source files.
    pub fn total_bytes(&self) -> u64 {
        self.items.iter().map(|item| item.source.size).sum()
    }
}

/// Runs the single-image transform over a directory.
pub struct BatchRunner {
    processor: ImageProcessor,
    discovery: FileDiscovery,
    batch: BatchConfig,
    settings: TransformSettings,
}

impl BatchRunner {
    /// Create a runner from a validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            processor: ImageProcessor::new(),
            discovery: FileDiscovery::new(&config.batch),
            batch: config.batch.clone(),
            settings: config.optimize.into(),
        }
    }

    /// List and select the files in `input_dir` without touching anything.
    pub fn plan(&self, input_dir: &Path) -> Result<BatchPlan> {
        if !input_dir.is_dir() {
            return Err(PioneerError::InputNotFound(input_dir.to_path_buf()));
        }
        let files = self.discovery.discover(input_dir);
        Ok(BatchPlan::assign(files, &self.batch))
    }

    /// Optimize the selected images of `input_dir` into `output_dir`.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        self.run_with_progress(input_dir, output_dir, |_, _| {})
    }

    /// Same as [`run`](Self::run), calling `on_item` after each file.
    pub fn run_with_progress<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        on_item: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&BatchItem, &PipelineResult<OptimizedImage>),
    {
        let plan = self.plan(input_dir)?;
        self.run_plan(plan, input_dir, output_dir, on_item)
    }

    /// Optimize the items of an existing plan into `output_dir`.
    ///
    /// The directory is not listed again, so the report covers exactly the
    /// files in `plan`.
    pub fn run_plan<F>(
        &self,
        plan: BatchPlan,
        input_dir: &Path,
        output_dir: &Path,
        mut on_item: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&BatchItem, &PipelineResult<OptimizedImage>),
    {
        std::fs::create_dir_all(output_dir)?;

        tracing::info!(
            "Found {} images in {}",
            plan.found(),
            input_dir.display()
        );
        for skipped in &plan.skipped {
            tracing::debug!("Beyond batch limit, skipping {:?}", skipped);
        }

        let mut report = BatchReport {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            found: plan.found(),
            skipped: plan.skipped,
            ..Default::default()
        };

        let total = plan.items.len();
        for item in &plan.items {
            let dest = output_dir.join(&item.output_name);
            tracing::info!(
                "Processing {}/{}: {} -> {}",
                item.index + 1,
                total,
                item.source.file_name().to_string_lossy(),
                item.output_name
            );

            let result = self
                .processor
                .transform(&item.source.path, &dest, &self.settings);
            on_item(item, &result);

            match result {
                Ok(image) => report.succeeded.push(image),
                Err(e) => {
                    tracing::error!("ERROR processing {:?}: {}", item.source.path, e);
                    report.failed.push(FailedImage {
                        source: item.source.path.clone(),
                        destination: dest,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
