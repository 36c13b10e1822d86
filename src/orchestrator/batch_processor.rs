//! Batch processor - orchestration layer
//!
//! 1. **Listing**: every file of the content directory except the index file
//! 2. **Batching**: groups of at most `max_concurrent_renders`, in listing order
//! 3. **Concurrency**: all jobs of a batch run together; the next batch starts
//!    only after every job of the current one has finished, failed or not
//! 4. **Isolation**: a failed article is logged and counted, its siblings keep going
//! 5. **Summary**: rendered / failed counts for the whole run

use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::warn;

use crate::config::Config;
use crate::infrastructure::{ChromeRasterizer, Rasterizer};
use crate::models::list_articles;
use crate::utils::{chunk, ensure_dir, logging};
use crate::workflow::{CardFlow, CardJob};

/// Application: configuration plus the rasterizer every job shares
pub struct App<R = ChromeRasterizer> {
    config: Config,
    rasterizer: R,
    flow: CardFlow,
}

impl App<ChromeRasterizer> {
    /// Launches the headless browser
    pub async fn initialize(config: Config) -> Result<Self> {
        let rasterizer = ChromeRasterizer::launch()
            .await
            .context("could not start the headless browser")?;
        Ok(Self::with_rasterizer(config, rasterizer))
    }

    pub async fn shutdown(self) -> Result<()> {
        self.rasterizer.shutdown().await
    }
}

impl<R: Rasterizer> App<R> {
    pub fn with_rasterizer(config: Config, rasterizer: R) -> Self {
        let flow = CardFlow::new(&config);
        Self {
            config,
            rasterizer,
            flow,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Renders a card for every article of the content directory.
    ///
    /// Only setup problems (unreadable content directory, unusable output
    /// directory) are returned as errors; failed articles end up in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        let config = &self.config;
        let files = list_articles(&config.content_dir, &config.excluded_file)
            .await
            .with_context(|| format!("cannot list {}", config.content_dir.display()))?;

        let total = files.len();
        logging::log_startup(total, config.max_concurrent_renders);

        ensure_dir(&config.output_dir)
            .await
            .with_context(|| format!("cannot prepare {}", config.output_dir.display()))?;

        let mut summary = RunSummary {
            total,
            ..Default::default()
        };

        if files.is_empty() {
            warn!("⚠️ No articles found in {}", config.content_dir.display());
            logging::print_final_stats(0, &[], 0, &config.output_dir);
            return Ok(summary);
        }

        let batches = chunk(&files, config.max_concurrent_renders)?;
        let total_batches = batches.len();
        let mut next_index = 1;

        for (batch_idx, batch) in batches.into_iter().enumerate() {
            let batch_num = batch_idx + 1;
            let jobs: Vec<CardJob> = batch
                .into_iter()
                .map(|source| {
                    let job = CardJob::new(next_index, source, &config.output_dir);
                    next_index += 1;
                    job
                })
                .collect();

            logging::log_batch_start(
                batch_num,
                total_batches,
                jobs[0].index,
                jobs[jobs.len() - 1].index,
                total,
            );

            let result = self.process_batch(&jobs).await;
            logging::log_batch_complete(batch_num, result.succeeded, jobs.len());

            summary.batch_sizes.push(jobs.len());
            summary.succeeded += result.succeeded;
            summary.failed.extend(result.failed);
        }

        logging::print_final_stats(summary.succeeded, &summary.failed, total, &config.output_dir);
        Ok(summary)
    }

    /// Runs every job of the batch and waits for all of them to settle.
    async fn process_batch(&self, jobs: &[CardJob]) -> BatchResult {
        let outcomes = join_all(jobs.iter().map(|job| async move {
            let outcome = self.flow.run(&self.rasterizer, job).await;
            (job, outcome)
        }))
        .await;

        let mut result = BatchResult::default();
        for (job, outcome) in outcomes {
            match outcome {
                Ok(()) => result.succeeded += 1,
                Err(e) => {
                    logging::log_card_failed(&job.file_name(), &e);
                    result.failed.push(job.file_name());
                }
            }
        }
        result
    }
}

/// Outcome of a whole run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Articles found (index file excluded)
    pub total: usize,
    pub succeeded: usize,
    /// File names of the articles that produced no card
    pub failed: Vec<String>,
    /// Size of every batch, in processing order
    pub batch_sizes: Vec<usize>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Default)]
struct BatchResult {
    succeeded: usize,
    failed: Vec<String>,
}
