//! Card flow - workflow layer
//!
//! The full path of a single article: read and parse, prepare the output
//! directory, build the markup, rasterize.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::Rasterizer;
use crate::models::load_article;
use crate::services::TemplateBuilder;
use crate::utils::ensure_dir;
use crate::workflow::CardJob;

/// Renders one article into one card
pub struct CardFlow {
    templates: TemplateBuilder,
    output_dir: PathBuf,
}

impl CardFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            templates: TemplateBuilder::from_config(config),
            output_dir: config.output_dir.clone(),
        }
    }

    pub async fn run<R: Rasterizer + ?Sized>(&self, rasterizer: &R, job: &CardJob) -> Result<()> {
        debug!("{} reading {}", job, job.source.display());
        let article = load_article(&job.source).await?;

        ensure_dir(&self.output_dir).await?;

        let html = self.templates.build(&article).await?;
        debug!("{} template built ({} bytes)", job, html.len());

        rasterizer.rasterize(&job.output, &html).await?;
        info!("{} ✓ {}", job, job.output.display());
        Ok(())
    }
}
