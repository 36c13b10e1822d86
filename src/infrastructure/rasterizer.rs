//! Rasterizer - infrastructure layer
//!
//! Owns the headless browser and exposes a single capability: turn an HTML
//! document into a PNG file.

use std::path::Path;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, Viewport};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Browser, Page};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::browser;
use crate::error::{CardError, Result};

pub const CARD_WIDTH: u32 = 540;
pub const CARD_HEIGHT: u32 = 450;

/// Renders one HTML document to one image file
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, output: &Path, html: &str) -> Result<()>;
}

/// Chromium-backed rasterizer
///
/// One browser is shared by all jobs; every job gets its own page, which is
/// closed once the screenshot is written.
pub struct ChromeRasterizer {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl ChromeRasterizer {
    pub async fn launch() -> AnyResult<Self> {
        let (browser, handler) = browser::launch_headless_browser(CARD_WIDTH, CARD_HEIGHT).await?;
        Ok(Self { browser, handler })
    }

    /// Closes the browser and waits for its process to exit.
    pub async fn shutdown(mut self) -> AnyResult<()> {
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            warn!("browser did not exit cleanly: {}", e);
        }
        self.handler.await?;
        Ok(())
    }

    async fn capture(page: &Page, output: &Path, html: &str) -> Result<()> {
        page.set_content(html)
            .await
            .map_err(|e| CardError::rasterize(output, e))?;

        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .clip(card_clip())
            .build();

        page.save_screenshot(params, output)
            .await
            .map_err(|e| CardError::rasterize(output, e))?;
        Ok(())
    }
}

/// Screenshot region covering exactly the card canvas
fn card_clip() -> Viewport {
    Viewport {
        x: 0.0,
        y: 0.0,
        width: CARD_WIDTH as f64,
        height: CARD_HEIGHT as f64,
        scale: 1.0,
    }
}

#[async_trait]
impl Rasterizer for ChromeRasterizer {
    async fn rasterize(&self, output: &Path, html: &str) -> Result<()> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| CardError::rasterize(output, e))?;

        let result = Self::capture(&page, output, html).await;

        if let Err(e) = page.close().await {
            warn!("failed to close page for {}: {}", output.display(), e);
        }
        if result.is_ok() {
            debug!("wrote {}", output.display());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_matches_card_canvas() {
        let clip = card_clip();
        assert_eq!((clip.x, clip.y), (0.0, 0.0));
        assert_eq!((clip.width, clip.height), (540.0, 450.0));
        assert_eq!(clip.scale, 1.0);
    }
}
