use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Launches a headless browser whose window matches the card canvas.
///
/// The returned task drives the CDP event handler and ends when the browser
/// connection closes.
pub async fn launch_headless_browser(width: u32, height: u32) -> Result<(Browser, JoinHandle<()>)> {
    info!("🚀 Launching headless browser...");
    debug!("window size: {}x{}", width, height);

    let config = BrowserConfig::builder()
        .new_headless_mode()
        .window_size(width, height)
        .args(vec![
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
            "--hide-scrollbars",
        ])
        .build()
        .map_err(|e| {
            error!("invalid browser configuration: {}", e);
            anyhow::anyhow!("invalid browser configuration: {}", e)
        })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("failed to launch headless browser: {}", e);
        anyhow::anyhow!("failed to launch headless browser: {}", e)
    })?;
    debug!("headless browser started");

    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    Ok((browser, handler_task))
}
