/// Logging setup and the log lines the pipeline prints
use std::path::Path;
use std::sync::Once;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides the default `info` level.
///
/// Calling it more than once is harmless.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

/// Logs the run start
///
/// # Parameters
/// - `total`: number of articles to render
/// - `max_concurrent`: batch size
pub fn log_startup(total: usize, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("Generating social cards for ({}) articles.", total);
    info!("📋 Rendering in batches of {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

pub fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("📦 Batch {}/{}: articles {}-{} of {}", batch_num, total_batches, start, end, total);
}

pub fn log_batch_complete(batch_num: usize, success: usize, total: usize) {
    info!("✓ Batch {} done: {}/{} rendered", batch_num, success, total);
}

pub fn log_card_failed(file_name: &str, err: &dyn std::fmt::Display) {
    error!("[{}] ❌ {}", file_name, err);
}

/// Prints the end-of-run statistics
///
/// # Parameters
/// - `success`: cards written
/// - `failed`: file names that produced no card
/// - `total`: articles attempted
/// - `output_dir`: where the cards were written
pub fn print_final_stats(success: usize, failed: &[String], total: usize, output_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!("📊 Finished at {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("✅ Rendered: {}/{}", success, total);
    if failed.is_empty() {
        info!("{}", "=".repeat(60));
        info!(
            "Social cards have been successfully written to: {}",
            output_dir.display()
        );
    } else {
        error!("❌ Failed: {} ({})", failed.len(), failed.join(", "));
        info!("{}", "=".repeat(60));
        info!(
            "Social cards have been written to: {} ({} failed)",
            output_dir.display(),
            failed.len()
        );
    }
}
