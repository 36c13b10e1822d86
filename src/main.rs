use std::process::ExitCode;

use anyhow::{Context, Result};
use social_cards::utils::logging;
use social_cards::{App, Config};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // images are resolved under the directory the tool is started from
    let assets_root = std::env::current_dir().context("cannot read the working directory")?;

    let config = match Config::from_args(std::env::args_os(), assets_root) {
        Ok(config) => config,
        Err(usage) => {
            println!("{}", usage);
            return Ok(ExitCode::FAILURE);
        }
    };

    logging::init();

    let app = App::initialize(config).await?;
    let result = app.run().await;

    if let Err(e) = app.shutdown().await {
        warn!("browser shutdown failed: {:#}", e);
    }

    let summary = result?;
    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
