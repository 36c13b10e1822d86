//! # Social Cards
//!
//! Renders a PNG preview card for every article of a content directory.
//!
//! ## Architecture
//!
//! ### ① Infrastructure
//! - `browser/` - launches the headless browser
//! - `infrastructure/` - `Rasterizer`: HTML in, PNG file out. `ChromeRasterizer`
//!   is the only owner of the browser
//!
//! ### ② Services
//! - `services/` - what can be done for a single article: embed an image,
//!   estimate reading time, build the card markup
//!
//! ### ③ Workflow
//! - `workflow/` - the full path of one article (parse → output dir → template → rasterize)
//!
//! ### ④ Orchestration
//! - `orchestrator/batch_processor` - lists articles, renders them in bounded
//!   batches, reports the summary
//!
//! `models/` holds the article types and loaders, `utils/` the chunking,
//! directory and logging helpers.

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

pub use config::Config;
pub use error::{CardError, ChunkError, ConfigError, Result};
pub use infrastructure::{ChromeRasterizer, Rasterizer};
pub use models::{Article, CardFields, Metadata, MetadataPolicy};
pub use orchestrator::{App, RunSummary};
pub use services::{image_data_uri, reading_time_minutes, AssetPaths, TemplateBuilder};
pub use utils::{chunk, ensure_dir};
pub use workflow::{CardFlow, CardJob};
