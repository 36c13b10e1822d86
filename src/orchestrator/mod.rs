//! Orchestration layer
//!
//! `batch_processor` owns the rasterizer and the run: it lists the articles,
//! cuts them into batches of `max_concurrent_renders`, renders each batch
//! concurrently and the batches one after another, and collects the results.
//!
//! ```text
//! batch_processor (Vec<article file>)
//!     ↓
//! workflow::CardFlow (one article)
//!     ↓
//! services (template / embed / reading time)
//!     ↓
//! infrastructure (Rasterizer)
//! ```

pub mod batch_processor;

pub use batch_processor::{App, RunSummary};
